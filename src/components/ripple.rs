use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::models::effects::{ripple, Point, Rect, Ripple};
use crate::utils::analytics::{track_event, TrackingEvent};

#[derive(Default, PartialEq)]
struct Ripples {
    live: Vec<(u32, Ripple)>,
}

enum RippleAction {
    Add(u32, Ripple),
    Remove(u32),
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut live = self.live.clone();
        match action {
            RippleAction::Add(id, ripple) => live.push((id, ripple)),
            RippleAction::Remove(id) => live.retain(|(existing, _)| *existing != id),
        }
        Rc::new(Self { live })
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    /// `button` or `submit`.
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// A `.btn` with the click ripple. Primary non-submit buttons count as CTA clicks.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let ripples = use_reducer(Ripples::default);
    let next_id = use_mut_ref(|| 0u32);
    let button = use_node_ref();

    let tracks_cta = &*props.kind != "submit" && props.class.contains("btn-primary");

    let onclick = {
        let ripples = ripples.dispatcher();
        let button = button.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = button.cast::<Element>() {
                let rect = Rect::from(&element.get_bounding_client_rect());
                let click = Point {
                    x: f64::from(e.client_x()),
                    y: f64::from(e.client_y()),
                };
                let id = {
                    let mut counter = next_id.borrow_mut();
                    let id = *counter;
                    *counter = id.wrapping_add(1);
                    id
                };
                ripples.dispatch(RippleAction::Add(id, ripple(click, rect)));
                let ripples = ripples.clone();
                Timeout::new(config::get_config().ripple_lifetime_ms, move || {
                    ripples.dispatch(RippleAction::Remove(id))
                })
                .forget();
            }
            if tracks_cta {
                track_event(TrackingEvent::cta_click());
            }
            onclick.emit(e);
        })
    };

    html! {
        <button
            ref={button}
            type={props.kind.clone()}
            class={classes!("btn", props.class.clone())}
            disabled={props.disabled}
            {onclick}
        >
            { for props.children.iter() }
            { for ripples.live.iter().map(|(id, ripple)| html! {
                <span key={*id} class="ripple" style={ripple.style()}></span>
            }) }
        </button>
    }
}
