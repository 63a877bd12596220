use web_sys::Element;
use yew::prelude::*;

use crate::models::effects::{tilt, Point, Rect, CARD_LIFT};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    pub divisor: f64,
    /// Lift the card as soon as the pointer enters, before it moves.
    #[prop_or_default]
    pub lift_on_enter: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let transform = use_state_eq(String::new);
    let card = use_node_ref();

    let onmouseenter = {
        let transform = transform.clone();
        let lift = props.lift_on_enter;
        Callback::from(move |_: MouseEvent| {
            if lift {
                transform.set(CARD_LIFT.to_string());
            }
        })
    };

    let onmousemove = {
        let transform = transform.clone();
        let card = card.clone();
        let divisor = props.divisor;
        Callback::from(move |e: MouseEvent| {
            let Some(element) = card.cast::<Element>() else {
                return;
            };
            let rect = Rect::from(&element.get_bounding_client_rect());
            let pointer = Point {
                x: f64::from(e.client_x()),
                y: f64::from(e.client_y()),
            };
            transform.set(tilt(pointer, rect, divisor).transform());
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(String::new()))
    };

    let style = (!transform.is_empty()).then(|| format!("transform: {}", *transform));

    html! {
        <div ref={card} class={props.class.clone()} style={style} {onmouseenter} {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}
