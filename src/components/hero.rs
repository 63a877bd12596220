use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::models::effects::{parallax, ParallaxFrame, Point, Rect};
use crate::utils::dom::{self, EventListener};

const SHAPES: [&str; 3] = ["shape-hex", "shape-ring", "shape-shard"];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = use_node_ref();
    let frame = use_state_eq(|| None::<ParallaxFrame>);
    let glow = use_state_eq(|| None::<Point>);

    // Parallax, at most one update per animation frame.
    {
        let hero = hero.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window().and_then(|window| {
                    let last_scroll = Rc::new(Cell::new(0.0));
                    let ticking = Rc::new(Cell::new(false));
                    let scroll_window = window.clone();
                    EventListener::passive(&window, "scroll", move |_| {
                        last_scroll.set(scroll_window.page_y_offset().unwrap_or(0.0));
                        if ticking.replace(true) {
                            return;
                        }
                        let hero = hero.clone();
                        let frame = frame.clone();
                        let last_scroll = last_scroll.clone();
                        let ticking = ticking.clone();
                        dom::request_frame(move || {
                            let height = hero
                                .cast::<HtmlElement>()
                                .map(|el| f64::from(el.offset_height()))
                                .unwrap_or(0.0);
                            if let Some(next) = parallax(last_scroll.get(), height, SHAPES.len()) {
                                frame.set(Some(next));
                            }
                            ticking.set(false);
                        });
                    })
                });
                let listener = dom::optional("Hero parallax", listener);
                move || drop(listener)
            },
            (),
        );
    }

    let onmousemove = {
        let hero = hero.clone();
        let glow = glow.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = hero.cast::<Element>() {
                let rect = Rect::from(&element.get_bounding_client_rect());
                glow.set(Some(rect.local(Point {
                    x: f64::from(e.client_x()),
                    y: f64::from(e.client_y()),
                })));
            }
        })
    };
    let onmouseleave = {
        let glow = glow.clone();
        Callback::from(move |_: MouseEvent| glow.set(None))
    };

    let background_style = frame
        .as_ref()
        .map(|f| format!("transform: {}", f.background_transform()));
    let glow_style = match *glow {
        Some(Point { x, y }) => format!("left: {x}px; top: {y}px; opacity: 1;"),
        None => "opacity: 0;".to_string(),
    };

    html! {
        <section id="hero" class="hero" ref={hero} {onmousemove} {onmouseleave}>
            <div class="hero-background" style={background_style}>
                { for SHAPES.iter().enumerate().map(|(index, shape)| {
                    let style = frame
                        .as_ref()
                        .and_then(|f| f.shape_transform(index))
                        .map(|t| format!("transform: {t}"));
                    html! { <div class={classes!("shape", *shape)} style={style}></div> }
                }) }
            </div>
            <div class="mouse-glow" style={glow_style}></div>
            <div class="hero-content">
                { for props.children.iter() }
            </div>
        </section>
    }
}
