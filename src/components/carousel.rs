use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;
use crate::models::carousel::{ArrowKey, Carousel, CarouselAction, SuspendReason};
use crate::utils::dom::{self, EventListener};

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Err(e) = next.apply(action) {
            log::warn!("Ignoring carousel action {:?}: {}", action, e);
            return self;
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn on_event<E: 'static>(
    carousel: &UseReducerHandle<Carousel>,
    action: CarouselAction,
) -> Callback<E> {
    let dispatcher = carousel.dispatcher();
    Callback::from(move |_: E| dispatcher.dispatch(action))
}

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

#[function_component(SlideCarousel)]
pub fn slide_carousel(props: &CarouselProps) -> Html {
    let carousel = use_reducer({
        let total = props.slides.len();
        move || Carousel::new(total)
    });
    let autoplay_active = carousel.is_autoplay_active();

    // The interval exists only while autoplay is running.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |active| {
                let interval = active.then(|| {
                    let period = config::get_config().autoplay_interval_ms;
                    Interval::new(period, move || dispatcher.dispatch(CarouselAction::Tick))
                });
                move || drop(interval)
            },
            autoplay_active,
        );
    }

    // Arrow keys anywhere on the page, and shutdown on unload.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                if let Ok(document) = dom::document() {
                    let dispatcher = dispatcher.clone();
                    listeners.extend(dom::optional(
                        "Carousel keyboard navigation",
                        EventListener::new(&document, "keydown", move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            // tab lists claim arrow keys for themselves
                            if event.default_prevented() {
                                return;
                            }
                            if let Some(key) = ArrowKey::from_key(&event.key()) {
                                dispatcher.dispatch(CarouselAction::Arrow(key));
                            }
                        }),
                    ));
                }
                if let Ok(window) = dom::window() {
                    listeners.extend(dom::optional(
                        "Carousel unload teardown",
                        EventListener::new(&window, "beforeunload", move |_| {
                            dispatcher.dispatch(CarouselAction::Suspend(SuspendReason::Unload));
                        }),
                    ));
                }
                move || drop(listeners)
            },
            (),
        );
    }

    let view = carousel.view();

    html! {
        <div class="carousel"
            onmouseenter={on_event(&carousel, CarouselAction::Suspend(SuspendReason::Pointer))}
            onmouseleave={on_event(&carousel, CarouselAction::Resume)}
            ontouchstart={on_event(&carousel, CarouselAction::Suspend(SuspendReason::Touch))}
        >
            <div class="carousel-viewport">
                <div class="carousel-track" style={format!("transform: {}", view.track_transform)}>
                    { for props.slides.iter().zip(view.active.iter()).map(|(slide, active)| html! {
                        <div class={classes!("carousel-slide", active.then_some("active"))}
                            aria-hidden={(!active).to_string()}>
                            <div class="slide-icon">{slide.icon}</div>
                            <h3>{slide.title}</h3>
                            <p>{slide.body}</p>
                        </div>
                    }) }
                </div>
            </div>
            <button class="carousel-btn prev" aria-label="Previous slide"
                onclick={on_event(&carousel, CarouselAction::Previous)}>{"‹"}</button>
            <button class="carousel-btn next" aria-label="Next slide"
                onclick={on_event(&carousel, CarouselAction::Next)}>{"›"}</button>
            <div class="carousel-indicators" role="tablist">
                { for view.active.iter().enumerate().map(|(index, active)| html! {
                    <button
                        class={classes!("indicator", active.then_some("active"))}
                        aria-label={format!("Go to slide {}", index + 1)}
                        aria-current={active.to_string()}
                        onclick={on_event(&carousel, CarouselAction::GoTo(index))}
                    />
                }) }
            </div>
        </div>
    }
}
