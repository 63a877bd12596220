use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ripple::RippleButton;
use crate::config::{self, LandingConfig};
use crate::models::waitlist::{Waitlist, WaitlistForm};
use crate::utils::analytics::ConsoleSink;
use crate::utils::api;
use crate::utils::storage::{store_or_memory, LocalStorageStore};

const SUBMIT_LABEL: &str = "Join Waitlist";

/// Wires the signup pipeline to browser services.
pub fn browser_waitlist(settings: &LandingConfig) -> Waitlist {
    let store = store_or_memory(LocalStorageStore::open(settings.storage_key));
    Waitlist::new(
        Rc::from(api::registrar_from_config(settings)),
        store,
        Rc::new(ConsoleSink),
    )
}

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    /// Fired once per successful signup.
    #[prop_or_default]
    pub on_signup: Callback<()>,
}

#[function_component(WaitlistSignup)]
pub fn waitlist_signup(props: &WaitlistFormProps) -> Html {
    let waitlist = use_memo(|_| browser_waitlist(&config::get_config()), ());
    let form = use_mut_ref(|| WaitlistForm::new(SUBMIT_LABEL));
    let rerender = use_force_update();

    let oninput = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_input(input.value());
            rerender.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let rerender = rerender.clone();
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let begun = form.borrow_mut().begin();
            rerender.force_update();
            let Ok(email) = begun else {
                return;
            };

            let waitlist = waitlist.clone();
            let form = form.clone();
            let rerender = rerender.clone();
            let on_signup = on_signup.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = waitlist.complete(&form, &email).await;
                rerender.force_update();

                let Ok(dismiss) = outcome else {
                    return;
                };
                on_signup.emit(());
                if let Some(id) = dismiss {
                    let delay = config::get_config().success_dismiss_ms;
                    Timeout::new(delay, move || {
                        form.borrow_mut().dismiss(id);
                        rerender.force_update();
                    })
                    .forget();
                }
            });
        })
    };

    let (input, control, message) = {
        let state = form.borrow();
        (
            state.input().to_string(),
            state.control().clone(),
            state.message().cloned(),
        )
    };
    let message = message.map(|message| {
        html! {
            <div id="formMessage" role="status"
                class={classes!("form-message", message.visible.then_some("show"), message.kind.class())}>
                {message.text}
            </div>
        }
    });

    html! {
        <form id="waitlistForm" class="waitlist-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <input
                    id="emailInput"
                    type="email"
                    placeholder="Enter your email address"
                    aria-label="Email address"
                    value={input}
                    {oninput}
                />
                <RippleButton class="btn-primary" kind="submit" disabled={control.disabled}>
                    <span class="btn-text">{control.label.clone()}</span>
                </RippleButton>
            </div>
            { message.unwrap_or_else(|| html! { <div id="formMessage" class="form-message"></div> }) }
        </form>
    }
}
