use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::components::accessibility::announce;
use crate::models::tabs::{announcement, TabKey};

#[derive(Clone, PartialEq)]
pub struct FeatureTab {
    pub id: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub points: Vec<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct FeatureTabsProps {
    pub tabs: Vec<FeatureTab>,
}

#[function_component(FeatureTabs)]
pub fn feature_tabs(props: &FeatureTabsProps) -> Html {
    let active = use_state_eq(|| 0usize);
    let buttons = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        props.tabs.len(),
    );

    let activate = {
        let active = active.clone();
        let labels: Vec<&'static str> = props.tabs.iter().map(|tab| tab.label).collect();
        Callback::from(move |index: usize| {
            active.set(index);
            if let Some(label) = labels.get(index) {
                announce(&announcement(label));
            }
        })
    };

    let tab_count = props.tabs.len();

    html! {
        <div class="feature-tabs">
            <div class="tab-list" role="tablist">
                { for props.tabs.iter().enumerate().map(|(index, tab)| {
                    let selected = *active == index;
                    let onclick = {
                        let activate = activate.clone();
                        Callback::from(move |_: MouseEvent| activate.emit(index))
                    };
                    let onkeydown = {
                        let activate = activate.clone();
                        let buttons = buttons.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            let Some(key) = TabKey::from_key(&e.key()) else {
                                return;
                            };
                            e.prevent_default();
                            if let Some(target) = key.target(index, tab_count) {
                                if let Some(button) =
                                    buttons.get(target).and_then(|b| b.cast::<HtmlElement>())
                                {
                                    let _ = button.focus();
                                }
                                activate.emit(target);
                            }
                        })
                    };
                    html! {
                        <button
                            ref={buttons[index].clone()}
                            class={classes!("tab-btn", selected.then_some("active"))}
                            role="tab"
                            data-tab={tab.id}
                            aria-selected={selected.to_string()}
                            tabindex={if selected { "0" } else { "-1" }}
                            {onclick}
                            {onkeydown}
                        >
                            {tab.label}
                        </button>
                    }
                }) }
            </div>
            { for props.tabs.iter().enumerate().map(|(index, tab)| html! {
                <div
                    class={classes!("tab-panel", (*active == index).then_some("active"))}
                    role="tabpanel"
                    data-tab={tab.id}
                >
                    <div class="feature-visual"><span class="visual-core"></span></div>
                    <h3>{tab.heading}</h3>
                    <ul>
                        { for tab.points.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </div>
            }) }
        </div>
    }
}
