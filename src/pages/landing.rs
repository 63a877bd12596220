use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::accessibility::SkipLink;
use crate::components::cards::TiltCard;
use crate::components::carousel::{Slide, SlideCarousel};
use crate::components::feature_tabs::{FeatureTab, FeatureTabs};
use crate::components::hero::Hero;
use crate::components::navbar::{scroll_to_section, NavLink, Navbar};
use crate::components::page::use_page_lifecycle;
use crate::components::reveal::use_scroll_reveal;
use crate::components::ripple::RippleButton;
use crate::components::waitlist_form::WaitlistSignup;
use crate::config;
use crate::models::effects::{COMMUNITY_TILT_DIVISOR, PILLAR_TILT_DIVISOR};
use crate::models::stats::increment_stat;
use crate::utils::analytics::{track_event, TrackingEvent};

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { href: "#features", label: "Features" },
        NavLink { href: "#showcase", label: "Showcase" },
        NavLink { href: "#pillars", label: "Security" },
        NavLink { href: "#roadmap", label: "Roadmap" },
        NavLink { href: "#community", label: "Community" },
    ]
}

fn feature_tabs() -> Vec<FeatureTab> {
    vec![
        FeatureTab {
            id: "security",
            label: "Security",
            heading: "Hardened from the kernel up",
            points: vec![
                "Verified boot chain with measured launch",
                "Per-app sandboxes with capability grants",
                "Memory-safe system services",
            ],
        },
        FeatureTab {
            id: "privacy",
            label: "Privacy",
            heading: "Your data stays yours",
            points: vec![
                "No telemetry by default",
                "Encrypted storage with hardware-backed keys",
                "Network permissions you can actually read",
            ],
        },
        FeatureTab {
            id: "performance",
            label: "Performance",
            heading: "Fast without cutting corners",
            points: vec![
                "Sub-second cold boot on supported hardware",
                "Async I/O throughout the storage stack",
                "Scheduler tuned for interactive latency",
            ],
        },
    ]
}

fn showcase_slides() -> Vec<Slide> {
    vec![
        Slide {
            icon: "🛡️",
            title: "Obsidian Shield",
            body: "Real-time threat isolation that contains compromised apps before they spread.",
        },
        Slide {
            icon: "🔐",
            title: "Vault",
            body: "A zero-knowledge credential store integrated with every login prompt.",
        },
        Slide {
            icon: "🌐",
            title: "Onion Routing",
            body: "System-wide network anonymity, toggled per app or for the whole device.",
        },
        Slide {
            icon: "⚙️",
            title: "Reproducible Updates",
            body: "Every release is built deterministically and signed by independent builders.",
        },
    ]
}

const PILLARS: [(&str, &str, &str); 3] = [
    ("🔒", "Security", "Defense in depth across boot, kernel and userland."),
    ("👁️", "Privacy", "Nothing leaves the device unless you say so."),
    ("⚡", "Freedom", "Open source, auditable, and yours to modify."),
];

const ROADMAP: [(&str, &str, &str); 4] = [
    ("Q1", "Alpha", "Kernel, sandboxing and the installer for early testers."),
    ("Q2", "Beta", "Vault, Shield and the first public hardware targets."),
    ("Q3", "Release Candidate", "Independent audit and reproducible builds."),
    ("Q4", "1.0", "General availability and long-term support channel."),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Finally an OS that treats security as the default, not an add-on.", "Security researcher"),
    ("The sandbox model is the cleanest I have worked with.", "Systems engineer"),
    ("I switched my whole team during the alpha.", "CTO, privacy startup"),
];

const COMMUNITY: [(&str, &str, &str); 3] = [
    ("💬", "Discord", "https://discord.gg/"),
    ("🐙", "GitHub", "https://github.com/"),
    ("📰", "Newsletter", "#waitlist"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_page_lifecycle();
    use_scroll_reveal();

    let waitlist_count = use_state(|| "2,847".to_string());
    let count_highlight = use_state_eq(|| false);

    let on_signup = {
        let waitlist_count = waitlist_count.clone();
        let count_highlight = count_highlight.clone();
        Callback::from(move |_: ()| {
            let Some(next) = increment_stat(&waitlist_count) else {
                return;
            };
            waitlist_count.set(next);
            count_highlight.set(true);
            let count_highlight = count_highlight.clone();
            Timeout::new(config::get_config().stat_highlight_ms, move || {
                count_highlight.set(false)
            })
            .forget();
        })
    };

    let join_cta = Callback::from(|_: MouseEvent| scroll_to_section("#waitlist"));
    let explore_cta = Callback::from(|_: MouseEvent| scroll_to_section("#features"));

    let count_style = if *count_highlight {
        "transform: scale(1.2); color: var(--color-accent-green);"
    } else {
        "transform: scale(1);"
    };

    html! {
        <div class="landing-page">
            <SkipLink target="hero" />
            <Navbar brand="Obsidian OS" links={nav_links()} />

            <Hero>
                <h1 class="hero-title">{"Fortify Your Digital Frontier"}</h1>
                <p class="hero-subtitle">
                    {"An operating system built for people who refuse to trade privacy for convenience."}
                </p>
                <div class="hero-actions">
                    <RippleButton class="btn-primary" onclick={join_cta}>
                        {"Join the Waitlist"}
                    </RippleButton>
                    <RippleButton class="btn-secondary" onclick={explore_cta}>
                        {"Explore Features"}
                    </RippleButton>
                </div>
                <div class="hero-stats">
                    <div class="stat-item">
                        <span class="stat-number" style={count_style}>{(*waitlist_count).clone()}</span>
                        <span class="stat-label">{"on the waitlist"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{"100%"}</span>
                        <span class="stat-label">{"open source"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{"0"}</span>
                        <span class="stat-label">{"trackers"}</span>
                    </div>
                </div>
            </Hero>

            <main>
                <section id="features" class="features fade-in">
                    <h2 class="section-title">{"Built Different"}</h2>
                    <FeatureTabs tabs={feature_tabs()} />
                </section>

                <section id="showcase" class="showcase fade-in">
                    <h2 class="section-title">{"Inside Obsidian"}</h2>
                    <SlideCarousel slides={showcase_slides()} />
                </section>

                <section id="pillars" class="pillars">
                    <h2 class="section-title fade-in">{"Three Pillars"}</h2>
                    <div class="pillar-grid">
                        { for PILLARS.iter().map(|(icon, title, body)| html! {
                            <TiltCard class="pillar-card fade-in" divisor={PILLAR_TILT_DIVISOR} lift_on_enter={true}>
                                <div class="pillar-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </TiltCard>
                        }) }
                    </div>
                </section>

                <section id="roadmap" class="roadmap">
                    <h2 class="section-title fade-in">{"Roadmap"}</h2>
                    <div class="timeline">
                        { for ROADMAP.iter().map(|(quarter, milestone, detail)| html! {
                            <div class="timeline-item">
                                <span class="timeline-marker">{*quarter}</span>
                                <div class="timeline-content">
                                    <h3>{*milestone}</h3>
                                    <p>{*detail}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="testimonials fade-in">
                    <h2 class="section-title">{"Early Voices"}</h2>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <blockquote class="testimonial-card">
                                <p>{*quote}</p>
                                <cite>{*author}</cite>
                            </blockquote>
                        }) }
                    </div>
                </section>

                <section id="community" class="community fade-in">
                    <h2 class="section-title">{"Join the Community"}</h2>
                    <div class="community-grid">
                        { for COMMUNITY.iter().map(|(icon, name, href)| {
                            let label = *name;
                            let onclick = Callback::from(move |_: MouseEvent| {
                                track_event(TrackingEvent::community_click(label))
                            });
                            html! {
                                <TiltCard class="community-card" divisor={COMMUNITY_TILT_DIVISOR}>
                                    <div class="community-icon">{*icon}</div>
                                    <a class="community-link" href={*href} {onclick}>
                                        <span>{label}</span>
                                    </a>
                                </TiltCard>
                            }
                        }) }
                    </div>
                </section>

                <section id="waitlist" class="waitlist fade-in">
                    <h2 class="section-title">{"Get Early Access"}</h2>
                    <p class="section-subtitle">
                        {"Be the first to install Obsidian OS when the beta opens."}
                    </p>
                    <WaitlistSignup {on_signup} />
                </section>
            </main>

            <footer class="footer">
                <p>{"© Obsidian OS. Built in the open."}</p>
            </footer>
        </div>
    }
}
