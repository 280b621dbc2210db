use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::Testimonial;
use crate::forms::SubmitStatus;
use crate::widgets::nav::{NavMenu, DESKTOP_NAV, MOBILE_NAV};

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());

    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = window().scroll_y().unwrap_or_default();
            menu.update(|menu| menu.on_scroll(scroll_y));
        });
        on_cleanup(move || handle.remove());
    });

    let desktop = DESKTOP_NAV
        .iter()
        .map(|(name, path)| view! { <A href=*path>{*name}</A> })
        .collect_view();
    let mobile = move || {
        MOBILE_NAV
            .iter()
            .map(|(name, path)| {
                view! {
                    <A href=*path on:click=move |_| menu.update(NavMenu::close_on_navigate)>
                        {*name}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || if menu.with(NavMenu::is_scrolled) { "site-header scrolled" } else { "site-header" }>
            <div class="container header-bar">
                <A href="/">
                    <span class="logo-mark">"JMB"</span>
                    <span class="logo-text">
                        <strong>"The Oga HR"</strong>
                        <small>"Human Capital Solutions"</small>
                    </span>
                </A>
                <nav class="desktop-nav">
                    {desktop}
                    <A href="/contact" attr:class="btn-primary">"Schedule Consultation"</A>
                </nav>
                <button
                    class=move || if menu.with(NavMenu::is_open) { "menu-toggle open" } else { "menu-toggle" }
                    aria-label="Toggle navigation"
                    on:click=move |_| menu.update(NavMenu::toggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <Show when=move || menu.with(NavMenu::is_open)>
                <nav class="mobile-nav">{mobile}</nav>
            </Show>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let solutions = ["HR Outsourcing", "Executive Recruitment", "HR Advisory", "Corporate Consulting"]
        .into_iter()
        .map(|name| view! { <li><A href="/services">{name}</A></li> })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <h3>"The Oga HR"</h3>
                    <p>
                        "Strategic HR partners dedicated to building high-performing teams and driving organizational excellence through innovative human capital solutions."
                    </p>
                </div>
                <div>
                    <h4>"Solutions"</h4>
                    <ul>{solutions}</ul>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        <li><A href="/about">"About"</A></li>
                        <li><A href="/careers">"Careers"</A></li>
                        <li><A href="/insights">"Insights"</A></li>
                        <li><A href="/contact">"Contact"</A></li>
                    </ul>
                </div>
            </div>
            <p class="copyright">
                <small>"Copyright " {"\u{24d2}"} "2025, JMB The Oga HR"</small>
            </p>
        </footer>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading"><div class="spinner"></div></div> }
}

/// Stand-in for a testimonial carousel with nothing to show.
#[component]
pub fn ComingSoon() -> impl IntoView {
    view! {
        <div class="coming-soon">
            <p>"Client testimonials coming soon."</p>
            <p class="muted">"We're gathering feedback from our satisfied clients."</p>
        </div>
    }
}

#[component]
pub fn Stars(filled: usize) -> impl IntoView {
    let stars = (0..Testimonial::MAX_RATING)
        .map(|index| {
            let class = if index < filled { "star filled" } else { "star" };
            view! { <span class=class>"\u{2605}"</span> }
        })
        .collect_view();
    view! { <div class="stars">{stars}</div> }
}

#[component]
pub fn StatusBanner(
    status: Signal<SubmitStatus>,
    success: &'static str,
    error: &'static str,
) -> impl IntoView {
    move || match status.get() {
        SubmitStatus::Success => Some(view! { <div class="banner success"><p>{success}</p></div> }.into_any()),
        SubmitStatus::Error => Some(view! { <div class="banner error"><p>{error}</p></div> }.into_any()),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}
