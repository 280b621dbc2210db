pub mod components;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
pub mod forms;
pub mod pages;
pub mod widgets;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use crate::components::{Footer, Header};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="JMB The Oga HR: strategic HR consulting, executive recruitment and HR outsourcing for startups, SMEs and enterprises."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ogahr.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("JMB The Oga HR")
            } else {
                format!("{text} - JMB The Oga HR")
            }
        }/>

        <Router>
            <Header/>
            // Listings stream in, the shell renders right away.
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=pages::home::Index ssr=SsrMode::OutOfOrder/>
                <Route path=StaticSegment("about") view=pages::about::Index ssr=SsrMode::OutOfOrder/>
                <Route path=StaticSegment("services") view=pages::services::Index ssr=SsrMode::OutOfOrder/>
                <Route path=StaticSegment("careers") view=pages::careers::Index ssr=SsrMode::OutOfOrder/>
                <Route path=StaticSegment("insights") view=pages::insights::Index ssr=SsrMode::OutOfOrder/>
                <Route path=StaticSegment("contact") view=pages::contact::Index/>
            </Routes>
            <Footer/>
        </Router>
    }
}
