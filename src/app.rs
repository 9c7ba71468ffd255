mod contact;
mod dom;
mod effects;
mod header;
mod homepage;
mod resume;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use effects::{EasterEgg, PageLifecycle};
use header::{Header, ScrollProgress};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    log::info!("🚀 {OWNER}'s portfolio initializing...");

    let spinning = RwSignal::new(false);

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content="Portfolio of Pratik Shinde, software engineer" />

        <ScrollProgress />
        <PageLifecycle />
        <EasterEgg spinning />
        <div
            class="page"
            style:transition="transform 2s ease"
            style:transform=move || if spinning.get() { "rotate(360deg)" } else { "" }
        >
            <Router>
                <Header />
                <main class="flex flex-col items-center mx-auto w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME");
    let year = env!("BUILD_YEAR");
    view! {
        <footer class="footer text-center text-sm py-8">
            <p>{format!("© {year} {OWNER}. Built with Rust & Leptos.")}</p>
            <p class="text-muted" title=built>
                "Last built " {built.get(..10).unwrap_or(built).to_string()}
            </p>
        </footer>
    }
}
