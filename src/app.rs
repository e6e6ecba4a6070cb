mod action_button;
mod homepage;
mod icons;
mod image_element;

pub use action_button::ActionButton;
pub use homepage::ProfilePage;
pub use icons::{Icon, LineIcon};
pub use image_element::ImageElement;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

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
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/profile-card.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-md">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}
