//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    game::GamePage,
    login::LoginPage,
    minigames::{Minigame1Page, Minigame2Page, Minigame3Page, Minigame4Page},
};
use crate::state::auth::AuthForms;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the auth dialog state cell and declares one route per entry of
/// [`crate::routes::NAV_TARGETS`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_forms = RwSignal::new(AuthForms::default());
    provide_context(auth_forms);

    view! {
        <Stylesheet id="leptos" href="/pkg/arcade.css"/>
        <Title text="Arcade"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("game") view=GamePage/>
                <Route path=(StaticSegment("minigame"), StaticSegment("1")) view=Minigame1Page/>
                <Route path=(StaticSegment("minigame"), StaticSegment("2")) view=Minigame2Page/>
                <Route path=(StaticSegment("minigame"), StaticSegment("3")) view=Minigame3Page/>
                <Route path=(StaticSegment("minigame"), StaticSegment("4")) view=Minigame4Page/>
            </Routes>
        </Router>
    }
}
