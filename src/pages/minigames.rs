//! The four minigame views, each behind its own exact route.

use leptos::prelude::*;

use crate::routes::{self, View};

/// Shared page chrome for a minigame: back link, title, play area.
#[component]
fn MinigameFrame(game: View) -> impl IntoView {
    view! {
        <div class="minigame-page">
            <header class="minigame-page__header">
                <a class="minigame-page__back" href=routes::GAME>
                    "< Back to hub"
                </a>
                <h1>{game.title()}</h1>
            </header>
            <div class="minigame-page__board">
                <p>"Coming soon"</p>
            </div>
        </div>
    }
}

/// First minigame view.
#[component]
pub fn Minigame1Page() -> impl IntoView {
    view! { <MinigameFrame game=View::Minigame1/> }
}

/// Second minigame view.
#[component]
pub fn Minigame2Page() -> impl IntoView {
    view! { <MinigameFrame game=View::Minigame2/> }
}

/// Third minigame view.
#[component]
pub fn Minigame3Page() -> impl IntoView {
    view! { <MinigameFrame game=View::Minigame3/> }
}

/// Fourth minigame view.
#[component]
pub fn Minigame4Page() -> impl IntoView {
    view! { <MinigameFrame game=View::Minigame4/> }
}
