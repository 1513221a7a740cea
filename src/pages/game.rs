//! Post-login hub listing the minigames.

use leptos::prelude::*;

use crate::routes::{self, NavTarget};
use crate::util::browser::read_stored_user;

/// Game hub — greets the stored user and links to each minigame.
#[component]
pub fn GamePage() -> impl IntoView {
    // Storage is read client-side only; the effect never runs during SSR,
    // so both sides render the plain greeting first.
    let username = RwSignal::new(None::<String>);
    Effect::new(move || {
        username.set(read_stored_user());
    });

    let greeting = move || match username.get() {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    };

    view! {
        <div class="game-page">
            <header class="game-page__header">
                <h1>"Game Hub"</h1>
                <p class="game-page__greeting">{greeting}</p>
            </header>

            <div class="game-page__grid">
                {routes::minigames()
                    .map(|target| view! { <MinigameCard target=target/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// A clickable card linking to one minigame.
#[component]
fn MinigameCard(target: &'static NavTarget) -> impl IntoView {
    view! {
        <a class="game-card" href=target.path>
            <span class="game-card__name">{target.view.title()}</span>
        </a>
    }
}
