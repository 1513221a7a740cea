//! Static route table mapping URL paths to views.
//!
//! The table is pure data: the Leptos router in [`crate::app`] declares one
//! route per entry, and the game hub builds its minigame grid from
//! [`minigames`]. Paths match exactly; there are no parameterized or
//! overlapping patterns and no wildcard entry (the router's fallback view is
//! the app shell's concern).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login/portal landing view.
pub const LOGIN: &str = "/";
/// Path of the post-login game hub.
pub const GAME: &str = "/game";

/// Views reachable through client-side routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Game,
    Minigame1,
    Minigame2,
    Minigame3,
    Minigame4,
}

impl View {
    /// Display label for the view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Game => "Game Hub",
            Self::Minigame1 => "Minigame 1",
            Self::Minigame2 => "Minigame 2",
            Self::Minigame3 => "Minigame 3",
            Self::Minigame4 => "Minigame 4",
        }
    }
}

/// A static binding from a URL path to the view rendered for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub path: &'static str,
    pub view: View,
}

/// Every route in the application, in declaration order. Paths are unique.
pub static NAV_TARGETS: [NavTarget; 6] = [
    NavTarget { path: LOGIN, view: View::Login },
    NavTarget { path: GAME, view: View::Game },
    NavTarget { path: "/minigame/1", view: View::Minigame1 },
    NavTarget { path: "/minigame/2", view: View::Minigame2 },
    NavTarget { path: "/minigame/3", view: View::Minigame3 },
    NavTarget { path: "/minigame/4", view: View::Minigame4 },
];

/// Resolve a path to its view by exact match, `None` for unknown paths.
pub fn resolve(path: &str) -> Option<View> {
    NAV_TARGETS.iter().find(|t| t.path == path).map(|t| t.view)
}

/// The four minigame entries, in declaration order.
pub fn minigames() -> impl Iterator<Item = &'static NavTarget> {
    NAV_TARGETS.iter().filter(|t| {
        matches!(
            t.view,
            View::Minigame1 | View::Minigame2 | View::Minigame3 | View::Minigame4
        )
    })
}
