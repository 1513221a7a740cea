use super::*;

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_has_login_game_and_four_minigames() {
    assert_eq!(NAV_TARGETS.len(), 6);
    assert_eq!(minigames().count(), 4);
}

#[test]
fn every_path_is_unique() {
    for (i, a) in NAV_TARGETS.iter().enumerate() {
        for b in &NAV_TARGETS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn minigames_preserve_declaration_order() {
    let views: Vec<View> = minigames().map(|t| t.view).collect();
    assert_eq!(
        views,
        vec![
            View::Minigame1,
            View::Minigame2,
            View::Minigame3,
            View::Minigame4,
        ]
    );
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_maps_each_declared_path_to_its_view() {
    assert_eq!(resolve("/"), Some(View::Login));
    assert_eq!(resolve("/game"), Some(View::Game));
    assert_eq!(resolve("/minigame/1"), Some(View::Minigame1));
    assert_eq!(resolve("/minigame/2"), Some(View::Minigame2));
    assert_eq!(resolve("/minigame/3"), Some(View::Minigame3));
    assert_eq!(resolve("/minigame/4"), Some(View::Minigame4));
}

#[test]
fn resolve_is_exact_not_prefix() {
    assert_eq!(resolve("/minigame"), None);
    assert_eq!(resolve("/minigame/"), None);
    assert_eq!(resolve("/minigame/5"), None);
    assert_eq!(resolve("/game/"), None);
    assert_eq!(resolve(""), None);
}
