use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn as_str_matches_data_theme_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn context_toggle_returns_new_theme() {
    let ctx = ThemeContext::new(Theme::Light);
    assert_eq!(ctx.toggle(), Some(Theme::Dark));
    assert_eq!(ctx.get_untracked(), Theme::Dark);
    assert_eq!(ctx.toggle(), Some(Theme::Light));
}

#[test]
fn toggle_after_owner_disposed_is_a_no_op() {
    let owner = Owner::new();
    let ctx = owner.with(|| ThemeContext::new(Theme::Dark));
    owner.cleanup();

    assert_eq!(ctx.toggle(), None);
}

#[test]
fn toggle_parity_determines_theme() {
    for count in 0..9 {
        let ctx = ThemeContext::new(Theme::Light);
        for _ in 0..count {
            ctx.toggle();
        }
        let expected = if count % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(ctx.get_untracked(), expected, "after {count} toggles");
    }
}
