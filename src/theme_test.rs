use super::*;

#[test]
fn navbar_renders_nothing_before_mount() {
    let provider = MemoryTheme::new(Some(Theme::Dark));
    let navbar = Navbar::new(&provider);
    assert!(!navbar.is_mounted());
    assert_eq!(navbar.view(), None);
    assert_eq!(navbar.toggle(), None);
    assert_eq!(provider.theme(), Some(Theme::Dark));
}

#[test]
fn dark_theme_shows_sun_that_switches_to_light() {
    let provider = MemoryTheme::new(Some(Theme::Dark));
    let mut navbar = Navbar::new(&provider);
    navbar.mount();

    let view = navbar.view().unwrap();
    assert_eq!(view.icon, ToggleIcon::Sun);
    assert_eq!(view.next_theme, Theme::Light);
    assert_eq!(view.brand, "Custom Auth");
    assert_eq!(view.home, "/");

    assert_eq!(navbar.toggle(), Some(Theme::Light));
    assert_eq!(provider.theme(), Some(Theme::Light));
}

#[test]
fn light_or_unresolved_theme_shows_moon() {
    for initial in [Some(Theme::Light), None] {
        let provider = MemoryTheme::new(initial);
        let mut navbar = Navbar::new(&provider);
        navbar.mount();
        let view = navbar.view().unwrap();
        assert_eq!(view.icon, ToggleIcon::Moon, "{initial:?}");
        assert_eq!(navbar.toggle(), Some(Theme::Dark));
        assert_eq!(provider.theme(), Some(Theme::Dark));
    }
}

#[test]
fn toggle_round_trips_between_themes() {
    let mut navbar = Navbar::new(MemoryTheme::default());
    navbar.mount();
    assert_eq!(navbar.toggle(), Some(Theme::Dark));
    assert_eq!(navbar.toggle(), Some(Theme::Light));
    assert_eq!(navbar.toggle(), Some(Theme::Dark));
}

#[test]
fn theme_names() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}
