use ratatui::style::Color;
use tickbox::utils::color::{blend, to_rgb};

#[test]
fn test_full_opacity_keeps_color() {
    assert_eq!(blend(Color::Cyan, Color::Black, 1.0), Color::Cyan);
    assert_eq!(blend(Color::Cyan, Color::Black, 3.0), Color::Cyan);
}

#[test]
fn test_zero_opacity_is_background() {
    assert_eq!(blend(Color::White, Color::Black, 0.0), Color::Rgb(0, 0, 0));
    assert_eq!(blend(Color::White, Color::Black, -1.0), Color::Rgb(0, 0, 0));
}

#[test]
fn test_half_opacity_mixes() {
    assert_eq!(
        blend(Color::Rgb(200, 100, 0), Color::Rgb(0, 0, 0), 0.5),
        Color::Rgb(100, 50, 0)
    );
}

#[test]
fn test_reset_uses_fallback() {
    assert_eq!(to_rgb(Color::Reset, (1, 2, 3)), (1, 2, 3));
    assert_eq!(to_rgb(Color::Rgb(9, 8, 7), (1, 2, 3)), (9, 8, 7));
}
