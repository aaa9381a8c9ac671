use ratatui::style::Color;

/// Approximate RGB value of a terminal color
///
/// Named colors map to the xterm defaults. `Reset` and indexed colors fall
/// back to `fallback`.
#[must_use]
pub fn to_rgb(color: Color, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Reset | Color::Indexed(_) => fallback,
    }
}

/// Mix `color` over `background` at `opacity` (0.0 = background, 1.0 = color)
#[must_use]
pub fn blend(color: Color, background: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return color;
    }

    let (fr, fg, fb) = to_rgb(color, (255, 255, 255));
    let (br, bg, bb) = to_rgb(background, (0, 0, 0));
    let mix = |f: u8, b: u8| (f as f32 * opacity + b as f32 * (1.0 - opacity)).round() as u8;

    Color::Rgb(mix(fr, br), mix(fg, bg), mix(fb, bb))
}
