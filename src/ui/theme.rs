use fltk::enums::Color;

/// Resolve a persisted color string to an FLTK color.
///
/// Accepts "#rrggbb" hex plus the handful of names a hand-edited config is
/// likely to use. Returns `None` for anything else so callers can fall back
/// to the field's default.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        return Color::from_hex_str(value).ok();
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "red" => Some(Color::Red),
        "green" => Some(Color::from_rgb(0, 128, 0)),
        "blue" => Some(Color::Blue),
        "yellow" => Some(Color::Yellow),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "gray" | "grey" => Some(Color::from_rgb(128, 128, 128)),
        "orange" => Some(Color::from_rgb(255, 165, 0)),
        "purple" => Some(Color::from_rgb(128, 0, 128)),
        "brown" => Some(Color::from_rgb(165, 42, 42)),
        "pink" => Some(Color::from_rgb(255, 192, 203)),
        _ => None,
    }
}

/// Format a picker result the way it is persisted in the config file.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
