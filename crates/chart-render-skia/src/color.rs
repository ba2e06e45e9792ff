// File: crates/chart-render-skia/src/color.rs
// Summary: CSS color string parsing for the Skia backend.

use skia_safe as skia;

/// Parse a CSS color. `None` means "paint nothing" (`none`, `transparent`, empty).
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
/// and a small set of named colors. Unrecognized strings fall back to black.
pub fn parse_css_color(s: &str) -> Option<skia::Color> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("transparent") {
        return None;
    }
    Some(
        from_hex(s)
            .or_else(|| from_rgb_fn(s))
            .or_else(|| named(s))
            .unwrap_or(skia::Color::BLACK),
    )
}

fn from_hex(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(skia::Color::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn from_rgb_fn(s: &str) -> Option<skia::Color> {
    let lower = s.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |p: &str| p.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    match parts.as_slice() {
        [r, g, b] => Some(skia::Color::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha = a.parse::<f64>().ok()?.clamp(0.0, 1.0);
            Some(skia::Color::from_argb((alpha * 255.0).round() as u8, channel(r)?, channel(g)?, channel(b)?))
        }
        _ => None,
    }
}

fn named(s: &str) -> Option<skia::Color> {
    let (r, g, b) = match s.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "silver" => (192, 192, 192),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "lime" => (0, 255, 0),
        "beige" => (245, 245, 220),
        _ => return None,
    };
    Some(skia::Color::from_rgb(r, g, b))
}
