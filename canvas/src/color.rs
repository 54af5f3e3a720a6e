//! CSS color normalization for box backgrounds.
//!
//! Saved profiles carry whatever string the browser reported for a box's
//! background, which is usually `rgb(r, g, b)` rather than the hex value the
//! user picked. The color picker, on the other hand, only accepts `#rrggbb`.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = hex_channel(&hex[0..1].repeat(2))?;
            let g = hex_channel(&hex[1..2].repeat(2))?;
            let b = hex_channel(&hex[2..3].repeat(2))?;
            Some((r, g, b))
        }
        6 => {
            let r = hex_channel(&hex[0..2])?;
            let g = hex_channel(&hex[2..4])?;
            let b = hex_channel(&hex[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parse the `rgb(r, g, b)` / `rgba(r, g, b, a)` functional notation.
///
/// `rgb(` takes exactly three channels and `rgba(` exactly four. The alpha
/// channel must lie in `0..=1` and is otherwise ignored; see [`canonical_hex`]
/// for the variant that refuses translucent values.
#[must_use]
pub fn parse_css_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    parse_rgb_function(raw).map(|(rgb, _)| rgb)
}

fn parse_rgb_function(raw: &str) -> Option<((u8, u8, u8), f64)> {
    let trimmed = raw.trim();
    let (inner, has_alpha) = match trimmed.strip_prefix("rgba(") {
        Some(rest) => (rest, true),
        None => (trimmed.strip_prefix("rgb(")?, false),
    };
    let channels: Vec<&str> = inner.strip_suffix(')')?.split(',').map(str::trim).collect();
    let (r, g, b, alpha) = match (channels.as_slice(), has_alpha) {
        ([r, g, b], false) => (*r, *g, *b, 1.0),
        ([r, g, b, a], true) => (*r, *g, *b, alpha_channel(a)?),
        _ => return None,
    };
    Some(((decimal_channel(r)?, decimal_channel(g)?, decimal_channel(b)?), alpha))
}

fn hex_channel(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

fn decimal_channel(digits: &str) -> Option<u8> {
    digits.parse::<u8>().ok()
}

fn alpha_channel(digits: &str) -> Option<f64> {
    let alpha = digits.parse::<f64>().ok()?;
    (0.0..=1.0).contains(&alpha).then_some(alpha)
}

fn hex_string((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse any supported color notation into RGB channels.
#[must_use]
pub fn parse_color(raw: &str) -> Option<(u8, u8, u8)> {
    parse_hex_rgb(raw).or_else(|| parse_css_rgb(raw))
}

/// Normalize a color to canonical lowercase `#rrggbb`.
///
/// Unparseable values resolve to `fallback`, itself normalized; an invalid
/// fallback resolves to black.
#[must_use]
pub fn to_hex_color(value: &str, fallback: &str) -> String {
    hex_string(parse_color(value).or_else(|| parse_color(fallback)).unwrap_or((0, 0, 0)))
}

/// Canonical `#rrggbb` spelling of an opaque color this crate understands.
///
/// Returns `None` for notations it does not parse (named colors, `hsl()`) and
/// for translucent `rgba()` values, which have no `#rrggbb` form.
#[must_use]
pub fn canonical_hex(value: &str) -> Option<String> {
    if let Some(rgb) = parse_hex_rgb(value) {
        return Some(hex_string(rgb));
    }
    let (rgb, alpha) = parse_rgb_function(value)?;
    (alpha >= 1.0).then(|| hex_string(rgb))
}

/// Whether `value` is a color this crate understands.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    parse_color(value).is_some()
}
