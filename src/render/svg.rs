//! SVG string assembly helpers.
//!
//! Output is plain markup built with `format!`; these helpers keep number
//! formatting and text escaping consistent so that identical input always
//! produces byte-identical cards.

use std::fmt::Write as _;

/// Formats a coordinate or length with at most two decimals, trailing
/// zeros trimmed (`12`, `12.5`, `12.25`).
#[must_use]
pub fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut out = format!("{rounded:.2}");
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    // `-0` normalizes to `0`.
    if out == "-0" { "0".to_owned() } else { out }
}

/// Escapes text for use in element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a fragment in a standalone `<svg>` document with a matching
/// `viewBox`.
#[must_use]
pub fn document(width: f64, height: f64, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 160);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{body}</svg>",
        w = num(width),
        h = num(height),
    );
    out
}

/// Removes an outer `<svg ...>` open tag and its matching `</svg>` close
/// tag, leaving the inner fragment. Content without a wrapper is returned
/// unchanged; embedded documents keep theirs.
#[must_use]
pub fn strip_svg_wrapper(content: &str) -> String {
    let trimmed = content.trim();
    if !trimmed.starts_with("<svg") || !trimmed.ends_with("</svg>") {
        return trimmed.to_owned();
    }
    let Some(open_end) = trimmed.find('>') else {
        return trimmed.to_owned();
    };
    trimmed[open_end + 1..trimmed.len() - "</svg>".len()]
        .trim()
        .to_owned()
}
