//! Time and percentage label formatting shared by every renderer.

/// Compact duration label: `HH:MM` from one hour up, `MMm` below, `00:00`
/// for exactly zero.
#[must_use]
pub fn short_time(seconds: f64) -> String {
    if seconds == 0.0 {
        return "00:00".to_owned();
    }
    let total = seconds as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    if h > 0 {
        format!("{h:02}:{m:02}")
    } else {
        format!("{m:02}m")
    }
}

/// Long duration label for totals footers: `"3 hrs 20 mins"`, `"1 hr"`,
/// `"45 mins"`. Empty for a zero duration.
#[must_use]
pub fn long_time(seconds: f64) -> String {
    let total = seconds as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;

    let hour_part = match h {
        0 => String::new(),
        1 => "1 hr".to_owned(),
        _ => format!("{h} hrs"),
    };
    let minute_part = match m {
        0 => String::new(),
        1 => "1 min".to_owned(),
        _ => format!("{m} mins"),
    };

    [hour_part, minute_part]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percentage with one decimal, e.g. `"33.3"`. The `%` sign is left to the
/// caller since some labels wrap the value in parentheses.
#[must_use]
pub fn percent(share: f64) -> String {
    format!("{:.1}", share * 100.0)
}

/// Deterministic label truncation: labels longer than `budget` characters
/// keep `budget - 1` characters plus a trailing ellipsis.
#[must_use]
pub fn truncate_label(label: &str, budget: usize) -> String {
    let count = label.chars().count();
    if count <= budget {
        return label.to_owned();
    }
    let kept: String = label.chars().take(budget.saturating_sub(1)).collect();
    format!("{kept}\u{2026}")
}
