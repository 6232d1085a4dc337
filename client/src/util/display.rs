//! Small formatting helpers used by several views.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Date part of an RFC 3339 timestamp, or the raw value if it has none.
pub fn short_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}

/// `short_date` for optional timestamps, `"-"` when absent.
pub fn short_date_or_dash(raw: Option<&str>) -> &str {
    raw.map_or("-", short_date)
}

/// Upper-case a wire value for the terminal look, with underscores as spaces.
pub fn shout(raw: &str) -> String {
    raw.replace('_', " ").to_uppercase()
}

/// CSS modifier for a status badge.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "active" | "approved" | "completed" => "badge badge--ok",
        "pending" => "badge badge--warn",
        "captured" | "punished" | "rejected" | "cancelled" => "badge badge--danger",
        _ => "badge",
    }
}
