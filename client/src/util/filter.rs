//! Value of a `<select>` filter whose first option is `"all"`.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::str::FromStr;

/// The chosen wire value, or `None` for `"all"` and anything unparseable.
pub fn selected<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}
