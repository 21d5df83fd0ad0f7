//! Delimiter grammar shared by every builder command.
//!
//! Purely syntactic: nothing here ever touches the graph. Each splitter
//! cuts on the first delimiter only, so values are free to contain the
//! delimiter themselves.

use std::collections::HashSet;

/// Split on the first `=`. `None` means the delimiter is absent, which is
/// distinct from an empty right side (empty right means "clear/unset").
pub fn eq_split(s: &str) -> Option<(&str, &str)> {
    s.split_once('=')
}

/// Split an `<object>[/<attribute>]` token on the first `/`. A missing or
/// empty attribute part targets the whole object.
pub fn slash_split(s: &str) -> (&str, Option<&str>) {
    match s.split_once('/') {
        Some((obj, attr)) => {
            let attr = attr.trim();
            (obj.trim(), if attr.is_empty() { None } else { Some(attr) })
        }
        None => (s.trim(), None),
    }
}

/// Split the right side of an equals form on the first `:`. Present means
/// an attribute/value pair, absent means a flag list.
pub fn colon_split(s: &str) -> Option<(&str, &str)> {
    s.split_once(':')
}

/// Comma-separated target specs, trimmed, empties dropped.
pub fn comma_list(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Attribute and flag names are case-normalized before lookup or storage.
pub fn normalize_attr(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// The switch tokens attached to a command: lowercase, presence only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Switches(HashSet<String>);

impl Switches {
    pub fn from_tokens<'a, I: IntoIterator<Item = &'a str>>(tokens: I) -> Self {
        Self(
            tokens
                .into_iter()
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn has(&self, switch: &str) -> bool {
        self.0.contains(&switch.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
