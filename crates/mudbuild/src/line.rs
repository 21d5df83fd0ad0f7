//! Input-line splitting for the driver: verb, switches, argument.

use crate::BuildVerb;
use crate::args::Switches;

/// Split one input line into verb, switch set, and raw argument.
///
/// `@tel/quiet rock=here` parses as (`Teleport`, `{quiet}`, `rock=here`).
/// The `@` is optional, switches ride on the verb token separated by `/`,
/// and everything after the first whitespace is the argument, verbatim
/// apart from outer trimming.
///
/// Returns `None` for empty lines and unknown verbs.
pub fn parse_line(input: &str) -> Option<(BuildVerb, Switches, String)> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let (head, arg) = match input.split_once(char::is_whitespace) {
        Some((h, rest)) => (h, rest.trim()),
        None => (input, ""),
    };

    let head = head.strip_prefix('@').unwrap_or(head);
    let mut parts = head.split('/');
    let verb = BuildVerb::parse(parts.next()?)?;
    let switches = Switches::from_tokens(parts);
    Some((verb, switches, arg.to_string()))
}
