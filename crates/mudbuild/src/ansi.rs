//! Decoration markup stripping for echoed text.
//!
//! Stored names keep their markup; only the confirmation echo is cleaned.
//! Handles the `%c<x>` color codes builders type and raw `ESC[..m` escape
//! sequences that may already be embedded.

pub fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '%' => match chars.peek() {
                Some('c') => {
                    chars.next();
                    chars.next(); // the code character itself
                }
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                _ => out.push('%'),
            },
            '\x1b' => {
                if chars.peek() == Some(&'[') {
                    // Skip to the terminating 'm', or to the end.
                    for c2 in chars.by_ref() {
                        if c2 == 'm' {
                            break;
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}
