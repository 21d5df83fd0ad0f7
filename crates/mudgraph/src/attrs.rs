//! Attribute name policy and pattern matching.

/// Attribute names ordinary actors may not set or clear through builder
/// commands. One static list, one check; superuser bypass happens at the
/// authorization gate, not here.
pub const PROTECTED_ATTRS: &[&str] = &["ALIAS", "LASTLOGIN", "LASTSITE", "MONEY", "PASSWORD"];

pub fn is_modifiable_attr(name: &str) -> bool {
    let n = name.trim().to_ascii_uppercase();
    !PROTECTED_ATTRS.contains(&n.as_str())
}

/// Glob match for attribute names: `*` matches any run, `?` matches one
/// character, everything else is literal. Case-insensitive.
pub fn name_matches(pattern: &str, name: &str) -> bool {
    let p = pattern.trim().to_ascii_uppercase();
    let n = name.trim().to_ascii_uppercase();
    glob(p.as_bytes(), n.as_bytes())
}

fn glob(pat: &[u8], s: &[u8]) -> bool {
    let mut p = 0;
    let mut i = 0;
    // Most recent `*` and how much of `s` it has swallowed so far.
    let mut star: Option<(usize, usize)> = None;
    while i < s.len() {
        match pat.get(p) {
            Some(b'*') => {
                star = Some((p, i));
                p += 1;
            }
            Some(b'?') => {
                p += 1;
                i += 1;
            }
            Some(&c) if c == s[i] => {
                p += 1;
                i += 1;
            }
            _ => {
                let Some((sp, si)) = star else {
                    return false;
                };
                p = sp + 1;
                i = si + 1;
                star = Some((sp, si + 1));
            }
        }
    }
    while pat.get(p) == Some(&b'*') {
        p += 1;
    }
    p == pat.len()
}
