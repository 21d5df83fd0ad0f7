//! Flag name policy.
//!
//! Flags are uppercase booleans on an object. A short list is fair game for
//! builders; everything else is reserved for the engine (lifecycle markers,
//! privilege bits) and rejected at the gate with no superuser bypass.

pub const FLAG_SUPERUSER: &str = "SUPERUSER";
pub const FLAG_BUILDER: &str = "BUILDER";
pub const FLAG_GOING: &str = "GOING";

/// Flags settable through `@set`. One static list, one check.
pub const MODIFIABLE_FLAGS: &[&str] =
    &["DARK", "HAVEN", "QUIET", "SAFE", "SILENT", "STICKY", "VISUAL"];

pub fn is_modifiable_flag(name: &str) -> bool {
    let n = name.trim().to_ascii_uppercase();
    MODIFIABLE_FLAGS.contains(&n.as_str())
}
