//! Authorization gate. Every mutating handler checks here before writing.

use mudgraph::{ObjectId, World, attrs, flags};

/// The one standard "no control" feedback line.
pub const PERM_MSG: &str = "Permission denied.";

/// May `actor` mutate `target`?
pub fn controls(world: &World, actor: ObjectId, target: ObjectId) -> bool {
    world.controls_other(actor, target)
}

/// May `actor` set or clear the attribute `name`? Superusers bypass the
/// protected list.
pub fn can_set_attr(world: &World, actor: ObjectId, name: &str) -> bool {
    world.is_superuser(actor) || attrs::is_modifiable_attr(name)
}

/// May anyone set or clear the flag `name`? Reserved flags have no bypass.
pub fn can_set_flag(name: &str) -> bool {
    flags::is_modifiable_flag(name)
}
