//! Resolver adapter: one token in, one object or an already-reported miss.

use mudgraph::{ObjectId, SearchOutcome, World};

use crate::outbox::Outbox;

/// Resolve `token` for `actor`. On a miss or an ambiguous match the
/// standard message has already been emitted when this returns `None`;
/// the caller aborts without further output or mutation.
pub fn resolve(
    world: &World,
    out: &mut dyn Outbox,
    actor: ObjectId,
    token: &str,
) -> Option<ObjectId> {
    match world.resolve(actor, token) {
        SearchOutcome::One(id) => Some(id),
        SearchOutcome::NotFound => {
            out.emit_to(actor, &format!("I can't find '{}' here.", token.trim()));
            None
        }
        SearchOutcome::Ambiguous(_) => {
            out.emit_to(
                actor,
                &format!("I don't know which '{}' you mean!", token.trim()),
            );
            None
        }
    }
}
