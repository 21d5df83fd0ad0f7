//! Feedback delivery. One line, to the acting object only, never broadcast.

use mudgraph::ObjectId;

pub trait Outbox {
    fn emit_to(&mut self, who: ObjectId, line: &str);
}

/// Collects feedback in memory. Used by tests and by drivers that want to
/// flush lines themselves.
#[derive(Debug, Default)]
pub struct MemOutbox {
    pub lines: Vec<(ObjectId, String)>,
}

impl MemOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines_for(&self, who: ObjectId) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(id, _)| *id == who)
            .map(|(_, l)| l.as_str())
            .collect()
    }

    pub fn drain(&mut self) -> Vec<(ObjectId, String)> {
        std::mem::take(&mut self.lines)
    }
}

impl Outbox for MemOutbox {
    fn emit_to(&mut self, who: ObjectId, line: &str) {
        self.lines.push((who, line.to_string()));
    }
}
