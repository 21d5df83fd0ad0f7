//! Name and reference search over the graph.
//!
//! The command layer never guesses: a token resolves to exactly one object
//! or the outcome says why it couldn't.

use crate::{ObjectId, ObjectType, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    One(ObjectId),
    NotFound,
    /// More than one nearby object answers to the token.
    Ambiguous(usize),
}

impl World {
    /// Resolve a player-typed token relative to `actor`.
    ///
    /// Token forms:
    /// - `me` / `here`
    /// - `#<dbref>` (anywhere, as long as it isn't garbage)
    /// - `*<name>` global player lookup, exact name
    /// - otherwise a case-insensitive name or `ALIAS` match among the actor,
    ///   its location, its inventory, and objects beside it
    pub fn resolve(&self, actor: ObjectId, token: &str) -> SearchOutcome {
        let t = token.trim();
        if t.is_empty() {
            return SearchOutcome::NotFound;
        }
        if t.eq_ignore_ascii_case("me") {
            return SearchOutcome::One(actor);
        }
        if t.eq_ignore_ascii_case("here") {
            return match self.get(actor).and_then(|o| o.location) {
                Some(loc) => SearchOutcome::One(loc),
                None => SearchOutcome::NotFound,
            };
        }
        if let Some(num) = t.strip_prefix('#') {
            return match num.parse::<u32>() {
                Ok(n) if self.get(ObjectId(n)).is_some() && !self.is_garbage(ObjectId(n)) => {
                    SearchOutcome::One(ObjectId(n))
                }
                _ => SearchOutcome::NotFound,
            };
        }
        if let Some(pname) = t.strip_prefix('*') {
            let matches = self
                .live_objects()
                .filter(|o| o.otype == ObjectType::Player)
                .filter(|o| o.name.eq_ignore_ascii_case(pname.trim()))
                .map(|o| o.id)
                .collect::<Vec<_>>();
            return outcome_from(matches);
        }

        let location = self.get(actor).and_then(|o| o.location);
        let mut pool = vec![actor];
        if let Some(loc) = location {
            pool.push(loc);
            pool.extend(self.contents(loc));
        }
        pool.extend(self.contents(actor));

        let mut matches = Vec::new();
        for id in pool {
            let Some(obj) = self.get(id) else { continue };
            if obj.otype == ObjectType::Garbage {
                continue;
            }
            let hit = obj.name.eq_ignore_ascii_case(t)
                || obj.attr("ALIAS").is_some_and(|a| a.eq_ignore_ascii_case(t));
            if hit && !matches.contains(&obj.id) {
                matches.push(obj.id);
            }
        }
        outcome_from(matches)
    }

    /// Players whose `ALIAS` attribute equals `candidate`, case-insensitively.
    pub fn player_alias_search(&self, candidate: &str) -> Vec<ObjectId> {
        let c = candidate.trim();
        if c.is_empty() {
            return Vec::new();
        }
        self.live_objects()
            .filter(|o| o.otype == ObjectType::Player)
            .filter(|o| o.attr("ALIAS").is_some_and(|a| a.eq_ignore_ascii_case(c)))
            .map(|o| o.id)
            .collect()
    }

    /// Case-insensitive substring search over every live object name.
    pub fn global_name_search(&self, pattern: &str) -> Vec<ObjectId> {
        let p = pattern.trim().to_ascii_lowercase();
        if p.is_empty() {
            return Vec::new();
        }
        self.live_objects()
            .filter(|o| o.name.to_ascii_lowercase().contains(&p))
            .map(|o| o.id)
            .collect()
    }

    fn live_objects(&self) -> impl Iterator<Item = &crate::Object> {
        self.ids()
            .filter_map(|id| self.get(id))
            .filter(|o| o.otype != ObjectType::Garbage)
    }
}

fn outcome_from(matches: Vec<ObjectId>) -> SearchOutcome {
    match matches.len() {
        0 => SearchOutcome::NotFound,
        1 => SearchOutcome::One(matches[0]),
        n => SearchOutcome::Ambiguous(n),
    }
}
