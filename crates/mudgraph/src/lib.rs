//! `mudgraph`: the shared object graph.
//!
//! Everything in the world is an [`Object`]: players, rooms, things, exits,
//! and garbage pending reclamation. Objects hang together through four
//! optional references (`owner`, `zone`, `home`, `location`) and carry a
//! string-keyed attribute map plus a flag set, both uppercase-keyed.
//!
//! The graph is deliberately permissive: it does not forbid reference cycles
//! (an object zoned to itself, a home chain forming a loop). Commands that
//! care about shape enforce their own rules before mutating.

use std::collections::{BTreeMap, HashMap, HashSet};

pub mod attrs;
pub mod flags;
pub mod search;

pub use search::SearchOutcome;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ObjectType {
    Player,
    Room,
    Thing,
    Exit,
    Garbage,
}

impl ObjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Player => "player",
            ObjectType::Room => "room",
            ObjectType::Thing => "thing",
            ObjectType::Exit => "exit",
            ObjectType::Garbage => "garbage",
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Object {
    pub id: ObjectId,
    pub otype: ObjectType,
    pub name: String,
    pub description: Option<String>,
    pub owner: ObjectId,
    pub zone: Option<ObjectId>,
    /// Destination for an exit, landing fallback for everything else.
    pub home: Option<ObjectId>,
    /// Anchor room for an exit, `None` for rooms.
    pub location: Option<ObjectId>,
    pub attrs: HashMap<String, String>,
    pub flags: HashSet<String>,
}

impl Object {
    /// `Name(#id)` form used by global listings.
    pub fn full_name(&self) -> String {
        format!("{}({})", self.name, self.id)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(&name.to_ascii_uppercase()).map(String::as_str)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(&name.to_ascii_uppercase())
    }
}

/// Spec for [`World::create_object`].
#[derive(Clone, Debug)]
pub struct NewObject {
    pub name: String,
    pub otype: ObjectType,
    pub location: Option<ObjectId>,
    pub owner: ObjectId,
    pub home: Option<ObjectId>,
}

#[derive(Debug, Clone)]
pub enum GraphError {
    NoSuchObject(ObjectId),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NoSuchObject(id) => write!(f, "no such object: {id}"),
        }
    }
}

impl std::error::Error for GraphError {}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct World {
    objects: BTreeMap<ObjectId, Object>,
    next_id: u32,
    /// Movement notices pending delivery, keyed by the container that
    /// should hear them. Drained by the driver.
    #[serde(skip)]
    room_traffic: Vec<(ObjectId, String)>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    pub fn obj(&self, id: ObjectId) -> Result<&Object, GraphError> {
        self.objects.get(&id).ok_or(GraphError::NoSuchObject(id))
    }

    fn obj_mut(&mut self, id: ObjectId) -> Result<&mut Object, GraphError> {
        self.objects.get_mut(&id).ok_or(GraphError::NoSuchObject(id))
    }

    /// Display name, or `"nothing"` for a dangling reference.
    pub fn name(&self, id: ObjectId) -> &str {
        self.objects.get(&id).map(|o| o.name.as_str()).unwrap_or("nothing")
    }

    pub fn full_name(&self, id: ObjectId) -> String {
        self.objects
            .get(&id)
            .map(|o| o.full_name())
            .unwrap_or_else(|| format!("nothing({id})"))
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().copied()
    }

    pub fn contents(&self, container: ObjectId) -> Vec<ObjectId> {
        self.objects
            .values()
            .filter(|o| o.location == Some(container))
            .map(|o| o.id)
            .collect()
    }

    /// Lowest garbage dbref, else the next unminted one. Read-only twin of
    /// the allocation done by [`World::create_object`].
    pub fn next_free_id(&self) -> ObjectId {
        self.objects
            .values()
            .find(|o| o.otype == ObjectType::Garbage)
            .map(|o| o.id)
            .unwrap_or(ObjectId(self.next_id))
    }

    pub fn create_object(&mut self, spec: NewObject) -> ObjectId {
        let id = self.next_free_id();
        if id.0 == self.next_id {
            self.next_id += 1;
        }
        let obj = Object {
            id,
            otype: spec.otype,
            name: spec.name,
            description: None,
            owner: spec.owner,
            zone: None,
            home: spec.home,
            location: spec.location,
            attrs: HashMap::new(),
            flags: HashSet::new(),
        };
        tracing::debug!(id = %id, otype = obj.otype.as_str(), name = %obj.name, "object created");
        self.objects.insert(id, obj);
        id
    }

    // ---- attributes ----

    pub fn attr(&self, id: ObjectId, name: &str) -> Option<&str> {
        self.objects.get(&id).and_then(|o| o.attr(name))
    }

    pub fn set_attr(&mut self, id: ObjectId, name: &str, value: &str) -> Result<(), GraphError> {
        let obj = self.obj_mut(id)?;
        obj.attrs.insert(name.to_ascii_uppercase(), value.to_string());
        Ok(())
    }

    /// Returns whether the attribute existed.
    pub fn clear_attr(&mut self, id: ObjectId, name: &str) -> Result<bool, GraphError> {
        let obj = self.obj_mut(id)?;
        Ok(obj.attrs.remove(&name.to_ascii_uppercase()).is_some())
    }

    /// Attribute names on `id` matching a glob pattern, sorted. With
    /// `exclude_protected`, names in [`attrs::PROTECTED_ATTRS`] never match.
    pub fn attrs_matching(
        &self,
        id: ObjectId,
        pattern: &str,
        exclude_protected: bool,
    ) -> Vec<String> {
        let Some(obj) = self.objects.get(&id) else {
            return Vec::new();
        };
        let mut out = obj
            .attrs
            .keys()
            .filter(|n| attrs::name_matches(pattern, n))
            .filter(|n| !exclude_protected || attrs::is_modifiable_attr(n))
            .cloned()
            .collect::<Vec<_>>();
        out.sort_unstable();
        out
    }

    // ---- flags ----

    pub fn has_flag(&self, id: ObjectId, name: &str) -> bool {
        self.objects.get(&id).is_some_and(|o| o.has_flag(name))
    }

    pub fn set_flag(&mut self, id: ObjectId, name: &str, on: bool) -> Result<(), GraphError> {
        let obj = self.obj_mut(id)?;
        let key = name.to_ascii_uppercase();
        if on {
            obj.flags.insert(key);
        } else {
            obj.flags.remove(&key);
        }
        Ok(())
    }

    // ---- relationships ----

    /// Relocate `id` into `dest`. Unless `quiet`, departure and arrival
    /// notices are queued for the old and new containers.
    pub fn move_to(&mut self, id: ObjectId, dest: ObjectId, quiet: bool) -> Result<(), GraphError> {
        self.obj(dest)?;
        let (name, old_loc) = {
            let obj = self.obj(id)?;
            (obj.name.clone(), obj.location)
        };
        self.obj_mut(id)?.location = Some(dest);
        if !quiet {
            if let Some(old) = old_loc {
                self.room_traffic.push((old, format!("{name} has left.")));
            }
            self.room_traffic.push((dest, format!("{name} has arrived.")));
        }
        Ok(())
    }

    pub fn drain_traffic(&mut self) -> Vec<(ObjectId, String)> {
        std::mem::take(&mut self.room_traffic)
    }

    pub fn set_owner(&mut self, id: ObjectId, owner: ObjectId) -> Result<(), GraphError> {
        self.obj(owner)?;
        self.obj_mut(id)?.owner = owner;
        Ok(())
    }

    pub fn set_zone(&mut self, id: ObjectId, zone: Option<ObjectId>) -> Result<(), GraphError> {
        if let Some(z) = zone {
            self.obj(z)?;
        }
        self.obj_mut(id)?.zone = zone;
        Ok(())
    }

    pub fn set_home(&mut self, id: ObjectId, home: Option<ObjectId>) -> Result<(), GraphError> {
        if let Some(h) = home {
            self.obj(h)?;
        }
        self.obj_mut(id)?.home = home;
        Ok(())
    }

    pub fn set_name(&mut self, id: ObjectId, name: &str) -> Result<(), GraphError> {
        self.obj_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn set_description(
        &mut self,
        id: ObjectId,
        desc: Option<String>,
    ) -> Result<(), GraphError> {
        self.obj_mut(id)?.description = desc;
        Ok(())
    }

    /// Turn `id` into garbage: links, attributes, and flags are dropped and
    /// the dbref becomes eligible for reuse. Idempotent on garbage.
    pub fn destroy(&mut self, id: ObjectId) -> Result<(), GraphError> {
        let obj = self.obj_mut(id)?;
        if obj.otype == ObjectType::Garbage {
            return Ok(());
        }
        tracing::debug!(id = %id, name = %obj.name, "object destroyed");
        obj.otype = ObjectType::Garbage;
        obj.name = "Garbage".to_string();
        obj.description = None;
        obj.zone = None;
        obj.home = None;
        obj.location = None;
        obj.attrs.clear();
        obj.flags.clear();
        Ok(())
    }

    // ---- predicates ----

    pub fn is_room(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(|o| o.otype == ObjectType::Room)
    }

    pub fn is_exit(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(|o| o.otype == ObjectType::Exit)
    }

    pub fn is_player(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(|o| o.otype == ObjectType::Player)
    }

    pub fn is_garbage(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(|o| o.otype == ObjectType::Garbage)
    }

    pub fn is_going(&self, id: ObjectId) -> bool {
        self.has_flag(id, flags::FLAG_GOING)
    }

    pub fn is_superuser(&self, id: ObjectId) -> bool {
        self.has_flag(id, flags::FLAG_SUPERUSER)
    }

    /// Capability check: the flag of the same name, or superuser.
    pub fn has_capability(&self, id: ObjectId, cap: &str) -> bool {
        self.is_superuser(id) || self.has_flag(id, cap)
    }

    /// May `actor` mutate `target`? Superusers control everything; otherwise
    /// you control yourself and what you own.
    pub fn controls_other(&self, actor: ObjectId, target: ObjectId) -> bool {
        if self.is_superuser(actor) {
            return true;
        }
        if actor == target {
            return true;
        }
        self.objects.get(&target).is_some_and(|o| o.owner == actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (World, ObjectId, ObjectId) {
        let mut w = World::new();
        let room = w.create_object(NewObject {
            name: "Limbo".to_string(),
            otype: ObjectType::Room,
            location: None,
            owner: ObjectId(0),
            home: None,
        });
        let player = w.create_object(NewObject {
            name: "Wizard".to_string(),
            otype: ObjectType::Player,
            location: Some(room),
            owner: ObjectId(1),
            home: Some(room),
        });
        (w, room, player)
    }

    #[test]
    fn create_reuses_garbage_dbrefs() {
        let (mut w, room, player) = seeded();
        let thing = w.create_object(NewObject {
            name: "rock".to_string(),
            otype: ObjectType::Thing,
            location: Some(room),
            owner: player,
            home: None,
        });
        assert_eq!(thing, ObjectId(2));
        w.destroy(thing).unwrap();
        assert!(w.is_garbage(thing));
        assert_eq!(w.next_free_id(), thing);

        let reborn = w.create_object(NewObject {
            name: "pebble".to_string(),
            otype: ObjectType::Thing,
            location: Some(room),
            owner: player,
            home: None,
        });
        assert_eq!(reborn, thing);
        assert!(!w.is_garbage(reborn));
        assert_eq!(w.next_free_id(), ObjectId(3));
    }

    #[test]
    fn destroy_is_idempotent_and_clears_state() {
        let (mut w, room, player) = seeded();
        let thing = w.create_object(NewObject {
            name: "rock".to_string(),
            otype: ObjectType::Thing,
            location: Some(room),
            owner: player,
            home: Some(room),
        });
        w.set_attr(thing, "color", "grey").unwrap();
        w.set_flag(thing, "dark", true).unwrap();
        w.destroy(thing).unwrap();
        w.destroy(thing).unwrap();

        let obj = w.get(thing).unwrap();
        assert_eq!(obj.otype, ObjectType::Garbage);
        assert!(obj.attrs.is_empty());
        assert!(obj.flags.is_empty());
        assert_eq!(obj.home, None);
        assert_eq!(obj.location, None);
    }

    #[test]
    fn move_records_traffic_unless_quiet() {
        let (mut w, room, player) = seeded();
        let den = w.create_object(NewObject {
            name: "Den".to_string(),
            otype: ObjectType::Room,
            location: None,
            owner: player,
            home: None,
        });

        w.move_to(player, den, false).unwrap();
        let traffic = w.drain_traffic();
        assert_eq!(
            traffic,
            vec![
                (room, "Wizard has left.".to_string()),
                (den, "Wizard has arrived.".to_string()),
            ]
        );

        w.move_to(player, room, true).unwrap();
        assert!(w.drain_traffic().is_empty());
    }

    #[test]
    fn contents_lists_whatever_is_inside() {
        let (mut w, room, player) = seeded();
        let rock = w.create_object(NewObject {
            name: "rock".to_string(),
            otype: ObjectType::Thing,
            location: Some(player),
            owner: player,
            home: None,
        });
        assert_eq!(w.contents(room), vec![player]);
        assert_eq!(w.contents(player), vec![rock]);
        assert!(w.contents(rock).is_empty());
    }

    #[test]
    fn attrs_are_uppercase_keyed() {
        let (mut w, _room, player) = seeded();
        w.set_attr(player, "title", "Archmage").unwrap();
        assert_eq!(w.attr(player, "TITLE"), Some("Archmage"));
        assert_eq!(w.attr(player, "TiTlE"), Some("Archmage"));
        assert!(w.clear_attr(player, "title").unwrap());
        assert!(!w.clear_attr(player, "title").unwrap());
        assert_eq!(w.attr(player, "TITLE"), None);
    }

    #[test]
    fn controls_other_covers_self_owner_and_superuser() {
        let (mut w, room, wizard) = seeded();
        w.set_flag(wizard, flags::FLAG_SUPERUSER, true).unwrap();
        let mortal = w.create_object(NewObject {
            name: "Bob".to_string(),
            otype: ObjectType::Player,
            location: Some(room),
            owner: ObjectId(2),
            home: Some(room),
        });
        let rock = w.create_object(NewObject {
            name: "rock".to_string(),
            otype: ObjectType::Thing,
            location: Some(room),
            owner: mortal,
            home: None,
        });

        assert!(w.controls_other(mortal, mortal));
        assert!(w.controls_other(mortal, rock));
        assert!(!w.controls_other(mortal, wizard));
        assert!(w.controls_other(wizard, mortal));
        assert!(w.controls_other(wizard, rock));
    }

    #[test]
    fn mutators_reject_dangling_ids() {
        let (mut w, _room, player) = seeded();
        let bogus = ObjectId(99);
        assert!(w.set_owner(player, bogus).is_err());
        assert!(w.set_home(player, Some(bogus)).is_err());
        assert!(w.set_zone(player, Some(bogus)).is_err());
        assert!(w.move_to(bogus, player, true).is_err());
    }
}
