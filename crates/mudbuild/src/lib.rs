//! `mudbuild`: the builder command set.
//!
//! Every command follows the same pipeline: parse the delimiter grammar,
//! resolve object references, pass the authorization gate, mutate the graph,
//! report one line back to the acting object. Nothing mutates until parsing,
//! resolution, and authorization have all succeeded, and no failure escapes
//! a handler as anything but a feedback line.

use mudgraph::ObjectId;

pub mod ansi;
pub mod args;
pub mod gate;
pub mod handlers;
pub mod line;
pub mod outbox;
pub mod resolve;

pub use handlers::dispatch;
pub use line::parse_line;

use args::Switches;

/// One builder command invocation. Ephemeral; the driver makes one per
/// input line.
#[derive(Clone, Debug)]
pub struct Command {
    /// The acting object.
    pub actor: ObjectId,
    /// Raw argument text after the verb, possibly empty.
    pub arg: String,
    /// Lowercase switch tokens (`quiet`, `override`), presence only.
    pub switches: Switches,
}

impl Command {
    pub fn new(actor: ObjectId, arg: &str) -> Self {
        Self {
            actor,
            arg: arg.to_string(),
            switches: Switches::default(),
        }
    }

    pub fn with_switches(mut self, switches: Switches) -> Self {
        self.switches = switches;
        self
    }
}

/// The closed set of builder verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildVerb {
    Teleport,
    Alias,
    Wipe,
    Set,
    Find,
    Create,
    Dig,
    Open,
    Link,
    Unlink,
    Chown,
    Chzone,
    CpAttr,
    NextFree,
    Name,
    Describe,
    Destroy,
}

impl BuildVerb {
    pub const ALL: &'static [BuildVerb] = &[
        BuildVerb::Teleport,
        BuildVerb::Alias,
        BuildVerb::Wipe,
        BuildVerb::Set,
        BuildVerb::Find,
        BuildVerb::Create,
        BuildVerb::Dig,
        BuildVerb::Open,
        BuildVerb::Link,
        BuildVerb::Unlink,
        BuildVerb::Chown,
        BuildVerb::Chzone,
        BuildVerb::CpAttr,
        BuildVerb::NextFree,
        BuildVerb::Name,
        BuildVerb::Describe,
        BuildVerb::Destroy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildVerb::Teleport => "teleport",
            BuildVerb::Alias => "alias",
            BuildVerb::Wipe => "wipe",
            BuildVerb::Set => "set",
            BuildVerb::Find => "find",
            BuildVerb::Create => "create",
            BuildVerb::Dig => "dig",
            BuildVerb::Open => "open",
            BuildVerb::Link => "link",
            BuildVerb::Unlink => "unlink",
            BuildVerb::Chown => "chown",
            BuildVerb::Chzone => "chzone",
            BuildVerb::CpAttr => "cpattr",
            BuildVerb::NextFree => "nextfree",
            BuildVerb::Name => "name",
            BuildVerb::Describe => "describe",
            BuildVerb::Destroy => "destroy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tel" | "teleport" => Some(BuildVerb::Teleport),
            "alias" => Some(BuildVerb::Alias),
            "wipe" => Some(BuildVerb::Wipe),
            "set" => Some(BuildVerb::Set),
            "find" => Some(BuildVerb::Find),
            "create" => Some(BuildVerb::Create),
            "dig" => Some(BuildVerb::Dig),
            "open" => Some(BuildVerb::Open),
            "link" => Some(BuildVerb::Link),
            "unlink" => Some(BuildVerb::Unlink),
            "chown" => Some(BuildVerb::Chown),
            "chzone" => Some(BuildVerb::Chzone),
            "cp" | "cpattr" => Some(BuildVerb::CpAttr),
            "nextfree" => Some(BuildVerb::NextFree),
            "name" => Some(BuildVerb::Name),
            "desc" | "describe" => Some(BuildVerb::Describe),
            "destroy" => Some(BuildVerb::Destroy),
            _ => None,
        }
    }
}
