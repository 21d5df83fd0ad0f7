//! Mutation dispatch: one handler per builder verb.
//!
//! Shared discipline across every handler:
//! - parse the argument grammar first, then resolve references, then pass
//!   the authorization gate, and only then touch the graph;
//! - any failure before the final mutation leaves the graph unchanged and
//!   emits exactly one feedback line;
//! - multi-target operations (`cpattr`, flag batches, dual-exit `open`)
//!   report per item and keep going rather than aborting the batch.
//!
//! `Err` from a handler means the driver handed us a dangling id, not a
//! user mistake; user mistakes are always feedback lines.

use anyhow::Context as _;
use mudgraph::{NewObject, ObjectType, SearchOutcome, World, flags};

use crate::args::{colon_split, comma_list, eq_split, normalize_attr, slash_split};
use crate::gate::{self, PERM_MSG};
use crate::outbox::Outbox;
use crate::resolve::resolve;
use crate::{BuildVerb, Command, ansi};

/// Route one parsed command to its handler.
pub fn dispatch(
    world: &mut World,
    out: &mut dyn Outbox,
    verb: BuildVerb,
    cmd: &Command,
) -> anyhow::Result<()> {
    tracing::debug!(actor = %cmd.actor, verb = verb.as_str(), arg = %cmd.arg, "builder command");
    match verb {
        BuildVerb::Teleport => cmd_teleport(world, out, cmd),
        BuildVerb::Alias => cmd_alias(world, out, cmd),
        BuildVerb::Wipe => cmd_wipe(world, out, cmd),
        BuildVerb::Set => cmd_set(world, out, cmd),
        BuildVerb::Find => cmd_find(world, out, cmd),
        BuildVerb::Create => cmd_create(world, out, cmd),
        BuildVerb::Dig => cmd_dig(world, out, cmd),
        BuildVerb::Open => cmd_open(world, out, cmd),
        BuildVerb::Link => cmd_link(world, out, cmd),
        BuildVerb::Unlink => cmd_unlink(world, out, cmd),
        BuildVerb::Chown => cmd_chown(world, out, cmd),
        BuildVerb::Chzone => cmd_chzone(world, out, cmd),
        BuildVerb::CpAttr => cmd_cpattr(world, out, cmd),
        BuildVerb::NextFree => cmd_nextfree(world, out, cmd),
        BuildVerb::Name => cmd_name(world, out, cmd),
        BuildVerb::Describe => cmd_describe(world, out, cmd),
        BuildVerb::Destroy => cmd_destroy(world, out, cmd),
    }
}

/// `@tel <dest>` or `@tel <victim>=<dest>`. The `quiet` switch suppresses
/// the departure/arrival notices passed down to the move.
fn cmd_teleport(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Teleport where/what?");
        return Ok(());
    }
    let quiet = cmd.switches.has("quiet");

    if let Some((victim_tok, dest_tok)) = eq_split(&cmd.arg) {
        let Some(victim) = resolve(w, out, actor, victim_tok) else {
            return Ok(());
        };
        if !gate::controls(w, actor, victim) {
            out.emit_to(actor, PERM_MSG);
            return Ok(());
        }
        let Some(dest) = resolve(w, out, actor, dest_tok) else {
            return Ok(());
        };
        if w.is_room(victim) {
            out.emit_to(actor, "You can't teleport a room.");
            return Ok(());
        }
        if victim == dest {
            out.emit_to(actor, "You can't teleport an object inside of itself!");
            return Ok(());
        }
        out.emit_to(actor, "Teleported.");
        w.move_to(victim, dest, quiet).context("teleport victim")?;
    } else {
        let Some(dest) = resolve(w, out, actor, &cmd.arg) else {
            return Ok(());
        };
        if dest == actor {
            out.emit_to(actor, "You can't teleport inside yourself!");
            return Ok(());
        }
        out.emit_to(actor, "Teleported.");
        w.move_to(actor, dest, quiet).context("teleport self")?;
    }
    Ok(())
}

/// `@alias <player>=<alias>`: sets the paging alias, refusing aliases
/// already held by someone else. Changing only the case of the target's
/// current alias is always fine.
fn cmd_alias(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Alias whom?");
        return Ok(());
    }
    let Some((target_tok, new_alias)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "Alias missing.");
        return Ok(());
    };
    let new_alias = new_alias.trim();
    if new_alias.is_empty() {
        out.emit_to(actor, "Alias missing.");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };

    let old_alias = w.attr(target, "ALIAS").unwrap_or("").to_string();
    let duplicates = w.player_alias_search(new_alias);
    let case_change_only = !old_alias.is_empty() && old_alias.eq_ignore_ascii_case(new_alias);
    if !duplicates.is_empty() && !case_change_only {
        out.emit_to(actor, &format!("Alias '{new_alias}' is already in use."));
        return Ok(());
    }
    if !gate::controls(w, actor, target) {
        out.emit_to(
            actor,
            &format!("You do not have access to set an alias for {}.", w.name(target)),
        );
        return Ok(());
    }
    w.set_attr(target, "ALIAS", new_alias).context("set alias")?;
    out.emit_to(
        actor,
        &format!("Alias '{new_alias}' set for {}.", w.name(target)),
    );
    Ok(())
}

/// `@wipe <object>[/<pattern>]`: clears matching attributes. Protected
/// attributes never match.
fn cmd_wipe(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Wipe what?");
        return Ok(());
    }
    let (target_tok, pattern) = slash_split(&cmd.arg);
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }

    let matches = w.attrs_matching(target, pattern.unwrap_or("*"), true);
    if matches.is_empty() && pattern.is_some() {
        out.emit_to(actor, "No matching attributes found.");
        return Ok(());
    }
    for name in &matches {
        w.clear_attr(target, name).context("wipe attribute")?;
    }
    out.emit_to(
        actor,
        &format!("{} - {} attributes wiped.", w.name(target), matches.len()),
    );
    Ok(())
}

/// `@set <target>=<ATTR>:<value>` sets an attribute, empty value clears it.
/// `@set <target>=<flag> !<flag> ...` toggles flags, one confirmation or
/// rejection per token; a bad token never aborts the rest of the batch.
fn cmd_set(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Set what?");
        return Ok(());
    }
    let Some((target_tok, rhs)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "Set what?");
        return Ok(());
    };
    if rhs.trim().is_empty() {
        out.emit_to(actor, "Set what?");
        return Ok(());
    }
    let Some(victim) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, victim) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }

    if let Some((attr_tok, value)) = colon_split(rhs) {
        let attr = normalize_attr(attr_tok);
        if attr.is_empty() || !gate::can_set_attr(w, actor, &attr) {
            out.emit_to(actor, "You can't modify that attribute.");
            return Ok(());
        }
        let verb = if value.is_empty() {
            w.clear_attr(victim, &attr).context("clear attribute")?;
            "cleared"
        } else {
            w.set_attr(victim, &attr, value).context("set attribute")?;
            "set"
        };
        out.emit_to(actor, &format!("{} - {attr} {verb}.", w.name(victim)));
    } else {
        let mut answered = false;
        for token in rhs.split_whitespace() {
            let (setting, name_tok) = match token.strip_prefix('!') {
                Some(rest) => (false, rest),
                None => (true, token),
            };
            let flag = normalize_attr(name_tok);
            if flag.is_empty() {
                continue;
            }
            if !gate::can_set_flag(&flag) {
                out.emit_to(actor, &format!("You can't set/unset the flag - {flag}."));
                answered = true;
                continue;
            }
            w.set_flag(victim, &flag, setting).context("set flag")?;
            let verb = if setting { "set" } else { "cleared" };
            out.emit_to(actor, &format!("{} - {flag} {verb}.", w.name(victim)));
            answered = true;
        }
        if !answered {
            out.emit_to(actor, "Set what?");
        }
    }
    Ok(())
}

/// `@find <pattern>`: global name search, builder capability required.
fn cmd_find(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if !w.has_capability(actor, flags::FLAG_BUILDER) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    if cmd.arg.is_empty() {
        out.emit_to(actor, "No search pattern given.");
        return Ok(());
    }
    let results = w.global_name_search(&cmd.arg);
    if results.is_empty() {
        out.emit_to(actor, &format!("No name matches found for: {}", cmd.arg));
        return Ok(());
    }
    out.emit_to(actor, &format!("Name matches for: {}", cmd.arg));
    for id in &results {
        out.emit_to(actor, &format!(" {}", w.full_name(*id)));
    }
    out.emit_to(actor, &format!("{} matches returned.", results.len()));
    Ok(())
}

/// `@create <name>`: a new THING at the actor's location, owned by the actor.
fn cmd_create(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "You must supply a name!");
        return Ok(());
    }
    let location = w.obj(actor).context("acting object")?.location;
    let id = w.create_object(NewObject {
        name: cmd.arg.clone(),
        otype: ObjectType::Thing,
        location,
        owner: actor,
        home: None,
    });
    out.emit_to(actor, &format!("You create a new thing: {}", w.name(id)));
    Ok(())
}

/// `@dig <name>`: a new ROOM with no location, owned by the actor.
fn cmd_dig(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "You must supply a name!");
        return Ok(());
    }
    let id = w.create_object(NewObject {
        name: cmd.arg.clone(),
        otype: ObjectType::Room,
        location: None,
        owner: actor,
        home: None,
    });
    out.emit_to(actor, &format!("You create a new room: {}", w.name(id)));
    Ok(())
}

/// `@open <name>[=<dest>[,<return name>]]`: an EXIT anchored at the actor's
/// location. With a destination a reciprocal exit can be opened at the far
/// end; without one the exit is unlinked (`home = None`).
fn cmd_open(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Open an exit to where?");
        return Ok(());
    }
    let (exit_name, dest_part) = match eq_split(&cmd.arg) {
        Some((l, r)) => (l.trim(), Some(r)),
        None => (cmd.arg.trim(), None),
    };
    if exit_name.is_empty() {
        out.emit_to(actor, "You must supply an exit name.");
        return Ok(());
    }
    let Some(anchor) = w.obj(actor).context("acting object")?.location else {
        out.emit_to(actor, "You have no location to open an exit from.");
        return Ok(());
    };

    let Some(dest_part) = dest_part else {
        let id = w.create_object(NewObject {
            name: exit_name.to_string(),
            otype: ObjectType::Exit,
            location: Some(anchor),
            owner: actor,
            home: None,
        });
        out.emit_to(actor, &format!("You open an unlinked exit - {}", w.name(id)));
        return Ok(());
    };

    // First comma separates the destination from the optional return
    // exit's name; the return name may itself contain commas.
    let (dest_tok, back_name) = match dest_part.split_once(',') {
        Some((d, b)) => (d, Some(b.trim())),
        None => (dest_part, None),
    };
    let Some(dest) = resolve(w, out, actor, dest_tok) else {
        return Ok(());
    };
    if w.is_exit(dest) {
        out.emit_to(actor, "You can't open an exit to an exit!");
        return Ok(());
    }

    let id = w.create_object(NewObject {
        name: exit_name.to_string(),
        otype: ObjectType::Exit,
        location: Some(anchor),
        owner: actor,
        home: Some(dest),
    });
    out.emit_to(
        actor,
        &format!("You open an exit - {} to {}", w.name(id), w.name(dest)),
    );

    if let Some(back_name) = back_name {
        if back_name.is_empty() {
            out.emit_to(actor, "You must supply an exit name.");
            return Ok(());
        }
        let back = w.create_object(NewObject {
            name: back_name.to_string(),
            otype: ObjectType::Exit,
            location: Some(dest),
            owner: actor,
            home: Some(anchor),
        });
        out.emit_to(
            actor,
            &format!("You open an exit - {} to {}", w.name(back), w.name(anchor)),
        );
    }
    Ok(())
}

/// `@link <target>=<dest>`: sets `home`. An empty destination unlinks
/// without resolving anything.
fn cmd_link(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Link what?");
        return Ok(());
    }
    let Some((target_tok, dest_tok)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "You must provide a destination to link to.");
        return Ok(());
    };
    if target_tok.trim().is_empty() {
        out.emit_to(actor, "What do you want to link?");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    if dest_tok.trim().is_empty() {
        w.set_home(target, None).context("unlink")?;
        out.emit_to(actor, &format!("You have unlinked {}.", w.name(target)));
        return Ok(());
    }
    let Some(dest) = resolve(w, out, actor, dest_tok) else {
        return Ok(());
    };
    w.set_home(target, Some(dest)).context("link")?;
    out.emit_to(
        actor,
        &format!("You link {} to {}.", w.name(target), w.name(dest)),
    );
    Ok(())
}

/// `@unlink <target>`: clears `home`.
fn cmd_unlink(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Unlink what?");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, &cmd.arg) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    w.set_home(target, None).context("unlink")?;
    out.emit_to(actor, &format!("You have unlinked {}.", w.name(target)));
    Ok(())
}

/// `@chown <target>=<new owner>`: only players own, player objects keep
/// themselves.
fn cmd_chown(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Change the ownership of what?");
        return Ok(());
    }
    let Some((target_tok, owner_tok)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "Who should be the new owner of the object?");
        return Ok(());
    };
    if target_tok.trim().is_empty() {
        out.emit_to(actor, "Change the ownership of what?");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    let Some(new_owner) = resolve(w, out, actor, owner_tok) else {
        return Ok(());
    };
    if !w.is_player(new_owner) {
        out.emit_to(actor, "Only players may own objects.");
        return Ok(());
    }
    if w.is_player(target) {
        out.emit_to(actor, "You may not change the ownership of player objects.");
        return Ok(());
    }
    w.set_owner(target, new_owner).context("chown")?;
    out.emit_to(
        actor,
        &format!("{} now owns {}.", w.name(new_owner), w.name(target)),
    );
    Ok(())
}

/// `@chzone <target>=<zone>`; `none` (any case) clears the zone without
/// resolving it as an object.
fn cmd_chzone(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Change the zone of what?");
        return Ok(());
    }
    let Some((target_tok, zone_tok)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "What should the object's zone be set to?");
        return Ok(());
    };
    if target_tok.trim().is_empty() {
        out.emit_to(actor, "Change the zone of what?");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    if zone_tok.trim().eq_ignore_ascii_case("none") {
        w.set_zone(target, None).context("clear zone")?;
        out.emit_to(actor, &format!("{} is no longer zoned.", w.name(target)));
        return Ok(());
    }
    let Some(zone) = resolve(w, out, actor, zone_tok) else {
        return Ok(());
    };
    w.set_zone(target, Some(zone)).context("set zone")?;
    out.emit_to(
        actor,
        &format!("{} is now in zone {}.", w.name(target), w.name(zone)),
    );
    Ok(())
}

/// `@cpattr <src>[/<attr>]=<tgt>[/<attr>],...`: copies one attribute value
/// to each listed target. A source token without a slash names an attribute
/// on the actor. Targets resolve, gate, and report independently; a bad
/// entry skips only itself.
fn cmd_cpattr(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "What do you want to copy?");
        return Ok(());
    }
    let Some((src_part, tgt_part)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "You have not supplied both a source and a target(s).");
        return Ok(());
    };

    let (src_tok, src_attr_tok) = slash_split(src_part);
    let (src_obj, src_attr) = match src_attr_tok {
        Some(attr_tok) => {
            let Some(src) = resolve(w, out, actor, src_tok) else {
                return Ok(());
            };
            (src, normalize_attr(attr_tok))
        }
        // No slash: the token is an attribute on the actor itself.
        None => (actor, normalize_attr(src_tok)),
    };
    if src_attr.is_empty() {
        out.emit_to(actor, "What do you want to copy?");
        return Ok(());
    }
    let Some(value) = w.attr(src_obj, &src_attr).map(str::to_string) else {
        out.emit_to(
            actor,
            &format!("Source object does not have attribute: {src_attr}."),
        );
        return Ok(());
    };

    let targets = comma_list(tgt_part);
    if targets.is_empty() {
        out.emit_to(actor, "You have not supplied both a source and a target(s).");
        return Ok(());
    }
    for spec in targets {
        let (tgt_tok, tgt_attr_tok) = slash_split(spec);
        let tgt = match w.resolve(actor, tgt_tok) {
            SearchOutcome::One(id) => id,
            _ => {
                out.emit_to(actor, &format!("Target object does not exist: {tgt_tok}"));
                continue;
            }
        };
        if !gate::controls(w, actor, tgt) {
            out.emit_to(actor, PERM_MSG);
            continue;
        }
        let tgt_attr = tgt_attr_tok.map(normalize_attr).unwrap_or_else(|| src_attr.clone());
        if !gate::can_set_attr(w, actor, &tgt_attr) {
            out.emit_to(actor, "You can't modify that attribute.");
            continue;
        }
        w.set_attr(tgt, &tgt_attr, &value).context("copy attribute")?;
        out.emit_to(actor, &format!("{} - {tgt_attr} set.", w.name(tgt)));
    }
    Ok(())
}

/// `@nextfree`: reports the next unused dbref. Read-only.
fn cmd_nextfree(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    out.emit_to(
        cmd.actor,
        &format!("Next free object number: {}", w.next_free_id()),
    );
    Ok(())
}

/// `@name <target>=<new name>`: renames. Trailing whitespace is stripped
/// before storing; decoration markup is stripped from the echo only.
fn cmd_name(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "What do you want to name?");
        return Ok(());
    }
    let Some((target_tok, new_name)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "Name it what?");
        return Ok(());
    };
    // Strip the right only, in case someone wants a left-padded name.
    let new_name = new_name.trim_end();
    if new_name.is_empty() {
        out.emit_to(actor, "What would you like to name that object?");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    let old = w.name(target).to_string();
    w.set_name(target, new_name).context("rename")?;
    out.emit_to(
        actor,
        &format!("You have renamed {old} to {}.", ansi::strip_markup(new_name)),
    );
    Ok(())
}

/// `@desc <target>=<text>`: sets the description, empty text clears it.
fn cmd_describe(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "What do you want to describe?");
        return Ok(());
    }
    let Some((target_tok, text)) = eq_split(&cmd.arg) else {
        out.emit_to(actor, "How would you like to describe that object?");
        return Ok(());
    };
    let Some(target) = resolve(w, out, actor, target_tok) else {
        return Ok(());
    };
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    if text.is_empty() {
        w.set_description(target, None).context("clear description")?;
        out.emit_to(actor, &format!("{} - DESCRIPTION cleared.", w.name(target)));
    } else {
        w.set_description(target, Some(text.to_string()))
            .context("set description")?;
        out.emit_to(actor, &format!("{} - DESCRIPTION set.", w.name(target)));
    }
    Ok(())
}

/// `@destroy <target>` (optional `override` switch). Players need the
/// switch, superusers are never destroyable, garbage is a no-op.
fn cmd_destroy(w: &mut World, out: &mut dyn Outbox, cmd: &Command) -> anyhow::Result<()> {
    let actor = cmd.actor;
    if cmd.arg.is_empty() {
        out.emit_to(actor, "Destroy what?");
        return Ok(());
    }
    let Some(target) = resolve(w, out, actor, &cmd.arg) else {
        return Ok(());
    };
    if target == actor {
        out.emit_to(actor, "You can't destroy yourself.");
        return Ok(());
    }
    if !gate::controls(w, actor, target) {
        out.emit_to(actor, PERM_MSG);
        return Ok(());
    }
    if w.is_player(target) {
        if !cmd.switches.has("override") {
            out.emit_to(actor, "You must use @destroy/override on players.");
            return Ok(());
        }
        if w.is_superuser(target) {
            out.emit_to(actor, "You can't destroy a superuser.");
            return Ok(());
        }
    } else if w.is_going(target) || w.is_garbage(target) {
        out.emit_to(actor, "That object is already destroyed.");
        return Ok(());
    }
    out.emit_to(actor, &format!("You destroy {}.", w.name(target)));
    w.destroy(target).context("destroy")?;
    Ok(())
}
