//! buildshell: a single-player sandbox for the builder command set.
//!
//! Seeds a tiny world, reads lines from stdin, splits them into
//! verb + switches + argument, dispatches, and prints the feedback plus
//! any room traffic the mutation produced.

use anyhow::Context;
use mudbuild::outbox::Outbox;
use mudbuild::{BuildVerb, Command, dispatch, parse_line};
use mudgraph::{NewObject, ObjectId, ObjectType, World, flags};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Clone, Debug)]
struct Config {
    player_name: String,
    superuser: bool,
}

fn parse_args() -> Config {
    let player_name = std::env::var("BUILDSHELL_PLAYER").unwrap_or_else(|_| "Builder".to_string());
    let superuser = std::env::var("BUILDSHELL_SUPERUSER")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(true);
    Config {
        player_name,
        superuser,
    }
}

struct StdoutOutbox;

impl Outbox for StdoutOutbox {
    fn emit_to(&mut self, _who: ObjectId, line: &str) {
        println!("{line}");
    }
}

fn seed_world(cfg: &Config) -> anyhow::Result<(World, ObjectId)> {
    let mut w = World::new();
    let limbo = w.create_object(NewObject {
        name: "Limbo".to_string(),
        otype: ObjectType::Room,
        location: None,
        owner: ObjectId(0),
        home: None,
    });
    let wizard = w.create_object(NewObject {
        name: "Wizard".to_string(),
        otype: ObjectType::Player,
        location: Some(limbo),
        owner: ObjectId(1),
        home: Some(limbo),
    });
    w.set_flag(wizard, flags::FLAG_SUPERUSER, true)?;

    let player = w.create_object(NewObject {
        name: cfg.player_name.clone(),
        otype: ObjectType::Player,
        location: Some(limbo),
        owner: ObjectId(2),
        home: Some(limbo),
    });
    w.set_flag(player, flags::FLAG_BUILDER, true)?;
    if cfg.superuser {
        w.set_flag(player, flags::FLAG_SUPERUSER, true)?;
    }
    Ok((w, player))
}

fn print_help() {
    let verbs = BuildVerb::ALL
        .iter()
        .map(|v| format!("@{}", v.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("builder verbs: {verbs}");
    println!("shell: help | dump | quit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .init();

    let cfg = parse_args();
    let (mut world, player) = seed_world(&cfg).context("seed world")?;
    info!(player = %cfg.player_name, superuser = cfg.superuser, "buildshell ready");
    println!("buildshell: you are {} in Limbo. (try: help)", cfg.player_name);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = StdoutOutbox;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "dump" => {
                println!("{}", serde_json::to_string_pretty(&world)?);
                continue;
            }
            _ => {}
        }

        let Some((verb, switches, arg)) = parse_line(line) else {
            println!("huh? (try: help)");
            continue;
        };
        let cmd = Command::new(player, &arg).with_switches(switches);
        if let Err(e) = dispatch(&mut world, &mut out, verb, &cmd) {
            // Graph-level failures are driver bugs, not user mistakes.
            warn!(err = %e, verb = verb.as_str(), "command failed");
        }
        for (container, notice) in world.drain_traffic() {
            println!("[{}] {notice}", world.name(container));
        }
    }
    Ok(())
}
