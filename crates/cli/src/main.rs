use std::path::PathBuf;

use clap::{Parser, Subcommand};

use brawl_agent::tables::{attack_moves, startup_frames};
use brawl_agent::{run_trace, IdlePolicy, Policy, RuleBasedAgent};
use brawl_shared::{MapObservation, MoveKind, WeaponType, CONTROL_SIZE};

#[derive(Parser)]
#[command(name = "brawl", about = "Platform-fighter agent CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded observation trace through a policy
    Run {
        /// Trace file: one JSON object of keyed sections per line
        trace: PathBuf,

        /// Policy to drive (rule_based, idle)
        #[arg(long, default_value = "rule_based")]
        policy: String,

        /// Model file path handed through to the policy constructor
        #[arg(long)]
        model: Option<PathBuf>,

        /// Output path for the emitted control vectors (JSON)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the static attack timing and hitbox tables
    Tables,
}

/// Resolve a policy name to a boxed Policy trait object.
fn resolve_policy(name: &str, model: Option<PathBuf>) -> Box<dyn Policy> {
    match name {
        "rule_based" => Box::new(RuleBasedAgent::with_model(model)),
        "idle" => Box::new(IdlePolicy),
        other => {
            eprintln!("Unknown policy '{}'. Valid options: rule_based, idle.", other);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            trace,
            policy,
            model,
            output,
        } => cmd_run(&trace, &policy, model, output),
        Commands::Tables => cmd_tables(),
    }
}

fn cmd_run(trace: &PathBuf, policy_name: &str, model: Option<PathBuf>, output: Option<PathBuf>) {
    let raw = match std::fs::read_to_string(trace) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Failed to read trace {}: {}", trace.display(), e);
            std::process::exit(1);
        }
    };

    let mut frames: Vec<MapObservation> = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(frame) => frames.push(frame),
            Err(e) => {
                eprintln!("Bad trace frame on line {}: {}", lineno + 1, e);
                std::process::exit(1);
            }
        }
    }

    let mut policy = resolve_policy(policy_name, model);
    println!("Replaying {} frames through '{}'", frames.len(), policy.name());

    let actions = match run_trace(policy.as_mut(), &frames) {
        Ok(actions) => actions,
        Err((tick, e)) => {
            eprintln!("Policy failed on frame {}: {}", tick, e);
            std::process::exit(1);
        }
    };

    // Per-intent press counts across the whole trace.
    let mut presses = [0u32; CONTROL_SIZE];
    for action in &actions {
        for (slot, value) in action.to_raw().iter().enumerate() {
            presses[slot] += *value as u32;
        }
    }

    let intent_names = [
        "up", "left", "down", "right", "jump", "pickup", "dodge", "light", "heavy", "emote",
    ];
    println!();
    println!("=== Press counts ===");
    for (name, count) in intent_names.iter().zip(presses.iter()) {
        println!("{:<8} {:>6}", name, count);
    }

    if let Some(path) = output {
        let raw_actions: Vec<[u8; CONTROL_SIZE]> = actions.iter().map(|a| a.to_raw()).collect();
        match serde_json::to_string_pretty(&raw_actions) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => println!("\nActions written to {}", path.display()),
                Err(e) => eprintln!("\nFailed to write actions: {}", e),
            },
            Err(e) => eprintln!("\nFailed to serialize actions: {}", e),
        }
    }
}

fn cmd_tables() {
    let weapons = [WeaponType::Unarmed, WeaponType::Spear, WeaponType::Hammer];
    let moves = [
        MoveKind::NeutralLight,
        MoveKind::DownLight,
        MoveKind::SideLight,
        MoveKind::NeutralHeavy,
        MoveKind::DownHeavy,
        MoveKind::SideHeavy,
        MoveKind::NeutralAir,
        MoveKind::DownAir,
        MoveKind::SideAir,
        MoveKind::Recovery,
        MoveKind::GroundPound,
    ];

    println!("=== Startup frames ===");
    println!("{:<14} {:>8} {:>8} {:>8}", "move", "unarmed", "spear", "hammer");
    for mv in moves {
        print!("{:<14}", format!("{:?}", mv));
        for weapon in weapons {
            match startup_frames(weapon, mv) {
                Some(frames) => print!(" {:>8}", frames),
                None => print!(" {:>8}", "-"),
            }
        }
        println!();
    }

    println!();
    println!("=== Attack buckets (scan order) ===");
    for weapon in weapons {
        for airborne in [false, true] {
            let stance = if airborne { "air" } else { "ground" };
            println!("{:?} / {}:", weapon, stance);
            for (mv, hitbox) in attack_moves(weapon, airborne) {
                println!(
                    "  {:<14} offset=({:+.2}, {:+.2}) size=({:.2} x {:.2})",
                    format!("{:?}", mv),
                    hitbox.offset.x,
                    hitbox.offset.y,
                    hitbox.size.x,
                    hitbox.size.y,
                );
            }
        }
    }
}
