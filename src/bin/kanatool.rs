use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use kanatype::{Matcher, RuleTable};

#[derive(Parser)]
#[command(name = "kanatool", about = "Typing matcher diagnostics")]
struct Cli {
    /// Path to a custom rule-table TOML (replaces the built-in table)
    #[arg(long, global = true)]
    rules: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a keystroke string against a target and report each step
    Check {
        /// Target Japanese text
        target: String,
        /// Keystrokes to replay, in order
        keystrokes: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the candidate set at a cursor position
    Candidates {
        /// Target Japanese text
        target: String,
        /// Character index to inspect
        #[arg(long, default_value = "0")]
        at: usize,
    },
}

#[derive(Serialize)]
struct Step {
    key: char,
    accepted: bool,
    position: usize,
}

#[derive(Serialize)]
struct CheckReport {
    target: String,
    steps: Vec<Step>,
    matched: String,
    completed: bool,
}

fn run_check(target: &str, keystrokes: &str, json: bool) {
    let mut m = Matcher::new(target);
    let mut steps = Vec::new();
    for key in keystrokes.chars() {
        let accepted = m.input(key);
        steps.push(Step {
            key,
            accepted,
            position: m.position(),
        });
    }
    let report = CheckReport {
        target: target.to_string(),
        steps,
        matched: m.matched_text(),
        completed: m.completed(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report must serialize")
        );
        return;
    }

    for step in &report.steps {
        let mark = if step.accepted { "ok" } else { "NG" };
        println!("{} {:?} -> position {}", mark, step.key, step.position);
    }
    println!("matched:   {}", report.matched);
    println!("completed: {}", report.completed);
    if let Some(hint) = m.hint() {
        println!("hint:      {hint:?}");
    }
}

fn run_candidates(target: &str, at: usize) {
    let chars: Vec<char> = target.chars().collect();
    if at > chars.len() {
        eprintln!(
            "error: index {at} out of range for a {}-character target",
            chars.len()
        );
        process::exit(1);
    }
    for cand in RuleTable::global().candidates(&chars[at..]) {
        println!("{:<8} (span {})", cand.keys(), cand.span());
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.rules {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: cannot read {path}: {e}");
            process::exit(1);
        });
        if let Err(e) = RuleTable::init_custom(content) {
            eprintln!("error: invalid rule table: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Check {
            target,
            keystrokes,
            json,
        } => run_check(&target, &keystrokes, json),
        Command::Candidates { target, at } => run_candidates(&target, at),
    }
}
