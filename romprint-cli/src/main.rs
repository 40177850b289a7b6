//! romprint CLI
//!
//! Command-line interface for fingerprinting ROM dumps, disc images, and
//! playlists.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};
use serde::Serialize;

use romprint_lib::{Console, HashIterator, generate_from_file, set_verbose_handler};

#[derive(Parser)]
#[command(name = "romprint")]
#[command(about = "Generate canonical MD5 fingerprints for game ROMs and disc images", long_about = None)]
struct Cli {
    /// Print per-step diagnostics while hashing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a file for a specific console
    Hash {
        /// Console short name (see `romprint consoles`)
        #[arg(short, long)]
        console: Console,

        /// ROM, disc image, or .m3u playlist
        path: String,

        /// Emit a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Infer candidate consoles from the path and report the first hash
    /// that works
    Identify {
        /// ROM, disc image, or .m3u playlist
        path: String,

        /// Emit a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List all supported consoles
    Consoles,
}

#[derive(Serialize)]
struct HashReport<'a> {
    path: &'a str,
    console: &'a str,
    hash: &'a str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        set_verbose_handler(Some(Arc::new(|message: &str| {
            eprintln!("{}", message.if_supports_color(Stderr, |t| t.dimmed()));
        })));
    }

    match cli.command {
        Commands::Hash {
            console,
            path,
            json,
        } => run_hash(console, &path, json),
        Commands::Identify { path, json } => run_identify(&path, json),
        Commands::Consoles => {
            run_consoles();
            ExitCode::SUCCESS
        }
    }
}

fn run_hash(console: Console, path: &str, json: bool) -> ExitCode {
    match generate_from_file(console, path) {
        Ok(hash) => {
            print_report(console, path, &hash, json);
            ExitCode::SUCCESS
        }
        Err(error) => {
            report_error(&error.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run_identify(path: &str, json: bool) -> ExitCode {
    let mut iterator = HashIterator::new(path, None);

    match iterator.next() {
        Some(hash) => {
            // next() only advances past recipes that ran, so the last
            // console tried is the one that produced the hash
            let console = iterator.last_console().expect("a recipe ran");
            print_report(console, path, &hash, json);
            ExitCode::SUCCESS
        }
        None => {
            report_error(&format!("No console recipe matched {path}"));
            ExitCode::FAILURE
        }
    }
}

fn run_consoles() {
    for &console in Console::all() {
        println!(
            "{:<14} {}",
            console
                .short_name()
                .if_supports_color(Stdout, |t| t.cyan()),
            console.display_name()
        );
    }
}

fn print_report(console: Console, path: &str, hash: &str, json: bool) {
    if json {
        let report = HashReport {
            path,
            console: console.short_name(),
            hash,
        };
        println!("{}", serde_json::to_string(&report).expect("report serializes"));
    } else {
        println!("{:<34}{}", hash.if_supports_color(Stdout, |t| t.green()), path);
    }
}

fn report_error(message: &str) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stderr, |t| t.bright_red()),
        message
    );
}
