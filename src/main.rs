//! CLI entrypoint for `ig-audit`.
//!
//! Parses command-line arguments, validates the export archive path, loads
//! both membership lists through the library engine, prints a terminal
//! summary, and writes the CSV partitions plus the static HTML report to
//! the output directory.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use ig_audit::{
    engine::Engine,
    export::{save_follow_rows_csv, save_relation_subset_csv, save_relations_csv},
    follow::Relation,
    html::save_report,
    report::render_summary,
    stats::audit_stats,
};
use log::{LevelFilter, error, warn};

#[derive(Parser, Debug)]
#[command(
    name = "ig-audit",
    version,
    about = "Instagram followers vs following audit"
)]
struct Args {
    /// Path to the Instagram data download ZIP
    #[arg(short = 'z', long = "zip")]
    zip: PathBuf,

    /// Path to the output directory
    #[arg(short = 'o', long = "out", default_value = "ig_audit_output")]
    out: PathBuf,

    /// Report title
    #[arg(long = "title", default_value = "Instagram followers-following audit")]
    title: String,

    /// Attempt to open the HTML report after generation
    #[arg(long = "open")]
    open: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress summary output (exports are still written)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

const ASCII_TITLE: &str = r#"
 ___ ____      _             _ _ _
|_ _/ ___|    / \  _   _  __| (_) |_
 | | | |_    / _ \| | | |/ _` | | __|
 | | |_| |  / ___ \ |_| | (_| | | |_
|___\____| /_/   \_\__,_|\__,_|_|\__|
"#;

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn verify_inputs(args: &Args) -> Result<()> {
    if !args.zip.exists() {
        bail!("archive not found: {}", args.zip.display());
    }
    Ok(())
}

fn write_or_exit(res: Result<()>, path: &Path, code: i32) {
    if let Err(e) = res {
        error!("failed to write {}: {:#}", path.display(), e);
        std::process::exit(code);
    }
}

/// Best-effort launch of the platform opener. Non-essential, so every
/// failure is swallowed after a warning.
fn open_report(path: &Path) {
    #[cfg(target_os = "macos")]
    let mut cmd = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = std::process::Command::new("xdg-open");

    if let Err(e) = cmd.arg(path).spawn() {
        warn!("could not open {}: {}", path.display(), e);
    }
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    // Configure color policy
    match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }
    if let Err(e) = verify_inputs(&args) {
        error!("{}", e);
        std::process::exit(2);
    }

    let mut engine = Engine::new();
    if let Err(e) = engine.load_from_archive(&args.zip) {
        error!("failed to load {}: {:#}", args.zip.display(), e);
        std::process::exit(3);
    }

    if !args.quiet {
        println!("{}", ASCII_TITLE.bold().green());
        println!("{}", render_summary(&engine));
    }

    if let Err(e) = fs::create_dir_all(&args.out) {
        error!(
            "failed to create output directory {}: {}",
            args.out.display(),
            e
        );
        std::process::exit(4);
    }

    let rows = engine.relation_rows();

    let followers_csv = args.out.join("followers.csv");
    let following_csv = args.out.join("following.csv");
    let relations_csv = args.out.join("relations.csv");
    write_or_exit(
        save_follow_rows_csv(&engine.followers_rows, &followers_csv),
        &followers_csv,
        5,
    );
    write_or_exit(
        save_follow_rows_csv(&engine.following_rows, &following_csv),
        &following_csv,
        5,
    );
    write_or_exit(save_relations_csv(&rows, &relations_csv), &relations_csv, 5);
    for relation in [
        Relation::YouFollowOnly,
        Relation::TheyFollowOnly,
        Relation::Mutual,
    ] {
        let path = args.out.join(format!("{}.csv", relation.as_str()));
        write_or_exit(save_relation_subset_csv(&rows, relation, &path), &path, 5);
    }

    let html_path = args.out.join("instagram_audit_report.html");
    let stats = audit_stats(&engine.followers, &engine.following, &rows);
    write_or_exit(
        save_report(&html_path, &args.title, &stats, &rows),
        &html_path,
        6,
    );

    println!("Done");
    println!("Output directory: {}", args.out.display());
    println!("HTML report: {}", html_path.display());
    println!("CSV summary: {}", relations_csv.display());

    if args.open {
        open_report(&html_path);
    }
}
