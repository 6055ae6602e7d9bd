//! shortcut-engine - inspect resolved shortcuts from the command line
//!
//! # Usage
//!
//! ```bash
//! shortcut-engine list --platform mac
//! shortcut-engine parse --code Digit5 --ctrl --shift
//! shortcut-engine check new_topic CommandOrControl K
//! shortcut-engine format CommandOrControl Shift C
//! ```
//!
//! The binary only reads the persisted overrides file; it never writes it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use shortcut_engine::config::{self, Config};
use shortcut_engine::error::ResultExt;
use shortcut_engine::logging;
use shortcut_engine::shortcuts::{
    self, from_records, load_records, parse_key_event, KeyEvent, MemoryOverrideStore, Platform,
    Registry, ShortcutName, ShortcutSettings,
};

#[derive(Parser, Debug)]
#[command(
    name = "shortcut-engine",
    version,
    about = "Inspect keyboard shortcut bindings"
)]
struct Cli {
    /// Platform to resolve for (win, mac, linux); defaults to config, then host
    #[arg(long, global = true)]
    platform: Option<Platform>,

    /// Config file (default: ~/.shortcut-engine/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Persisted overrides file (default: from config)
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every shortcut visible on the platform
    List,
    /// Parse a key event into tokens
    Parse {
        /// Physical key code, e.g. KeyA, Digit5, NumpadEnter, F5
        #[arg(long)]
        code: String,
        #[arg(long)]
        ctrl: bool,
        #[arg(long)]
        alt: bool,
        #[arg(long)]
        meta: bool,
        #[arg(long)]
        shift: bool,
    },
    /// Check whether a key sequence could be bound to a shortcut
    Check {
        /// Shortcut identifier, e.g. new_topic
        name: String,
        /// Key tokens, e.g. CommandOrControl K
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Render key tokens for display and dispatch
    Format {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let _guard = logging::init(&config.log_level);

    let platform = cli.platform.unwrap_or_else(|| config.get_platform());
    info!(platform = %platform, command = ?cli.command, "Starting");

    match cli.command {
        Command::List => list(&config, cli.overrides, platform),
        Command::Parse {
            code,
            ctrl,
            alt,
            meta,
            shift,
        } => {
            let event = KeyEvent {
                ctrl,
                alt,
                meta,
                shift,
                code,
            };
            parse(&event, platform);
            Ok(())
        }
        Command::Check { name, tokens } => check(&config, cli.overrides, platform, &name, tokens),
        Command::Format { tokens } => {
            println!("display:  {}", shortcuts::display(&tokens, platform));
            println!("dispatch: {}", shortcuts::dispatch(&tokens, platform));
            Ok(())
        }
    }
}

/// Seed an in-memory store from the persisted overrides file.
///
/// A broken overrides file is logged and treated as empty.
fn load_store(config: &Config, overrides: Option<PathBuf>) -> MemoryOverrideStore {
    let path = overrides.unwrap_or_else(|| config.get_overrides_path());
    let records = load_records(&path).warn_on_err().unwrap_or_default();
    MemoryOverrideStore::with_overrides(from_records(&records))
}

fn list(config: &Config, overrides: Option<PathBuf>, platform: Platform) -> Result<()> {
    let registry = Registry::builtin();
    let settings = ShortcutSettings::new(&registry, load_store(config, overrides), platform);

    for shortcut in settings.resolve_all() {
        let binding = settings
            .dispatch_binding(shortcut.name, shortcut.name.as_str())
            .with_context(|| format!("shortcut {} not resolved", shortcut.name))?;
        let mut flags = Vec::new();
        if !shortcut.enabled {
            flags.push("disabled");
        }
        if !shortcut.editable {
            flags.push("locked");
        }
        if settings.is_modified(shortcut.name) {
            flags.push("modified");
        }

        println!(
            "{:<32} {:<24} {:<24} {}",
            shortcut.name,
            shortcuts::display(&shortcut.keys, platform),
            binding.keys,
            flags.join(",")
        );
    }
    Ok(())
}

fn parse(event: &KeyEvent, platform: Platform) {
    let tokens = parse_key_event(event, platform);
    if tokens.is_empty() {
        println!("no usable end key for code '{}'", event.code);
        return;
    }

    println!("tokens:     {}", tokens.join(" "));
    println!("display:    {}", shortcuts::display(&tokens, platform));
    println!("dispatch:   {}", shortcuts::dispatch(&tokens, platform));
    println!("acceptable: {}", shortcuts::is_acceptable(&tokens));
}

fn check(
    config: &Config,
    overrides: Option<PathBuf>,
    platform: Platform,
    name: &str,
    tokens: Vec<String>,
) -> Result<()> {
    let name: ShortcutName = name.parse().context("invalid shortcut name")?;
    let registry = Registry::builtin();
    let settings = ShortcutSettings::new(&registry, load_store(config, overrides), platform);

    let current = settings
        .resolve(name)
        .with_context(|| format!("shortcut {} is not registered", name))?;

    let acceptable = shortcuts::is_acceptable(&tokens);
    let duplicate = shortcuts::is_duplicate(&settings.resolve_all(), &tokens, name);

    println!("shortcut:   {}", name);
    println!("editable:   {}", current.editable);
    println!("acceptable: {}", acceptable);
    println!("duplicate:  {}", duplicate);
    println!(
        "verdict:    {}",
        if current.editable && acceptable && !duplicate {
            "ok"
        } else {
            "refused"
        }
    );
    Ok(())
}
