//! CLI entry point for bar-keybind-manager
//!
//! Provides command-line interface for listing keybinds, checking
//! duplicates, linting key fields, and editing bindings with
//! transactional saves.

use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use bar_keybind_manager::config::{ConfigManager, ConfigTransaction};
use bar_keybind_manager::core::{
    normalize, DefaultsIndex, DuplicateDetector, KeyFieldLinter, KeybindDocument,
};

#[derive(Parser)]
#[command(name = "bar-keybind-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all keybinds
    List {
        /// Path to uikeys.txt
        #[arg(short, long, default_value = "~/Beyond-All-Reason/data/uikeys.txt")]
        config: PathBuf,

        /// Path to the default keys file (enables synthetic entries and resets)
        #[arg(short, long)]
        defaults: Option<PathBuf>,

        /// Show only unbound actions
        #[arg(long)]
        unbound_only: bool,

        /// Show only changed bindings
        #[arg(long)]
        changed_only: bool,
    },

    /// Check for duplicate keybinds
    Check {
        /// Path to uikeys.txt
        #[arg(short, long, default_value = "~/Beyond-All-Reason/data/uikeys.txt")]
        config: PathBuf,
    },

    /// Lint key fields for tokens the engine won't recognize
    Lint {
        /// Path to uikeys.txt
        #[arg(short, long, default_value = "~/Beyond-All-Reason/data/uikeys.txt")]
        config: PathBuf,
    },

    /// Print the canonical form of a key combo
    Normalize {
        /// Raw combo string (e.g. "Shift+Ctrl+1" or "1,1")
        combo: String,
    },

    /// Bind an action to a new key combo
    Set {
        /// Action name
        action: String,

        /// New key combo
        key: String,

        /// Path to uikeys.txt
        #[arg(short, long, default_value = "~/Beyond-All-Reason/data/uikeys.txt")]
        config: PathBuf,

        /// Path to the default keys file
        #[arg(short, long)]
        defaults: Option<PathBuf>,
    },

    /// Unbind an action
    Unbind {
        /// Action name
        action: String,

        /// Path to uikeys.txt
        #[arg(short, long, default_value = "~/Beyond-All-Reason/data/uikeys.txt")]
        config: PathBuf,

        /// Path to the default keys file
        #[arg(short, long)]
        defaults: Option<PathBuf>,
    },

    /// Reset an action to its default (or original) key
    Reset {
        /// Action name
        action: String,

        /// Path to uikeys.txt
        #[arg(short, long, default_value = "~/Beyond-All-Reason/data/uikeys.txt")]
        config: PathBuf,

        /// Path to the default keys file
        #[arg(short, long)]
        defaults: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            config,
            defaults,
            unbound_only,
            changed_only,
        } => list_keybinds(&config, defaults.as_deref(), unbound_only, changed_only)?,
        Commands::Check { config } => check_duplicates(&config)?,
        Commands::Lint { config } => lint_keybinds(&config)?,
        Commands::Normalize { combo } => {
            println!("{}", normalize(&combo));
        }
        Commands::Set {
            action,
            key,
            config,
            defaults,
        } => edit_keybind(&config, defaults.as_deref(), &action, Edit::Set(key))?,
        Commands::Unbind {
            action,
            config,
            defaults,
        } => edit_keybind(&config, defaults.as_deref(), &action, Edit::Unbind)?,
        Commands::Reset {
            action,
            config,
            defaults,
        } => edit_keybind(&config, defaults.as_deref(), &action, Edit::Reset)?,
    }

    Ok(())
}

/// Expand tilde in a user-supplied path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Load the defaults index, empty when no path was given or the file is
/// missing (the original GUI ships without one just fine)
fn load_defaults(defaults: Option<&Path>) -> anyhow::Result<DefaultsIndex> {
    let Some(path) = defaults else {
        return Ok(DefaultsIndex::new());
    };

    let path = expand_path(path)?;
    if !path.exists() {
        eprintln!(
            "{} Defaults file not found, continuing without: {}",
            "⚠".yellow(),
            path.display()
        );
        return Ok(DefaultsIndex::new());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read defaults file: {}", e))?;
    Ok(DefaultsIndex::from_content(&content))
}

/// Open the keybind file and parse it into a document
fn load_document(
    config: &Path,
    defaults: Option<&Path>,
) -> anyhow::Result<(ConfigManager, KeybindDocument)> {
    let manager = ConfigManager::new(expand_path(config)?)?;
    let content = manager.read_config()?;
    let document = KeybindDocument::parse(&content, load_defaults(defaults)?);
    Ok((manager, document))
}

/// List keybinds with bound/changed/duplicate markers
fn list_keybinds(
    config: &Path,
    defaults: Option<&Path>,
    unbound_only: bool,
    changed_only: bool,
) -> anyhow::Result<()> {
    let (manager, document) = load_document(config, defaults)?;

    println!(
        "{}",
        format!("Keybinds from: {}\n", manager.config_path().display()).bold()
    );

    let mut shown = 0;
    for keybind in document.keybinds() {
        if unbound_only && keybind.is_bound() {
            continue;
        }
        if changed_only && !keybind.is_changed() {
            continue;
        }
        shown += 1;

        let key = if keybind.is_bound() {
            format!("{:<18}", keybind.key).cyan().bold()
        } else {
            format!("{:<18}", "unbound").dimmed()
        };

        let mut markers: Vec<ColoredString> = Vec::new();
        if document.is_duplicate(keybind) {
            markers.push("duplicate".red().bold());
        }
        if keybind.is_changed() {
            markers.push("changed".yellow());
        }
        if keybind.is_synthetic {
            markers.push("from defaults".dimmed());
        }
        let markers = markers
            .iter()
            .map(|m| format!("[{}]", m))
            .collect::<Vec<_>>()
            .join(" ");

        println!("{} {} {}", key, keybind.action.green(), markers);
    }

    println!(
        "\n{} Showing {} of {} keybinds",
        "✓".green(),
        shown,
        document.keybinds().len()
    );

    Ok(())
}

/// Check the file for duplicate keybinds
fn check_duplicates(config: &Path) -> anyhow::Result<()> {
    let (manager, document) = load_document(config, None)?;

    println!(
        "{} Parsed {} keybinds from {}\n",
        "→".cyan(),
        document.keybinds().len(),
        manager.config_path().display()
    );

    let detector = DuplicateDetector::from_keybinds(document.keybinds());
    let duplicates = detector.find_duplicates();

    if duplicates.is_empty() {
        println!("{} {}", "✓".green().bold(), "No duplicates detected!".bold());
    } else {
        println!(
            "{} Found {} duplicate{}:\n",
            "✗".red().bold(),
            duplicates.len(),
            if duplicates.len() == 1 { "" } else { "s" }
        );

        for (i, duplicate) in duplicates.iter().enumerate() {
            println!(
                "{} {}",
                format!("Duplicate {}", i + 1).yellow().bold(),
                duplicate.key.cyan()
            );

            for (idx, keybind) in duplicate.keybinds.iter().enumerate() {
                println!(
                    "  {} {} {}",
                    format!("{}.", idx + 1).dimmed(),
                    format!("{:<18}", keybind.key).magenta(),
                    keybind.action,
                );
            }
            println!();
        }

        println!(
            "{}",
            "⚠ Only one of each group will win in-game!".yellow()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Lint key fields for unrecognized tokens
fn lint_keybinds(config: &Path) -> anyhow::Result<()> {
    let (manager, document) = load_document(config, None)?;

    println!(
        "{} Linting {}\n",
        "→".cyan(),
        manager.config_path().display()
    );

    let linter = KeyFieldLinter::new();
    let issues = linter.lint_keybinds(document.keybinds());

    if issues.is_empty() {
        println!("{} {}", "✓".green().bold(), "No issues found!".bold());
    } else {
        for issue in &issues {
            println!(
                "{} {}: {}",
                "⚠".yellow(),
                issue.action.green(),
                issue.message
            );
        }
        println!(
            "\n{} {} issue{} found (warnings only, nothing blocked)",
            "⚠".yellow().bold(),
            issues.len(),
            if issues.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// A single edit operation on one action's keybind
enum Edit {
    Set(String),
    Unbind,
    Reset,
}

/// Apply one edit to the named action and save transactionally
fn edit_keybind(
    config: &Path,
    defaults: Option<&Path>,
    action: &str,
    edit: Edit,
) -> anyhow::Result<()> {
    let (manager, mut document) = load_document(config, defaults)?;

    let index = document
        .find_action(action)
        .ok_or_else(|| anyhow::anyhow!("No keybind for action '{}'", action))?;

    match edit {
        Edit::Set(key) => {
            document.set_key(index, key.clone());
            println!(
                "{} Bound {} to {}",
                "✓".green(),
                action.green(),
                normalize(&key).cyan().bold()
            );
        }
        Edit::Unbind => {
            document.unbind(index);
            println!("{} Unbound {}", "✓".green(), action.green());
        }
        Edit::Reset => {
            let restored = document
                .reset(index)
                .ok_or_else(|| anyhow::anyhow!("No keybind for action '{}'", action))?;
            println!(
                "{} Reset {} to {}",
                "✓".green(),
                action.green(),
                restored.cyan().bold()
            );
        }
    }

    // Surface new collisions before the save makes them permanent
    if let Some(keybind) = document.keybind(index) {
        if document.is_duplicate(keybind) {
            println!(
                "{} {} now collides with another action on {}",
                "⚠".yellow().bold(),
                action,
                normalize(&keybind.key).cyan()
            );
        }
    }

    let tx = ConfigTransaction::begin(&manager)?;
    tx.commit(&document.render())?;

    println!(
        "{} Saved {}",
        "✓".green(),
        manager.config_path().display()
    );

    Ok(())
}
