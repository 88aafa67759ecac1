// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - list: fetch one page headlessly and print it
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Merge new defaults into existing config

use crate::catalog::{CardPage, CardQuery, CardSource, NO_IMAGE};
use crate::config::{CatalogConfig, Config, VERSION};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// cardscope - browse a trading card catalog from the terminal
#[derive(Parser)]
#[command(name = "cardscope")]
#[command(version = VERSION)]
#[command(about = "Browse a trading card catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page of cards and print it
    List(ListArgs),

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter by card name (substring match)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Cards per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Print the page as JSON instead of one line per card
    #[arg(long)]
    pub json: bool,
}

/// What main should do after argument handling
pub enum Mode {
    /// Run the interactive browser
    Tui,
    /// Headless single-page fetch
    List(ListArgs),
    /// A config subcommand already ran; exit
    Done,
}

/// Parse arguments and run config subcommands
pub fn handle_cli() -> Mode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(args)) => Mode::List(args),
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else if update {
                handle_config_update();
            } else {
                println!("Usage: cardscope config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
            }
            Mode::Done
        }
        None => Mode::Tui,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// list
// ─────────────────────────────────────────────────────────────────────────────

/// Fetch the requested page and print it to stdout
pub async fn run_list(config: &Config, source: &CardSource, args: &ListArgs) -> Result<()> {
    let page_size = args
        .page_size
        .map(CatalogConfig::clamp_page_size)
        .unwrap_or(config.catalog.page_size);
    let query = CardQuery::new(args.page, page_size, args.name.trim());

    tracing::debug!(page = query.page, "Listing cards for '{}'", query.name);
    let page = source
        .fetch_page(&query)
        .await
        .with_context(|| format!("Failed to fetch page {} from {}", query.page, source.label()))?;

    let output = format_page(&page, args.json)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write to stdout")?;
    Ok(())
}

/// Render a page as JSON or as aligned text lines with a counter footer
pub fn format_page(page: &CardPage, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&page.cards).context("Failed to serialize cards");
    }

    if page.cards.is_empty() {
        return Ok("No Cards Found".to_string());
    }

    let name_width = page
        .cards
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = page
        .cards
        .iter()
        .map(|card| {
            format!(
                "{:<width$}  {}  {}",
                card.name,
                card.type_line,
                card.image().unwrap_or(NO_IMAGE),
                width = name_width
            )
        })
        .collect();

    let total = page
        .total_count
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());
    lines.push(String::new());
    lines.push(format!("{} / {}", page.cards.len(), total));

    Ok(lines.join("\n"))
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("scroll_threshold = {}", config.scroll_threshold);
    println!("demo_mode = {}", config.demo_mode);
    println!();
    println!("[catalog]");
    println!("api_url = {:?}", config.catalog.api_url);
    println!("page_size = {}", config.catalog.page_size);
    println!("timeout_secs = {}", config.catalog.timeout_secs);
    println!("user_agent = {:?}", config.catalog.user_agent);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() && !confirm(&format!(
        "Config file exists at {}. Overwrite? [y/N] ",
        path.display()
    )) {
        println!("Aborted.");
        return;
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Config::to_toml is the single source of truth for the file format
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

/// Ask a yes/no question on stderr; anything but "y" is no
fn confirm(prompt: &str) -> bool {
    eprint!("{}", prompt);
    if std::io::stderr().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // File values only; env overrides stay out of the written file
    let updated = Config::from_file_only().to_toml();

    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Card;
    use clap::CommandFactory;

    fn page(total: Option<u64>) -> CardPage {
        CardPage {
            cards: vec![
                Card {
                    name: "Shock".to_string(),
                    image_url: None,
                    text: Some("Shock deals 2 damage to any target.".to_string()),
                    type_line: "Instant".to_string(),
                },
                Card {
                    name: "Grizzly Bears".to_string(),
                    image_url: Some("https://img.example.com/bears.jpg".to_string()),
                    text: None,
                    type_line: "Creature — Bear".to_string(),
                },
            ],
            total_count: total,
            count: Some(2),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_args_parse() {
        let cli = Cli::try_parse_from([
            "cardscope", "list", "--name", "bolt", "--page", "3", "--page-size", "50", "--json",
        ])
        .unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.name, "bolt");
        assert_eq!(args.page, 3);
        assert_eq!(args.page_size, Some(50));
        assert!(args.json);
    }

    #[test]
    fn text_output_aligns_names_and_counts() {
        let out = format_page(&page(Some(120)), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Shock          Instant  [no image]");
        assert_eq!(
            lines[1],
            "Grizzly Bears  Creature — Bear  https://img.example.com/bears.jpg"
        );
        assert_eq!(lines.last(), Some(&"2 / 120"));

        let unknown = format_page(&page(None), false).unwrap();
        assert!(unknown.ends_with("2 / ?"));
    }

    #[test]
    fn json_output_is_the_card_array() {
        let out = format_page(&page(None), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["type"], "Creature — Bear");
    }

    #[test]
    fn empty_page_says_so() {
        let empty = CardPage::default();
        assert_eq!(format_page(&empty, false).unwrap(), "No Cards Found");
    }
}
