//! folio CLI: Command-line interface for the portfolio timeline

use clap::{Args, Parser, Subcommand};
use folio_engine::{Config, Layout, Portfolio, SystemClock};
use folio_tui::headless::{Headless, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use folio_tui::Theme;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Divider-driven portfolio timeline in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui(TuiArgs),

    /// Create .folio/config.json and a sample portfolio.json
    Init,

    /// Start the controller headlessly and print its state
    Check {
        #[command(flatten)]
        paths: ContentArgs,

        /// Terminal width to lay out for
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u16,

        /// Terminal height to lay out for
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct ContentArgs {
    /// Portfolio file (default: ./portfolio.json, or the built-in sample)
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Config file (default: .folio/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Default)]
struct TuiArgs {
    #[command(flatten)]
    paths: ContentArgs,

    /// Write logs to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Use the light color theme
    #[arg(long)]
    light: bool,
}

const FOLIO_DIR: &str = ".folio";
const PORTFOLIO_FILE: &str = "portfolio.json";
const DEFAULT_LOG_FILTER: &str = "folio=debug";

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(&TuiArgs::default()),
        Some(Commands::Tui(args)) => cmd_tui(&args),
        Some(Commands::Init) => cmd_init(),
        Some(Commands::Check {
            paths,
            width,
            height,
            json,
        }) => cmd_check(&paths, width, height, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_tui(args: &TuiArgs) -> Result<(), Box<dyn Error>> {
    if let Some(ref log) = args.log {
        init_logging(log)?;
    }

    let portfolio = load_portfolio(args.paths.portfolio.as_deref())?;
    let config = load_config(args.paths.config.as_deref())?;
    info!(
        title = %portfolio.title,
        milestones = portfolio.len(),
        "portfolio loaded"
    );
    let theme = if args.light {
        Theme::latte()
    } else {
        Theme::mocha()
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(folio_tui::run_tui(portfolio, config, theme))
}

fn cmd_init() -> Result<(), Box<dyn Error>> {
    let config_path = default_config_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
    } else {
        Config::default().save(&config_path)?;
        println!("Created {}", config_path.display());
    }

    let portfolio_path = Path::new(PORTFOLIO_FILE);
    if portfolio_path.exists() {
        println!("Portfolio already exists at {}", portfolio_path.display());
    } else {
        Portfolio::sample().save(portfolio_path)?;
        println!("Created {}", portfolio_path.display());
    }

    println!("\nfolio initialized. Run `folio` to open the timeline.");
    Ok(())
}

fn cmd_check(
    paths: &ContentArgs,
    width: u16,
    height: u16,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let portfolio = load_portfolio(paths.portfolio.as_deref())?;
    let config = load_config(paths.config.as_deref())?;

    let mut headless = Headless::new(portfolio, config, SystemClock::new(), width, height)?;
    let captured = headless.render()?;

    if json {
        let milestones: Vec<_> = headless
            .app()
            .surface()
            .milestones()
            .iter()
            .map(|m| serde_json::json!({ "top": m.top, "height": m.height }))
            .collect();
        let output = serde_json::json!({
            "state": captured.state,
            "milestones": milestones,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let state = captured.state;
    println!("folio check ({width}x{height})\n");
    println!("Milestones: {}", headless.app().surface().milestone_count());
    println!("Current: {}", state.current_milestone);
    println!("Divider: {:.1}%", state.divider_position);
    println!();
    println!("{}", captured.screen_contents);
    Ok(())
}

fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, Box<dyn Error>> {
    if let Some(path) = path {
        return Ok(Portfolio::load(path)?);
    }
    let default = Path::new(PORTFOLIO_FILE);
    if default.exists() {
        Ok(Portfolio::load(default)?)
    } else {
        Ok(Portfolio::sample())
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::load_or_default(&default_config_path())?),
    }
}

fn default_config_path() -> PathBuf {
    Path::new(FOLIO_DIR).join("config.json")
}

/// Log to `path`; stdout belongs to the TUI.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}
