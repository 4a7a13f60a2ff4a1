//! Binary entrypoint for the crawler CLI.
//!
//! Commands:
//! - `play [--seed <u64>]` - play a run on stdin/stdout (default)
//! - `init` - write a starter config file
//! - `catalog [--json]` - print the enemy table and spawn bands
//!
//! Every ending of a run (exit reached, quit, death) exits with status 0.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};

use crawler::config::Config;
use crawler::dungeon::{GameRng, GameSession, SpawnTable, TextConsole};

#[derive(Parser)]
#[command(name = "crawler")]
#[command(about = "A tiny text dungeon: reach the exit without dying")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand).
    /// Defaults to crawler.toml, which may be absent.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a run (default)
    Play {
        /// Fixed RNG seed; overrides the config file
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
    /// Show the enemy catalog with spawn chances
    Catalog {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

const DEFAULT_CONFIG: &str = "crawler.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG);
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    // Init writes a fresh file, so whatever is on disk now is irrelevant
    let config = match command {
        Commands::Init => Config::default(),
        _ => load_config(config_path, cli.config.is_some())?,
    };
    init_logging(&config, cli.verbose);

    match command {
        Commands::Play { seed } => {
            let rng = match seed.or(config.game.seed) {
                Some(s) => GameRng::new(s),
                None => GameRng::from_entropy(),
            };
            info!("Starting crawler v{} (seed {})", env!("CARGO_PKG_VERSION"), rng.seed());
            let mut session = GameSession::new(rng)?;
            let stdin = std::io::stdin();
            let mut console = TextConsole::new(stdin.lock(), std::io::stdout());
            let summary = session.run(&mut console)?;
            debug!("final stats: {:?}", summary.stats);
        }
        Commands::Init => {
            Config::create_default(config_path)?;
            info!("Configuration file created at {}", config_path);
            println!("Wrote {}", config_path);
        }
        Commands::Catalog { json } => {
            let table = SpawnTable::standard()?;
            let bands = table.bands();
            if json {
                println!("{}", serde_json::to_string(&bands)?);
            } else {
                println!("{:<16} {:>6} {:>6} {:>15} {:>7}", "ENEMY", "HP", "DMG", "BAND", "CHANCE");
                for b in bands {
                    println!(
                        "{:<16} {:>6} {:>6} {:>6.3}-{:<8.3} {:>6.1}%",
                        b.archetype.name,
                        b.archetype.hp.to_string(),
                        b.archetype.damage.to_string(),
                        b.lower,
                        b.upper,
                        b.probability() * 100.0
                    );
                }
            }
        }
    }

    Ok(())
}

/// A missing file at the default path means defaults; a path the user named must load.
fn load_config(path: &str, explicit: bool) -> Result<Config> {
    match Config::load(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if explicit || std::path::Path::new(path).exists() => Err(e),
        Err(_) => Ok(Config::default()),
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides config
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    // Logs go to stderr or a file; stdout belongs to the game.
    builder.target(env_logger::Target::Stderr);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Echo to the terminal only when someone is watching stderr
            let is_tty = atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
        eprintln!("Could not open log file {}; logging to stderr", file);
    }
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
