//! Binary entrypoint for the Mazecrawl CLI.
//!
//! Commands:
//! - `play [--seed <n>]` - play a maze (the default when no command is given)
//! - `preview [--seed <n>]` - print a generated maze and exit, without entering raw mode
//! - `init` - write a starter `mazecrawl.toml`
//!
//! See the library crate docs for module-level details: `mazecrawl::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::Rng;

use mazecrawl::config::Config;
use mazecrawl::game::console::TerminalConsole;
use mazecrawl::game::entity::Entity;
use mazecrawl::game::maze::Maze;
use mazecrawl::game::{GameSession, SessionState};

#[derive(Parser)]
#[command(name = "mazecrawl")]
#[command(about = "Walk a randomly generated maze to its exit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "mazecrawl.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a maze
    Play {
        /// Generation seed; overrides `maze.seed` from the config file
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print a generated maze without playing it
    Preview {
        /// Generation seed; overrides `maze.seed` from the config file
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Init => {
            init_logging(&None, cli.verbose, false);
            if std::path::Path::new(&cli.config).exists() {
                return Err(anyhow!(
                    "{} already exists; remove it first to regenerate",
                    cli.config
                ));
            }
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
        Commands::Preview { seed } => {
            let config = Config::load_or_default(&cli.config).await?;
            init_logging(&Some(config.clone()), cli.verbose, false);
            let (maze, seed) = build_maze(&config, seed)?;
            println!("seed {}", seed);
            print!("{}", maze);
        }
        Commands::Play { seed } => {
            let config = Config::load_or_default(&cli.config).await?;
            init_logging(&Some(config.clone()), cli.verbose, true);
            info!("Starting Mazecrawl v{}", env!("CARGO_PKG_VERSION"));

            let (maze, seed) = build_maze(&config, seed)?;
            let player = Entity::character(
                config.player.name.clone(),
                config.player.health,
                config.player.attack_power,
            );
            let mut session = GameSession::new(player, maze);
            let outcome = {
                let mut console = TerminalConsole::new()?;
                session.run(&mut console)?
                // console drops here and restores the terminal
            };
            match outcome {
                SessionState::Won => info!("Run won (seed {}, {} turns)", seed, session.turns()),
                SessionState::Quit => info!("Run abandoned (seed {}, {} turns)", seed, session.turns()),
                SessionState::Playing => warn!("Session ended while still playing"),
            }
        }
    }

    Ok(())
}

/// Generate the configured maze; CLI seed beats config seed beats a fresh random one.
fn build_maze(config: &Config, cli_seed: Option<u64>) -> Result<(Maze, u64)> {
    let seed = cli_seed
        .or(config.maze.seed)
        .unwrap_or_else(|| rand::thread_rng().gen::<u64>());
    info!(
        "Generating {}x{} maze with seed {}",
        config.maze.size, config.maze.size, seed
    );
    let maze = Maze::from_seed(config.maze.size, config.maze.wall_chance, seed)?;
    Ok((maze, seed))
}

/// Set up `env_logger`. When `owns_terminal` is set the game is about to take the
/// screen in raw mode, so log lines may only go to the configured file; with no usable
/// file, logging is switched off rather than drawn over the maze.
fn init_logging(config: &Option<Config>, verbosity: u8, owns_terminal: bool) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = match config.as_ref().map(|c| c.logging.open_file()) {
        Some(Ok(f)) => f,
        Some(Err(e)) => {
            // Printed before raw mode starts, so the player still sees it
            if owns_terminal {
                eprintln!("warning: {}; logging disabled for this run", e);
            } else {
                eprintln!("warning: {}; logging to stderr", e);
            }
            None
        }
        None => None,
    };

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Only echo log lines when stdout is redirected and nobody is drawing on it
        let echo = !owns_terminal && !atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if echo {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else if owns_terminal {
        builder.filter_level(log::LevelFilter::Off);
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
