mod config;
mod input;
mod render;
mod runner;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use config::{FirstPlayerChoice, get_config_manager, get_default_config_path};

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Ask,
    Human,
    Ai,
    Random,
}

impl From<FirstArg> for FirstPlayerChoice {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Ask => FirstPlayerChoice::Ask,
            FirstArg::Human => FirstPlayerChoice::Human,
            FirstArg::Ai => FirstPlayerChoice::Ai,
            FirstArg::Random => FirstPlayerChoice::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play Tic-Tac-Toe against an optimal minimax AI")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Who moves first (and plays X)
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Pause before each AI move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write log lines to stderr
    #[arg(long)]
    verbose: bool,

    /// Tag log lines with a `Client` prefix unless the config sets one
    #[arg(long)]
    use_log_prefix: bool,

    /// Store the effective settings back into the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(get_default_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;

    if let Some(first) = args.first {
        config.first_player = first.into();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.ai_delay_ms = delay_ms;
    }
    if args.verbose {
        config.logging.enabled = true;
    }
    if args.use_log_prefix && config.logging.prefix.is_none() {
        config.logging.prefix = Some("Client".to_string());
    }
    config.validate()?;

    logger::init_logger(config.logging.prefix.clone(), config.logging.enabled);
    log!("Using config file {}", config_path);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", config_path);
    }

    let mut rng = SessionRng::from_random();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let status = runner::run_game(&config, &mut rng, stdin, &mut stdout).await?;
    log!("Game finished with {:?}", status);

    Ok(())
}
