mod command;
mod config;
mod render;

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::ChannelBroadcaster;
use common::games::tictactoe::{GameController, GameSettings, GameSnapshot, Mode, Player};
use common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{ClientCommand, HELP, parse_command};
use config::{Config, get_config_manager};
use render::render_snapshot;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => Mode::SinglePlayer,
            ModeArg::Multi => Mode::MultiPlayer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long)]
    opponent_delay_ms: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Config file; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, mut settings: GameSettings) -> GameSettings {
        if let Some(mode) = self.mode {
            settings.mode = mode.into();
        }
        if let Some(delay) = self.opponent_delay_ms {
            settings.opponent_delay_ms = delay;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, config_error) = match get_config_manager(args.config.as_deref()).get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(e) = config_error {
        log!("Failed to load config, using defaults: {}", e);
    }

    let settings = args.apply_to(config.game);
    settings.validate()?;

    let (broadcaster, mut snapshots) = ChannelBroadcaster::channel();
    let controller = GameController::with_tokio(&settings, Arc::new(broadcaster));

    println!("{}\n", HELP);
    println!("{}", render_snapshot(&controller.get_state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(snapshot) = snapshots.recv() => {
                println!("\n{}", render_snapshot(&snapshot));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(ClientCommand::Quit) => break,
                    Ok(command) => handle_command(&controller, command),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    log!("Client shut down");
    Ok(())
}

/// The terminal always speaks for the human; in single player that is A.
fn acting_player(snapshot: &GameSnapshot) -> Player {
    match snapshot.mode {
        Mode::SinglePlayer => Player::A,
        Mode::MultiPlayer => snapshot.current_player,
    }
}

fn handle_command(controller: &GameController, command: ClientCommand) {
    match command {
        ClientCommand::PlaceMark(index) => {
            let player = acting_player(&controller.get_state());
            if let Err(e) = controller.request_move(index, player) {
                println!("Move rejected: {}", e);
            }
        }
        ClientCommand::Reset => {
            controller.reset();
        }
        ClientCommand::SwitchMode(mode) => {
            controller.switch_mode(mode);
        }
        ClientCommand::Help => println!("{}", HELP),
        ClientCommand::Quit => {}
    }
}
