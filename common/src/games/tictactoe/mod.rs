mod board;
mod bot_controller;
mod controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_move};
pub use controller::GameController;
pub use game_state::{GameSnapshot, GameState};
pub use settings::{DEFAULT_OPPONENT_DELAY_MS, GameSettings, MAX_OPPONENT_DELAY_MS};
pub use types::{CELL_COUNT, CENTER, Cell, IllegalMove, Mode, Outcome, Player};
pub use win_detector::{LINES, evaluate, is_win_for};
