use crate::games::MoveRng;
use super::board::Board;
use super::game_state::GameState;
use super::types::{CENTER, Player};
use super::win_detector::is_win_for;

pub struct BotInput {
    pub board: Board,
    pub bot_player: Player,
    pub opponent: Player,
}

impl BotInput {
    pub fn new(board: Board, bot_player: Player) -> Self {
        Self {
            board,
            bot_player,
            opponent: bot_player.opponent(),
        }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self::new(*state.board(), state.current_player())
    }
}

/// Picks the opponent's cell: win now, else block, else centre, else random.
///
/// Looks a single ply ahead only. Returns `None` when the board is full.
pub fn calculate_move(input: &BotInput, rng: &mut dyn MoveRng) -> Option<usize> {
    let available_moves = input.board.empty_indices();
    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(&input.board, input.bot_player, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, input.opponent, &available_moves) {
        return Some(index);
    }

    if input.board.is_empty(CENTER) {
        return Some(CENTER);
    }

    Some(available_moves[rng.pick(available_moves.len())])
}

fn find_winning_move(board: &Board, player: Player, moves: &[usize]) -> Option<usize> {
    moves.iter().copied().find(|&index| {
        board
            .apply(index, player)
            .is_ok_and(|simulated| is_win_for(&simulated, player))
    })
}
