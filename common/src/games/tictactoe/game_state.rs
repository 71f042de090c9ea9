use super::board::Board;
use super::types::{IllegalMove, Mode, Outcome, Player};
use super::win_detector::evaluate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    mode: Mode,
    outcome: Outcome,
}

impl GameState {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            mode,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn current_player(&self) -> Player {
        self.board.next_player()
    }

    /// Validates and applies one move. On error the state is unchanged.
    pub fn place_mark(&mut self, player: Player, index: usize) -> Result<Outcome, IllegalMove> {
        if !self.outcome.is_in_progress() {
            return Err(IllegalMove::GameOver);
        }

        if player != self.current_player() {
            return Err(IllegalMove::NotYourTurn(player));
        }

        self.board = self.board.apply(index, player)?;
        self.outcome = evaluate(&self.board);
        Ok(self.outcome)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    pub fn is_opponent_turn(&self) -> bool {
        self.outcome.is_in_progress() && self.mode.is_opponent(self.current_player())
    }

    pub fn snapshot(&self, opponent_pending: bool) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player(),
            mode: self.mode,
            outcome: self.outcome,
            opponent_pending,
        }
    }
}

/// Read-only view handed to hosts and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub mode: Mode,
    pub outcome: Outcome,
    pub opponent_pending: bool,
}

impl GameSnapshot {
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.outcome
            .winning_line()
            .is_some_and(|line| line.contains(&index))
    }

    /// Whether a human may click this cell right now.
    pub fn is_cell_playable(&self, index: usize) -> bool {
        self.board.is_empty(index)
            && self.outcome.is_in_progress()
            && !self.mode.is_opponent(self.current_player)
    }

    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Draw => "It's a Draw! Play Again?".to_string(),
            Outcome::Win { player, .. } => format!("{} Wins! Play Again", player),
            Outcome::InProgress if self.mode.is_opponent(self.current_player) => {
                "AI is thinking...".to_string()
            }
            Outcome::InProgress => "Make your move".to_string(),
        }
    }
}
