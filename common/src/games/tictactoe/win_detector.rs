use super::board::Board;
use super::types::{Outcome, Player};

/// Rows, then columns, then diagonals. The first match is the reported line.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = find_winning_line(board) {
        return Outcome::Win { player, line };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

pub fn is_win_for(board: &Board, player: Player) -> bool {
    evaluate(board).winner() == Some(player)
}

fn find_winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let owner = cells[a].owner()?;
        (cells[a] == cells[b] && cells[a] == cells[c]).then_some((owner, line))
    })
}
