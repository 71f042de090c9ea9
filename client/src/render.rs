use common::games::tictactoe::{GameSnapshot, Player};

fn cell_text(snapshot: &GameSnapshot, index: usize) -> String {
    let symbol = match snapshot.board.cell(index).and_then(|cell| cell.owner()) {
        Some(player) => player.symbol(),
        None => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
    };

    if snapshot.is_winning_cell(index) {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

fn player_badge(snapshot: &GameSnapshot, player: Player) -> String {
    let label = snapshot.mode.player_label(player);
    let active = snapshot.outcome.is_in_progress() && snapshot.current_player == player;
    if active {
        format!("> {} {} <", player.symbol(), label)
    } else {
        format!("  {} {}  ", player.symbol(), label)
    }
}

pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mut out = format!(
        "{}  vs  {}\n\n",
        player_badge(snapshot, Player::A),
        player_badge(snapshot, Player::B)
    );

    for row in 0..3 {
        let cells: Vec<String> = (0..3).map(|col| cell_text(snapshot, row * 3 + col)).collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&snapshot.status_line());
    out
}
