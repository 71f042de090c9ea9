use common::games::tictactoe::{CELL_COUNT, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    PlaceMark(usize),
    Reset,
    SwitchMode(Mode),
    Help,
    Quit,
}

pub const HELP: &str = "Commands: 1-9 place a mark, reset, mode single, mode multi, help, quit";

/// Parses one input line. Cells are typed 1-based, as printed on the board.
pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(HELP.to_string());
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "reset" | "r" => ClientCommand::Reset,
        "help" | "h" | "?" => ClientCommand::Help,
        "quit" | "q" | "exit" => ClientCommand::Quit,
        "mode" => match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("single") => ClientCommand::SwitchMode(Mode::SinglePlayer),
            Some("multi") => ClientCommand::SwitchMode(Mode::MultiPlayer),
            _ => return Err("Usage: mode single | mode multi".to_string()),
        },
        cell => match cell.parse::<usize>() {
            Ok(n) if (1..=CELL_COUNT).contains(&n) => ClientCommand::PlaceMark(n - 1),
            _ => return Err(format!("Unknown command '{}'. {}", cell, HELP)),
        },
    };

    if words.next().is_some() {
        return Err(format!("Unexpected trailing input. {}", HELP));
    }
    Ok(command)
}
