use std::io::{self, BufRead, Write};

use common::{Board, Difficulty, GameError, Mark, Outcome, Session};

pub fn render_board(board: &Board) -> String {
    let winning_cells = board.winning_line().map(|line| line.cells);
    let mut out = String::from("    0 1 2\n");
    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!("{}  ", row));
        for (col, cell) in cells.iter().enumerate() {
            let highlighted = winning_cells
                .is_some_and(|line| line.iter().any(|pos| pos.row == row && pos.col == col));
            let c = cell.to_char();
            if highlighted {
                out.push_str(&format!("[{}]", c));
            } else {
                out.push_str(&format!(" {} ", c));
            }
        }
        out.push('\n');
    }
    out
}

pub fn result_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Mark::X) => "Player wins!",
        Outcome::Win(Mark::O) => "Computer wins!",
        Outcome::Draw => "It's a draw!",
        Outcome::InProgress => "Game abandoned.",
    }
}

/// Accepts `row col` or `row,col`, both 0-based.
pub fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

pub fn parse_difficulty_choice(line: &str) -> Option<Difficulty> {
    match line.trim() {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Impossible),
        other => other.parse().ok(),
    }
}

/// Asks for a difficulty until a valid one is entered. `None` on end of input.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Difficulty>> {
    loop {
        writeln!(output, "Select Difficulty")?;
        for (idx, difficulty) in Difficulty::ALL.iter().enumerate() {
            writeln!(output, "  {}) {}", idx + 1, difficulty)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_difficulty_choice(&line) {
            Some(difficulty) => return Ok(Some(difficulty)),
            None => writeln!(output, "Unknown choice '{}'.", line.trim())?,
        }
    }
}

/// Drives one session from text input until it finishes, the player quits
/// or input runs out. Returns the session's outcome at that point.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> io::Result<Outcome> {
    writeln!(
        output,
        "You are X, the computer is O ({}). Enter moves as 'row col', 'q' to quit.",
        session.difficulty()
    )?;

    while !session.is_finished() {
        write!(output, "\n{}> ", render_board(&session.current_board()))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }

        let Some((row, col)) = parse_move(line) else {
            writeln!(output, "Could not read '{}', expected 'row col'.", line)?;
            continue;
        };

        match session.human_move(row, col) {
            Ok(_) => {
                if let Some(pos) = session.last_computer_move()
                    && !session.is_finished()
                {
                    writeln!(output, "Computer played {}.", pos)?;
                }
            }
            Err(GameError::InvalidMove { .. }) => {
                writeln!(output, "Move not applied: ({}, {}) is not free.", row, col)?;
            }
            Err(e) => {
                writeln!(output, "Move not applied: {}.", e)?;
            }
        }
    }

    let outcome = session.outcome();
    writeln!(output, "\n{}{}", render_board(&session.current_board()), result_text(outcome))?;
    Ok(outcome)
}
