use tictactoe_common::games::tictactoe::{BOARD_SIZE, row_col_to_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    Cell(usize),
    Quit,
}

/// Reads a `row, col` pair such as `1,2`, `(1, 2)` or `12`. Spaces, commas and
/// parentheses are ignored.
pub fn parse_move(line: &str) -> Result<HumanInput, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(HumanInput::Quit);
    }

    let digits: Vec<char> = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | ',' | '(' | ')'))
        .collect();

    let [row, col] = digits[..] else {
        return Err(format!(
            "Expected two coordinates between 0 and {}, got '{}'.",
            BOARD_SIZE - 1,
            trimmed
        ));
    };

    let to_coordinate = |c: char| {
        c.to_digit(10)
            .map(|d| d as usize)
            .ok_or_else(|| format!("'{}' is not a coordinate.", c))
    };
    let (row, col) = (to_coordinate(row)?, to_coordinate(col)?);

    row_col_to_index(row, col)
        .map(HumanInput::Cell)
        .ok_or_else(|| format!("Coordinates must be between 0 and {}.", BOARD_SIZE - 1))
}

/// Anything but `n` means yes.
pub fn parse_play_first(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}
