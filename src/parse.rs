use std::fs;
use std::path::Path;

use crate::board::Board;

/// Parse a board from the puzzle text format: the dimension `n` as the
/// first whitespace-separated token, followed by n*n tile values in
/// row-major order. This is the format `Board`'s `Display` emits.
pub fn parse_board(text: &str) -> Result<Board, String> {
    let mut tokens = text.split_whitespace();

    let dim: usize = match tokens.next() {
        Some(tok) => tok
            .parse()
            .map_err(|_| format!("Invalid dimension token '{tok}'"))?,
        None => return Err("Empty puzzle text".to_string()),
    };
    if dim < 2 {
        return Err(format!("Puzzle dimension must be >= 2, got {dim}"));
    }

    let mut grid = Vec::with_capacity(dim);
    for r in 0..dim {
        let mut row = Vec::with_capacity(dim);
        for c in 0..dim {
            let tok = tokens
                .next()
                .ok_or_else(|| format!("Puzzle text ends early at row {r}, column {c}"))?;
            let value: u32 = tok
                .parse()
                .map_err(|_| format!("Invalid tile token '{tok}' at row {r}, column {c}"))?;
            row.push(value);
        }
        grid.push(row);
    }
    if let Some(extra) = tokens.next() {
        return Err(format!(
            "Trailing token '{extra}' after {dim}x{dim} grid"
        ));
    }

    Board::new(grid)
}

/// Load a board from a puzzle file on disk.
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read {}: {e}", path.as_ref().display()))?;
    parse_board(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_output() {
        let b = Board::new(vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]).expect("board");
        let reparsed = parse_board(&b.to_string()).expect("parse");
        assert_eq!(reparsed, b);
    }

    #[test]
    fn rejects_truncated_and_trailing_input() {
        assert!(parse_board("3 1 2 3 4").is_err());
        assert!(parse_board("2 1 2 3 0 9").is_err());
        assert!(parse_board("").is_err());
        assert!(parse_board("x 1 2 3 0").is_err());
    }

    #[test]
    fn surfaces_board_validation_errors() {
        // Square and complete, but not a permutation.
        assert!(parse_board("2 1 1 2 0").is_err());
    }
}
