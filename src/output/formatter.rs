use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::config::ColorChoice;
use crate::game::{FrameKind, FrameScore, Game, ALL_PINS, FRAMES};

/// Column width of one frame on the scorecard (fits "X X X" with padding)
const CELL_WIDTH: usize = 7;

/// Resolve a color setting against stdout (auto = only on a TTY)
pub fn should_use_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    }
}

/// Format a frame's throws in scorecard notation
/// "X" strike, "/" spare, "-" gutter, e.g. "X", "7 /", "- 4", "X 8 /"
pub fn format_marks(frame: &FrameScore) -> String {
    let mut marks = Vec::with_capacity(frame.throws.len());
    // first throw of the pair being rolled, reset after a strike or spare
    let mut pair_first: Option<u32> = None;

    for &pins in &frame.throws {
        let mark = match pair_first {
            None if pins == ALL_PINS => "X".to_string(),
            Some(first) if first + pins == ALL_PINS => "/".to_string(),
            _ if pins == 0 => "-".to_string(),
            _ => pins.to_string(),
        };
        pair_first = match pair_first {
            None if pins != ALL_PINS => Some(pins),
            _ => None,
        };
        marks.push(mark);
    }

    marks.join(" ")
}

/// Format a running total, blank while the frame is unresolved
pub fn format_score(total: Option<u32>) -> String {
    total.map(|t| t.to_string()).unwrap_or_default()
}

/// Format a game as a three-row scorecard: frame numbers, marks, running totals
/// Frames not yet started are left blank.
pub fn format_scorecard(game: &Game, use_colors: bool) -> String {
    let frames = game.frames();

    let mut header = String::from("|");
    let mut marks = String::from("|");
    let mut totals = String::from("|");

    for number in 1..=FRAMES {
        let frame = frames.iter().find(|f| f.number == number);

        // Pad before coloring so escape codes don't throw off alignment
        let number_cell = format!("{:^width$}", number, width = CELL_WIDTH);
        let marks_cell = format!(
            "{:^width$}",
            frame.map(format_marks).unwrap_or_default(),
            width = CELL_WIDTH
        );
        let total_cell = format!(
            "{:>width$} ",
            format_score(frame.and_then(|f| f.total)),
            width = CELL_WIDTH - 1
        );

        if use_colors {
            header.push_str(&number_cell.dimmed().to_string());
            let colored = match frame.map(|f| f.kind) {
                Some(FrameKind::Strike) => marks_cell.red().bold().to_string(),
                Some(FrameKind::Spare) => marks_cell.yellow().to_string(),
                _ => marks_cell,
            };
            marks.push_str(&colored);
            totals.push_str(&total_cell.cyan().to_string());
        } else {
            header.push_str(&number_cell);
            marks.push_str(&marks_cell);
            totals.push_str(&total_cell);
        }

        header.push('|');
        marks.push('|');
        totals.push('|');
    }

    [header, marks, totals].join("\n")
}

/// Format the frame breakdown as pretty-printed JSON for scripting
pub fn format_json(game: &Game) -> Result<String> {
    serde_json::to_string_pretty(&game.frames()).context("Failed to serialize frame breakdown")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(throws: &[u32]) -> Game {
        let mut game = Game::new();
        for &pins in throws {
            game.add(pins).unwrap();
        }
        game
    }

    fn frame(throws: Vec<u32>) -> FrameScore {
        FrameScore {
            number: 1,
            throws,
            kind: FrameKind::Open,
            total: None,
        }
    }

    #[test]
    fn test_format_marks_strike() {
        assert_eq!(format_marks(&frame(vec![10])), "X");
    }

    #[test]
    fn test_format_marks_spare() {
        assert_eq!(format_marks(&frame(vec![7, 3])), "7 /");
        assert_eq!(format_marks(&frame(vec![0, 10])), "- /");
    }

    #[test]
    fn test_format_marks_open_and_gutter() {
        assert_eq!(format_marks(&frame(vec![0, 4])), "- 4");
        assert_eq!(format_marks(&frame(vec![0, 0])), "- -");
    }

    #[test]
    fn test_format_marks_tenth_frame() {
        assert_eq!(format_marks(&frame(vec![10, 10, 10])), "X X X");
        assert_eq!(format_marks(&frame(vec![10, 8, 2])), "X 8 /");
        assert_eq!(format_marks(&frame(vec![2, 8, 10])), "2 / X");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(133)), "133");
        assert_eq!(format_score(None), "");
    }

    #[test]
    fn test_format_scorecard_plain() {
        let card = format_scorecard(&game_with(&[10, 3, 7, 4, 2]), false);
        let rows: Vec<&str> = card.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("10"));
        assert!(rows[1].contains("X"));
        assert!(rows[1].contains("3 /"));
        assert!(rows[2].contains("20"));
        assert!(rows[2].contains("34"));
        assert!(rows[2].contains("40"));
        assert!(!card.contains('\u{1b}'));
    }

    #[test]
    fn test_format_scorecard_rows_align() {
        let card = format_scorecard(&game_with(&[10, 10, 10]), false);
        let widths: Vec<usize> = card.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(widths[0], 1 + (CELL_WIDTH + 1) * FRAMES as usize);
    }

    #[test]
    fn test_format_scorecard_colors() {
        let card = format_scorecard(&game_with(&[10]), true);
        assert!(card.contains('\u{1b}'));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&game_with(&[3, 7, 4])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "spare");
        assert_eq!(value[0]["total"], 14);
        assert_eq!(value[1]["kind"], "in_progress");
        assert!(value[1]["total"].is_null());
    }

    #[test]
    fn test_should_use_colors_explicit() {
        assert!(should_use_colors(ColorChoice::Always));
        assert!(!should_use_colors(ColorChoice::Never));
    }

    #[test]
    fn test_should_use_colors_auto_follows_stdout() {
        assert_eq!(
            should_use_colors(ColorChoice::Auto),
            std::io::stdout().is_terminal()
        );
    }
}
