//! Placement Engine — seeds the board and searches legal intersections.
//!
//! # Placement rules
//! - The longest word is anchored first, across, starting at the board
//!   center, and holds clue number 1.
//! - Every other word draws a random orientation, then scans its letters in
//!   order against the board row by row; within a row only the first cell
//!   holding the letter is a candidate. The first candidate that passes the
//!   legality check wins outright — no search for a better fit.
//! - A word with no legal candidate is dropped: no record, no board change.
//! - The clue counter ticks for every attempted word, so dropped words leave
//!   gaps in the final numbering. Numbers identify assignment order, not
//!   reading order.
//!
//! # Legality
//! A candidate passes only if the whole span fits on the board, the cells
//! just before and after the span are empty or off-board, the intersection
//! letter matches, and every other span cell is empty with empty
//! perpendicular neighbors (so the new word cannot run alongside an existing
//! one without actually crossing it).

use rand::Rng;
use tracing::debug;

use crate::clues::ClueSet;
use crate::puzzle::grid::{Cell, Direction, Grid, GRID_PADDING};

/// A successfully placed word. The full set of records for a run is the
/// authoritative list of words that made it into the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub word: String,
    pub direction: Direction,
    /// Row of the word's first letter.
    pub row: usize,
    /// Column of the word's first letter.
    pub col: usize,
    pub clue_number: u32,
}

/// Output of [`seed_grid`]: the board with the anchor written, the anchor's
/// record, and the words still to place in mapping order.
#[derive(Debug)]
pub struct SeededGrid {
    pub grid: Grid,
    pub anchor: PlacementRecord,
    pub remaining: Vec<String>,
}

/// Builds the initial board and anchors the longest word across its center.
/// Returns `None` when the clue set is empty — there is nothing to seed.
pub fn seed_grid(clues: &ClueSet) -> Option<SeededGrid> {
    let anchor_word = clues.longest_word()?.to_string();
    let dimension = anchor_word.chars().count() + GRID_PADDING;
    let mid = dimension / 2;

    let mut grid = Grid::square(dimension);
    for (k, ch) in anchor_word.chars().enumerate() {
        grid.set_letter(mid, mid + k, ch);
    }
    // The head cell provisionally carries clue number 1; the numbering pass
    // re-derives it from the record.
    grid.cell_mut(mid, mid).across_number = Some(1);

    let remaining = clues
        .words()
        .filter(|w| *w != anchor_word)
        .map(str::to_string)
        .collect();

    Some(SeededGrid {
        grid,
        anchor: PlacementRecord {
            word: anchor_word,
            direction: Direction::Across,
            row: mid,
            col: mid,
            clue_number: 1,
        },
        remaining,
    })
}

/// Places each word in order, drawing a random orientation per word.
/// Returns the records of the words that found a legal spot.
pub fn place_words<R: Rng>(grid: &mut Grid, words: &[String], rng: &mut R) -> Vec<PlacementRecord> {
    let mut records = Vec::new();
    let mut clue_number = 1u32; // the anchor holds 1

    for word in words {
        clue_number += 1;
        let direction = random_direction(rng);
        match try_place(grid, word, direction, clue_number) {
            Some(record) => records.push(record),
            None => debug!("No legal spot for {word:?} going {direction:?}; dropped"),
        }
    }

    records
}

/// Attempts to place one word in the given direction. On success the letters
/// are written to the board and a record returned; on failure the board is
/// untouched.
pub fn try_place(
    grid: &mut Grid,
    word: &str,
    direction: Direction,
    clue_number: u32,
) -> Option<PlacementRecord> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return None;
    }

    let (row, col) = find_anchor(grid, &chars, direction)?;
    write_word(grid, &chars, row, col, direction);

    Some(PlacementRecord {
        word: word.to_string(),
        direction,
        row,
        col,
        clue_number,
    })
}

/// Scans for the first legal intersection: letters in word order, rows top
/// to bottom, and within a row only the first cell holding the letter.
/// Returns the anchor coordinates of the word's first letter.
fn find_anchor(grid: &Grid, chars: &[char], direction: Direction) -> Option<(usize, usize)> {
    for (letter_index, &letter) in chars.iter().enumerate() {
        for row in 0..grid.rows() {
            let Some(col) = (0..grid.cols()).find(|&c| grid.letter(row, c) == Some(letter))
            else {
                continue;
            };
            if can_place(grid, chars, row, col, direction, letter_index) {
                return Some(match direction {
                    Direction::Across => (row, col - letter_index),
                    Direction::Down => (row - letter_index, col),
                });
            }
        }
    }
    None
}

/// The placement legality rule. `(row, col)` is the candidate intersection
/// cell aligning with `chars[letter_index]`. A single violation rejects the
/// candidate outright.
fn can_place(
    grid: &Grid,
    chars: &[char],
    row: usize,
    col: usize,
    direction: Direction,
    letter_index: usize,
) -> bool {
    // The candidate cell must hold the intersection letter or be empty.
    if let Some(existing) = grid.letter(row, col) {
        if existing != chars[letter_index] {
            return false;
        }
    }

    // Work in (along, cross) coordinates: `along` runs with the word's axis,
    // `cross` is the fixed perpendicular coordinate.
    let (along_hit, cross) = match direction {
        Direction::Across => (col, row),
        Direction::Down => (row, col),
    };
    let (along_limit, cross_limit) = match direction {
        Direction::Across => (grid.cols(), grid.rows()),
        Direction::Down => (grid.rows(), grid.cols()),
    };

    // The whole span must fit on the board.
    let Some(start) = along_hit.checked_sub(letter_index) else {
        return false;
    };
    let end = start + chars.len() - 1;
    if end >= along_limit {
        return false;
    }

    // The cells just before and after the span must be empty or off-board,
    // otherwise the word would concatenate with a neighbor.
    if start > 0 && !cell_at(grid, direction, start - 1, cross).is_empty() {
        return false;
    }
    if end + 1 < along_limit && !cell_at(grid, direction, end + 1, cross).is_empty() {
        return false;
    }

    for (k, &ch) in chars.iter().enumerate() {
        let along = start + k;
        if along == along_hit {
            // Intersection cell: the existing letter must match.
            if let Some(existing) = cell_at(grid, direction, along, cross).letter {
                if existing != ch {
                    return false;
                }
            }
        } else {
            // Every other span cell must be empty, with empty perpendicular
            // neighbors — no running parallel to an existing word.
            if !cell_at(grid, direction, along, cross).is_empty() {
                return false;
            }
            if cross > 0 && !cell_at(grid, direction, along, cross - 1).is_empty() {
                return false;
            }
            if cross + 1 < cross_limit && !cell_at(grid, direction, along, cross + 1).is_empty() {
                return false;
            }
        }
    }

    true
}

/// Maps (along, cross) coordinates back to a board cell for `direction`.
fn cell_at(grid: &Grid, direction: Direction, along: usize, cross: usize) -> &Cell {
    let (row, col) = match direction {
        Direction::Across => (cross, along),
        Direction::Down => (along, cross),
    };
    grid.cell(row, col)
}

/// Writes a word starting at its anchor cell. Intersection cells are
/// rewritten with the identical letter, which leaves them unchanged.
fn write_word(grid: &mut Grid, chars: &[char], row: usize, col: usize, direction: Direction) {
    for (k, &ch) in chars.iter().enumerate() {
        match direction {
            Direction::Across => grid.set_letter(row, col + k, ch),
            Direction::Down => grid.set_letter(row + k, col, ch),
        }
    }
}

fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    if rng.gen_bool(0.5) {
        Direction::Across
    } else {
        Direction::Down
    }
}
