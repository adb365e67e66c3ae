//! Clue Assembler and Labeler — joins placement records with the clue
//! mapping and stamps clue numbers onto start cells.

use serde::Serialize;

use crate::clues::ClueSet;
use crate::errors::AppError;
use crate::puzzle::grid::{Direction, Grid};
use crate::puzzle::placement::PlacementRecord;

/// One entry of an across or down clue list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClueEntry {
    pub word: String,
    pub number: u32,
    pub clue: String,
}

/// Across and down clue lists in placement-record order (anchor first).
#[derive(Debug, Default)]
pub struct ClueLists {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

/// Joins placement records with the original clue mapping.
///
/// Words in the mapping but absent from the records are fine — they were
/// dropped. A record with no clue is the reverse and impossible for
/// well-formed input, so it fails loudly as [`AppError::MissingClue`].
pub fn assemble_clues(records: &[PlacementRecord], clues: &ClueSet) -> Result<ClueLists, AppError> {
    let mut lists = ClueLists::default();

    for record in records {
        let clue = clues
            .clue_for(&record.word)
            .ok_or_else(|| AppError::MissingClue(record.word.clone()))?;

        let entry = ClueEntry {
            word: record.word.clone(),
            number: record.clue_number,
            clue: clue.to_string(),
        };
        match record.direction {
            Direction::Across => lists.across.push(entry),
            Direction::Down => lists.down.push(entry),
        }
    }

    Ok(lists)
}

/// Stamps every record's clue number onto its start cell. A cell starting
/// both an across and a down word ends up carrying both numbers; the cell
/// itself renders them as one merged label.
pub fn apply_numbers(grid: &mut Grid, records: &[PlacementRecord]) {
    for record in records {
        grid.mark_start(record.row, record.col, record.direction, record.clue_number);
    }
}
