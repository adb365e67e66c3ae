//! Puzzle Generation — orchestrates the full pipeline.
//!
//! Flow: fetch clues → seed grid with the anchor word → place remaining
//! words → assemble across/down clue lists → stamp numbers → trim.
//!
//! Generation is best-effort by design: words that find no legal spot are
//! dropped silently, and the run succeeds as long as the anchor was seeded.

use rand::Rng;
use tracing::info;

use crate::clues::{ClueSet, ClueSource};
use crate::errors::AppError;
use crate::puzzle::assembler::{apply_numbers, assemble_clues, ClueEntry};
use crate::puzzle::grid::Grid;
use crate::puzzle::placement::{place_words, seed_grid, SeededGrid};

/// A finished puzzle: the trimmed board plus the ordered clue lists.
#[derive(Debug)]
pub struct GeneratedPuzzle {
    pub grid: Grid,
    pub across_clues: Vec<ClueEntry>,
    pub down_clues: Vec<ClueEntry>,
}

/// Fetches clues from the injected source and builds a puzzle from them.
/// The single clue-source call is not retried here; failures surface as
/// [`AppError::ClueSource`].
pub async fn generate_puzzle(
    source: &dyn ClueSource,
    category: &str,
    num_words: usize,
) -> Result<GeneratedPuzzle, AppError> {
    let clues = source.fetch_clues(category, num_words).await?;
    build_puzzle(&clues, &mut rand::thread_rng())
}

/// Synchronous build over an already-fetched clue set. The random source is
/// a parameter so tests can pin orientation draws.
pub fn build_puzzle<R: Rng>(clues: &ClueSet, rng: &mut R) -> Result<GeneratedPuzzle, AppError> {
    let SeededGrid {
        mut grid,
        anchor,
        remaining,
    } = seed_grid(clues).ok_or(AppError::NoWordsAvailable)?;

    let mut records = vec![anchor];
    records.extend(place_words(&mut grid, &remaining, rng));

    info!("Placed {}/{} words", records.len(), clues.len());

    let lists = assemble_clues(&records, clues)?;
    apply_numbers(&mut grid, &records);
    let grid = grid.trimmed();

    Ok(GeneratedPuzzle {
        grid,
        across_clues: lists.across,
        down_clues: lists.down,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::mock::StepRng;

    use crate::clues::ClueSourceError;
    use crate::llm_client::LlmError;

    fn clue_set(pairs: &[(&str, &str)]) -> ClueSet {
        pairs
            .iter()
            .map(|(w, c)| (w.to_string(), c.to_string()))
            .collect()
    }

    fn always_down() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Counts the trimmed grid's start cells carrying `number`.
    fn cells_anchoring(grid: &Grid, number: u32) -> usize {
        grid.iter_rows()
            .flatten()
            .filter(|cell| {
                cell.across_number == Some(number) || cell.down_number == Some(number)
            })
            .count()
    }

    // ── scenarios ───────────────────────────────────────────────────────────

    #[test]
    fn test_cat_at_crossing() {
        let clues = clue_set(&[("CAT", "Feline pet"), ("AT", "Location preposition")]);
        let puzzle = build_puzzle(&clues, &mut always_down()).unwrap();

        // CAT across the top, AT hanging down from its A.
        assert_eq!(puzzle.grid.rows(), 2);
        assert_eq!(puzzle.grid.cols(), 3);
        assert_eq!(puzzle.grid.letter(0, 0), Some('C'));
        assert_eq!(puzzle.grid.letter(0, 1), Some('A'));
        assert_eq!(puzzle.grid.letter(0, 2), Some('T'));
        assert_eq!(puzzle.grid.letter(1, 1), Some('T'));
        assert!(puzzle.grid.cell(1, 0).is_empty());
        assert!(puzzle.grid.cell(1, 2).is_empty());

        assert_eq!(puzzle.across_clues.len(), 1);
        assert_eq!(puzzle.across_clues[0].word, "CAT");
        assert_eq!(puzzle.across_clues[0].number, 1);
        assert_eq!(puzzle.down_clues.len(), 1);
        assert_eq!(puzzle.down_clues[0].word, "AT");
        assert_eq!(puzzle.down_clues[0].number, 2);

        assert_eq!(puzzle.grid.cell(0, 0).label(), Some("1".to_string()));
        assert_eq!(puzzle.grid.cell(0, 1).label(), Some("2".to_string()));
    }

    #[test]
    fn test_single_word_puzzle() {
        let clues = clue_set(&[("ZEBRA", "Striped animal")]);
        let puzzle = build_puzzle(&clues, &mut always_down()).unwrap();

        assert_eq!(puzzle.grid.rows(), 1);
        assert_eq!(puzzle.grid.cols(), 5);
        let letters: Vec<Option<char>> = (0..5).map(|c| puzzle.grid.letter(0, c)).collect();
        assert_eq!(
            letters,
            "ZEBRA".chars().map(Some).collect::<Vec<_>>()
        );

        assert_eq!(puzzle.across_clues.len(), 1);
        assert!(puzzle.down_clues.is_empty());
    }

    #[test]
    fn test_disjoint_word_is_dropped_from_output() {
        let clues = clue_set(&[("SKY", "Up above"), ("RUN", "Jog fast")]);
        let puzzle = build_puzzle(&clues, &mut always_down()).unwrap();

        assert_eq!(puzzle.grid.rows(), 1);
        assert_eq!(puzzle.grid.cols(), 3);
        assert_eq!(puzzle.across_clues.len(), 1);
        assert_eq!(puzzle.across_clues[0].word, "SKY");
        assert!(puzzle.down_clues.is_empty());
    }

    #[test]
    fn test_empty_clue_set_is_no_words_available() {
        let err = build_puzzle(&ClueSet::new(), &mut always_down()).unwrap_err();
        assert!(matches!(err, AppError::NoWordsAvailable));
    }

    // ── invariants ──────────────────────────────────────────────────────────

    #[test]
    fn test_result_grid_is_already_trimmed() {
        let clues = clue_set(&[
            ("PLANET", "Orbits a star"),
            ("NET", "Goal mesh"),
            ("TEN", "One more than nine"),
        ]);
        let puzzle = build_puzzle(&clues, &mut always_down()).unwrap();

        assert_eq!(puzzle.grid.trimmed(), puzzle.grid);
    }

    #[test]
    fn test_every_clue_number_anchors_exactly_one_cell() {
        let clues = clue_set(&[
            ("PLANET", "Orbits a star"),
            ("NET", "Goal mesh"),
            ("TEN", "One more than nine"),
        ]);
        let puzzle = build_puzzle(&clues, &mut always_down()).unwrap();

        for entry in puzzle.across_clues.iter().chain(&puzzle.down_clues) {
            assert_eq!(
                cells_anchoring(&puzzle.grid, entry.number),
                1,
                "number {} should anchor exactly one cell",
                entry.number
            );
        }
    }

    #[test]
    fn test_anchor_always_first_and_numbered_one() {
        let clues = clue_set(&[
            ("AT", "Location preposition"),
            ("STRIPE", "Zebra feature"),
            ("CAT", "Feline pet"),
        ]);
        let puzzle = build_puzzle(&clues, &mut always_down()).unwrap();

        // STRIPE is the longest word, so it leads the across list with 1
        // whatever happened to the others.
        assert_eq!(puzzle.across_clues[0].word, "STRIPE");
        assert_eq!(puzzle.across_clues[0].number, 1);
    }

    // ── clue source wiring ──────────────────────────────────────────────────

    struct FixtureSource(Vec<(String, String)>);

    #[async_trait]
    impl ClueSource for FixtureSource {
        async fn fetch_clues(
            &self,
            _category: &str,
            _num_words: usize,
        ) -> Result<ClueSet, ClueSourceError> {
            Ok(self.0.clone().into_iter().collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ClueSource for FailingSource {
        async fn fetch_clues(
            &self,
            _category: &str,
            _num_words: usize,
        ) -> Result<ClueSet, ClueSourceError> {
            Err(ClueSourceError::Llm(LlmError::EmptyContent))
        }
    }

    #[tokio::test]
    async fn test_generate_puzzle_from_fixture_source() {
        let source = FixtureSource(vec![
            ("CAT".to_string(), "Feline pet".to_string()),
            ("AT".to_string(), "Location preposition".to_string()),
        ]);

        let puzzle = generate_puzzle(&source, "pets", 2).await.unwrap();
        assert_eq!(puzzle.across_clues[0].word, "CAT");
        assert!(!puzzle.grid.iter_rows().flatten().all(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_generate_puzzle_wraps_source_failure() {
        let err = generate_puzzle(&FailingSource, "pets", 5).await.unwrap_err();
        assert!(matches!(err, AppError::ClueSource(_)));
    }

    #[tokio::test]
    async fn test_generate_puzzle_empty_source_is_no_words() {
        let source = FixtureSource(Vec::new());
        let err = generate_puzzle(&source, "pets", 5).await.unwrap_err();
        assert!(matches!(err, AppError::NoWordsAvailable));
    }
}
