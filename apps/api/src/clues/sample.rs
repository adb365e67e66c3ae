//! Bundled sample clue source.
//!
//! Serves premade word/clue pairs instead of calling the API. Wired in when
//! `USE_SAMPLE_CROSSWORD_DATA=true` — useful for frontend work and manual
//! testing without burning quota.

use async_trait::async_trait;
use serde::Deserialize;

use crate::clues::{normalized_clue_set, ClueSet, ClueSource, ClueSourceError};

/// Same wire shape as the LLM payload, parsed once per call.
#[derive(Debug, Deserialize)]
struct SampleData {
    clues: Vec<SampleItem>,
}

#[derive(Debug, Deserialize)]
struct SampleItem {
    word: String,
    clue: String,
}

const SAMPLE_CLUES: &str = r#"{
    "clues": [
        {"word": "ELEPHANT", "clue": "Largest land animal"},
        {"word": "GIRAFFE", "clue": "Tallest animal alive"},
        {"word": "PENGUIN", "clue": "Tuxedoed Antarctic bird"},
        {"word": "DOLPHIN", "clue": "Clicking marine mammal"},
        {"word": "KANGAROO", "clue": "Pouched Australian hopper"},
        {"word": "TIGER", "clue": "Striped jungle cat"},
        {"word": "EAGLE", "clue": "National bird of the USA"},
        {"word": "OTTER", "clue": "River swimmer that floats on its back"},
        {"word": "RHINO", "clue": "Horned heavyweight"},
        {"word": "GECKO", "clue": "Wall-climbing lizard"},
        {"word": "HERON", "clue": "Long-legged wading bird"},
        {"word": "LEMUR", "clue": "Wide-eyed Madagascar native"},
        {"word": "BISON", "clue": "Plains grazer on the nickel"},
        {"word": "COBRA", "clue": "Hooded venomous snake"},
        {"word": "PANDA", "clue": "Bamboo-eating bear"},
        {"word": "MOOSE", "clue": "Antlered giant of the north"},
        {"word": "SLOTH", "clue": "Slowest mammal in the trees"},
        {"word": "CAMEL", "clue": "Desert animal with humps"},
        {"word": "RAVEN", "clue": "Poe's talkative bird"},
        {"word": "SHARK", "clue": "Fish with a dorsal fin warning"}
    ]
}"#;

/// Clue source backed by the bundled data set above. The category is
/// ignored; `num_words` takes the first N entries in order.
pub struct SampleClueSource;

#[async_trait]
impl ClueSource for SampleClueSource {
    async fn fetch_clues(
        &self,
        _category: &str,
        num_words: usize,
    ) -> Result<ClueSet, ClueSourceError> {
        let data: SampleData = serde_json::from_str(SAMPLE_CLUES)
            .map_err(|e| ClueSourceError::MalformedPayload(e.to_string()))?;

        Ok(normalized_clue_set(
            data.clues
                .into_iter()
                .take(num_words)
                .map(|item| (item.word, item.clue)),
        ))
    }
}
