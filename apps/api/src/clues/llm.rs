//! Gemini-backed clue source.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::clues::prompts::{build_clue_prompt, CLUE_SYSTEM};
use crate::clues::{normalized_clue_set, ClueSet, ClueSource, ClueSourceError};
use crate::llm_client::LlmClient;

/// Wire shape of the LLM response: `{"clues": [{"word", "clue"}, ...]}`.
#[derive(Debug, Deserialize)]
struct WordList {
    clues: Vec<ClueItem>,
}

#[derive(Debug, Deserialize)]
struct ClueItem {
    word: String,
    clue: String,
}

/// Clue source that asks the Gemini API for word/clue pairs.
pub struct LlmClueSource {
    llm: LlmClient,
}

impl LlmClueSource {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ClueSource for LlmClueSource {
    async fn fetch_clues(
        &self,
        category: &str,
        num_words: usize,
    ) -> Result<ClueSet, ClueSourceError> {
        info!("Requesting {num_words} clues for category {category:?} from {}", self.llm.model());

        let prompt = build_clue_prompt(category, num_words);
        let word_list: WordList = self.llm.call_json(&prompt, CLUE_SYSTEM).await?;

        let set = normalized_clue_set(
            word_list
                .clues
                .into_iter()
                .map(|item| (item.word, item.clue)),
        );

        if set.is_empty() {
            warn!("LLM payload contained no usable words");
        } else {
            info!("Clue source returned {} usable words", set.len());
        }
        Ok(set)
    }
}
