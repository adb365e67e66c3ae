// Prompt constants for the LLM-backed clue source.

/// System prompt for clue generation. The JSON shape is pinned here because
/// the response is deserialized directly into `WordList`.
pub const CLUE_SYSTEM: &str = "You are a crossword generator. \
    You MUST respond with valid JSON only, in the exact format \
    {\"clues\": [{\"word\": \"...\", \"clue\": \"...\"}]}. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// User prompt template. Placeholders: `{num_words}`, `{category}`.
pub const CLUE_PROMPT_TEMPLATE: &str = "\
    Give me {num_words} words and short clues that follow the category: {category}. \
    Do NOT generate any additional information other than the word and its clue. \
    Do NOT add the number of letters to the end of the clues.";

/// Fills the clue prompt template.
pub fn build_clue_prompt(category: &str, num_words: usize) -> String {
    CLUE_PROMPT_TEMPLATE
        .replace("{num_words}", &num_words.to_string())
        .replace("{category}", category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_clue_prompt_fills_placeholders() {
        let prompt = build_clue_prompt("ocean animals", 15);
        assert!(prompt.contains("15 words"));
        assert!(prompt.contains("ocean animals"));
        assert!(!prompt.contains("{num_words}"));
        assert!(!prompt.contains("{category}"));
    }
}
