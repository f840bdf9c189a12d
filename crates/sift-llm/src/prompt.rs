//! Prompt construction for metadata extraction.

/// Number of topics the model must return.
pub const TOPIC_COUNT: usize = 3;

pub const SYSTEM_PROMPT: &str = "You are a knowledge extraction engine. \
Read the user's text and respond with a single JSON object and nothing else. \
The object must have exactly these keys:\n\
- \"summary\": a concise 1-2 sentence summary of the text\n\
- \"title\": the title of the text if one is identifiable, otherwise null\n\
- \"topics\": an array of exactly 3 short key topics\n\
- \"sentiment\": one of \"positive\", \"neutral\" or \"negative\"\n\
- \"confidence\": a number from 0.0 to 1.0 indicating confidence in the analysis";

/// User turn wrapping the text to analyze.
pub fn user_prompt(text: &str) -> String {
    format!("Analyze the following text.\n\nText:\n{}", text)
}
