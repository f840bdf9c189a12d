//! Frequency-based keyword extraction.
//!
//! Keywords are the most frequent noun lemmas in the text. Stopwords,
//! punctuation, tokens of two characters or fewer and anything that is not
//! purely alphabetic are ignored. Ties keep first-occurrence order.

use std::collections::HashMap;

use tracing::debug;

use crate::tagger::{LexiconTagger, Tagger, Token};

/// Number of keywords returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 3;

/// Extract up to `top_n` keywords with the default tagger.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    extract_keywords_with(&LexiconTagger::new(), text, top_n)
}

/// Extract up to `top_n` keywords using `tagger`.
pub fn extract_keywords_with<T: Tagger + ?Sized>(tagger: &T, text: &str, top_n: usize) -> Vec<String> {
    if top_n == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let tokens = tagger.tag(&text.to_lowercase());

    // Insertion-ordered counts so the stable sort below breaks ties by first occurrence.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in tokens.iter().filter(|t| is_candidate(t)) {
        match index.get(&token.lemma) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.lemma.clone(), counts.len());
                counts.push((token.lemma.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);

    debug!(
        "Extracted {} keywords from {} tokens",
        counts.len(),
        tokens.len()
    );
    counts.into_iter().map(|(lemma, _)| lemma).collect()
}

fn is_candidate(token: &Token) -> bool {
    token.pos.is_nominal()
        && !token.is_stop
        && !token.is_punct
        && token.text.chars().count() > 2
        && token.is_alpha
}
