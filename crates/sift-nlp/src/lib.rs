//! Sift NLP — tokenization, part-of-speech tagging, keyword extraction.

pub mod keywords;
pub mod lemma;
pub mod lexicon;
pub mod tagger;

pub use keywords::{extract_keywords, extract_keywords_with, DEFAULT_TOP_N};
pub use tagger::{LexiconTagger, Pos, Tagger, Token};
