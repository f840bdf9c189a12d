//! Tokenization and part-of-speech tagging.
//!
//! [`LexiconTagger`] is a rule-based tagger: closed-class lexicons, a handful
//! of suffix rules, and one token of left context. It is good enough to pick
//! nouns out of news-style prose. Swap in a statistical tagger by implementing
//! [`Tagger`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lemma::{lemmatize_noun, lemmatize_verb};
use crate::lexicon::{
    ADJECTIVES, CLOSED_CLASS, ED_EXCEPTIONS, ING_NOUNS, IRREGULAR_VERBS, NOUN_TRIGGERS,
    STOPWORDS, SUBJECT_PRONOUNS, SUFFIX_NOUNS, VERB_BASES, VERB_TRIGGERS,
};

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pos {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Interjection,
    Punctuation,
    Symbol,
    Other,
}

impl Pos {
    pub fn is_nominal(&self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun)
    }
}

/// A tagged token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the input.
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_alpha: bool,
}

/// Splits text into tagged tokens.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<Token>;
}

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{N}+(?:[.,]\p{N}+)+|[\p{L}\p{M}\p{N}]+(?:['’]\p{L}+)*|[^\s\p{L}\p{M}\p{N}]")
        .expect("token pattern compiles")
});

static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{P}+$").expect("punct pattern compiles"));
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{S}+$").expect("symbol pattern compiles"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{N}+(?:[.,]\p{N}+)*$").expect("number pattern compiles"));

/// Split text into surface tokens, separating clitics (`don't` → `do`, `n't`).
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        let word = m.as_str().replace('’', "'");
        split_clitic(&word, &mut out);
    }
    out
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();
    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        out.push(word[..cut].to_string());
        out.push(word[cut..].to_string());
        return;
    }
    match word.find('\'') {
        Some(i) if i > 0 => {
            out.push(word[..i].to_string());
            out.push(word[i..].to_string());
        }
        _ => out.push(word.to_string()),
    }
}

/// Rule-based English tagger over static lexicons.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(
        &self,
        surface: &str,
        lower: &str,
        prev: Option<&Token>,
        sentence_start: bool,
    ) -> Pos {
        if PUNCT_RE.is_match(surface) {
            return Pos::Punctuation;
        }
        if SYMBOL_RE.is_match(surface) {
            return Pos::Symbol;
        }
        if NUMBER_RE.is_match(surface) {
            return Pos::Numeral;
        }
        if let Some(pos) = CLOSED_CLASS.get(lower) {
            return *pos;
        }
        if !surface.chars().any(char::is_alphabetic) {
            return Pos::Other;
        }

        let capitalized = surface.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return Pos::ProperNoun;
        }

        let prev_lower = prev.map(|t| t.text.to_lowercase()).unwrap_or_default();
        let prev_pos = prev.map(|t| t.pos);
        let after_determiner =
            NOUN_TRIGGERS.contains(prev_lower.as_str()) || prev_pos == Some(Pos::Adjective);

        if ADJECTIVES.contains(lower) {
            return Pos::Adjective;
        }
        if IRREGULAR_VERBS.contains_key(lower) {
            return Pos::Verb;
        }
        if let Some(pos) = suffix_class(lower) {
            return pos;
        }
        if lower.len() > 4 && lower.ends_with("ed") && !ED_EXCEPTIONS.contains(lower) {
            return if after_determiner { Pos::Adjective } else { Pos::Verb };
        }
        if after_determiner {
            return Pos::Noun;
        }
        if VERB_TRIGGERS.contains(prev_lower.as_str())
            || SUBJECT_PRONOUNS.contains(prev_lower.as_str())
            || (prev_lower == "to" && VERB_BASES.contains(lower))
        {
            return Pos::Verb;
        }
        if lower.len() > 4 && lower.ends_with("ing") && !ING_NOUNS.contains(lower) {
            return match prev_pos {
                Some(Pos::Auxiliary | Pos::Pronoun | Pos::Adverb | Pos::Particle) => Pos::Verb,
                _ => Pos::Noun,
            };
        }
        if matches!(prev_pos, Some(Pos::Noun | Pos::ProperNoun | Pos::Pronoun))
            && is_third_person_verb(lower)
        {
            return Pos::Verb;
        }
        Pos::Noun
    }
}

/// Adverb/adjective suffixes, minus the nouns that happen to share them.
fn suffix_class(lower: &str) -> Option<Pos> {
    if SUFFIX_NOUNS.contains(lower) {
        return None;
    }
    let long_enough = |suffix: &str| lower.len() > suffix.len() + 2 && lower.ends_with(suffix);
    if long_enough("ly") {
        return Some(Pos::Adverb);
    }
    ["ous", "ful", "ive", "able", "ible", "less", "ish"]
        .iter()
        .any(|s| long_enough(*s))
        .then_some(Pos::Adjective)
}

fn is_third_person_verb(lower: &str) -> bool {
    if lower.len() <= 3 || !lower.ends_with('s') || lower.ends_with("ss") {
        return false;
    }
    let stem_s = &lower[..lower.len() - 1];
    let stem_es = lower.strip_suffix("es").unwrap_or(stem_s);
    let stem_ies = lower.strip_suffix("ies").map(|s| format!("{}y", s));
    VERB_BASES.contains(stem_s)
        || VERB_BASES.contains(stem_es)
        || stem_ies.is_some_and(|s| VERB_BASES.contains(s.as_str()))
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        for surface in tokenize(text) {
            let lower = surface.to_lowercase();
            let prev = tokens.last();
            let sentence_start = prev.map_or(true, |t| matches!(t.text.as_str(), "." | "!" | "?"));
            let pos = self.classify(&surface, &lower, prev, sentence_start);

            let lemma = match pos {
                Pos::Noun => lemmatize_noun(&lower),
                Pos::Verb => lemmatize_verb(&lower),
                Pos::ProperNoun => surface.clone(),
                _ => lower.clone(),
            };

            tokens.push(Token {
                is_stop: STOPWORDS.contains(lower.as_str()),
                is_punct: pos == Pos::Punctuation,
                is_alpha: !surface.is_empty() && surface.chars().all(char::is_alphabetic),
                text: surface,
                lemma,
                pos,
            });
        }
        tokens
    }
}
