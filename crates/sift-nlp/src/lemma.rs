//! Lemmatization for nouns and verbs.
//!
//! Suffix rules backed by irregular-form tables. Inputs are expected lower-case.

use crate::lexicon::{IRREGULAR_PLURALS, IRREGULAR_VERBS, SINGULAR_S, VERB_BASES};

/// Reduce a plural noun to its singular form.
pub fn lemmatize_noun(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_PLURALS.get(word) {
        return lemma.to_string();
    }
    if word.len() <= 3 || SINGULAR_S.contains(word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{}y", stem);
        }
    }
    for suffix in ["ches", "shes", "xes", "sses", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Reduce an inflected verb to its base form.
pub fn lemmatize_verb(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_VERBS.get(word) {
        return lemma.to_string();
    }
    if VERB_BASES.contains(word) || word.len() <= 3 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ied").or_else(|| word.strip_suffix("ies")) {
        return format!("{}y", stem);
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 2 {
                return restore_stem(stem);
            }
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if VERB_BASES.contains(stem) {
            return stem.to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) if !word.ends_with("ss") => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Undo the spelling changes made when `-ing`/`-ed` was attached.
fn restore_stem(stem: &str) -> String {
    if VERB_BASES.contains(stem) {
        return stem.to_string();
    }
    let with_e = format!("{}e", stem);
    if VERB_BASES.contains(with_e.as_str()) {
        return with_e;
    }

    let bytes = stem.as_bytes();
    let n = bytes.len();
    let doubled = n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !matches!(bytes[n - 1], b'l' | b's' | b'z' | b'e' | b'o');
    if doubled {
        return stem[..n - 1].to_string();
    }
    stem.to_string()
}
