//! Text value generators.
//!
//! Bounded text (`char`, `varchar`) is filled with ASCII letters; unbounded
//! `text` gets a short sentence built from a fixed word list.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Word count bounds for free `text` values (inclusive).
pub const SENTENCE_WORDS: (usize, usize) = (1, 10);

/// Word count bounds for the sentence following the iteration digits in
/// unique `text` values (inclusive).
pub const UNIQUE_SENTENCE_WORDS: (usize, usize) = (1, 9);

/// Generate exactly `len` random ASCII letters.
pub fn random_letters<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(LETTERS[rng.random_range(0..LETTERS.len())]))
        .collect()
}

/// Generate a sentence of exactly `words` words: capitalized, space
/// separated, ending with a period.
pub fn random_sentence<R: Rng>(rng: &mut R, words: usize) -> String {
    let mut sentence = String::new();

    for i in 0..words {
        let word = WORDS[rng.random_range(0..WORDS.len())];
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                sentence.extend(first.to_uppercase());
                sentence.push_str(chars.as_str());
            }
        } else {
            sentence.push(' ');
            sentence.push_str(word);
        }
    }

    if !sentence.is_empty() {
        sentence.push('.');
    }
    sentence
}

/// Generate a sentence whose word count is drawn uniformly from `bounds`.
pub fn random_sentence_between<R: Rng>(rng: &mut R, bounds: (usize, usize)) -> String {
    let words = rng.random_range(bounds.0..=bounds.1);
    random_sentence(rng, words)
}
