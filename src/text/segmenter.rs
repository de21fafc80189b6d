//! Sentence and token splitting over raw input text

use super::document::{Document, Sentence};
use super::token::Token;

/// Words whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "st", "jr", "sr", "etc", "vs", "inc",
    "ltd", "co", "fig", "vol", "al",
];

/// Split raw text into a document of sentences and classified tokens
///
/// Sentences end at `.`, `!` or `?` (plus any trailing closing quotes
/// or brackets) when followed by whitespace and a capital, digit or
/// opening quote, or by the end of input. Decimal points and common
/// abbreviations do not end sentences. Trailing text without a
/// terminator still forms a sentence. Sentence texts are trimmed and
/// empty sentences are dropped.
pub fn segment(text: &str) -> Document {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let terminal = chars.get(i).copied().is_some_and(is_terminator);
        if terminal && ends_sentence(&chars, i) {
            let mut end = i + 1;
            while chars.get(end).is_some_and(|&c| is_closer(c)) {
                end += 1;
            }
            flush_sentence(&chars, start, end, &mut sentences);
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }
    flush_sentence(&chars, start, chars.len(), &mut sentences);

    Document::new(sentences)
}

/// Split a single sentence into word and punctuation tokens
///
/// Word tokens are maximal runs of alphanumeric characters, keeping
/// interior apostrophes and hyphens. Every other non-whitespace
/// character becomes a single-character token. Whitespace separates
/// tokens and is never emitted.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        if c.is_whitespace() {
            i += 1;
        } else if c.is_alphanumeric() {
            let mut word = String::new();
            word.push(c);
            i += 1;
            while let Some(&next) = chars.get(i) {
                let connector = (next == '\'' || next == '-')
                    && chars.get(i + 1).is_some_and(|c| c.is_alphanumeric());
                if next.is_alphanumeric() || connector {
                    word.push(next);
                    i += 1;
                } else {
                    break;
                }
            }
            tokens.push(Token::classify(word));
        } else {
            tokens.push(Token::classify(c.to_string()));
            i += 1;
        }
    }
    tokens
}

fn ends_sentence(chars: &[char], index: usize) -> bool {
    if chars.get(index) == Some(&'.') {
        let prev_digit = index
            .checked_sub(1)
            .and_then(|p| chars.get(p))
            .is_some_and(char::is_ascii_digit);
        let next_digit = chars.get(index + 1).is_some_and(char::is_ascii_digit);
        if prev_digit && next_digit {
            return false;
        }
        if is_abbreviation(chars, index) {
            return false;
        }
    }

    let mut after = index + 1;
    while chars.get(after).is_some_and(|&c| is_closer(c)) {
        after += 1;
    }
    let Some(&next) = chars.get(after) else {
        return true;
    };
    if !next.is_whitespace() {
        return false;
    }
    let mut probe = after;
    while chars.get(probe).is_some_and(|c| c.is_whitespace()) {
        probe += 1;
    }
    match chars.get(probe) {
        None => true,
        Some(&c) => c.is_uppercase() || c.is_ascii_digit() || is_opener(c),
    }
}

fn is_abbreviation(chars: &[char], period: usize) -> bool {
    let mut word = String::new();
    let mut back = period;
    while back > 0 {
        let Some(&c) = chars.get(back - 1) else { break };
        if c.is_alphanumeric() {
            word.insert(0, c);
            back -= 1;
        } else {
            break;
        }
    }
    if word.is_empty() {
        return false;
    }
    // Single letters are initials, as in "J. K. Rowling"
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

fn flush_sentence(chars: &[char], start: usize, end: usize, sentences: &mut Vec<Sentence>) {
    let Some(span) = chars.get(start..end) else {
        return;
    };
    let text: String = span.iter().collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    let tokens = tokenize(trimmed);
    sentences.push(Sentence::new(trimmed.to_string(), tokens));
}

const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

const fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

const fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘')
}
