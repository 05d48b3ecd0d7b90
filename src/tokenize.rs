/// Mixed-script title tokenization for Smart Tab Groups
///
/// Tab titles mix CJK and Latin text freely ("Rust 入门教程 2024"), so
/// keyword extraction runs in two stages: first a character scan that
/// collects maximal runs of "word" characters (CJK ideographs or ASCII
/// alphanumerics), then a per-segment re-split that separates each script's
/// runs into individual tokens. A mixed segment like "abc中文123" must yield
/// "abc", "中文" and "123" rather than being dropped or kept merged.
use std::sync::LazyLock;

use regex::Regex;

/// Sentence-terminal punctuation stripped before scanning (ASCII + CJK)
const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '?', '!', '，', '。', '？', '！'];

static CJK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}]+").expect("valid CJK run pattern"));
static LATIN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+").expect("valid Latin run pattern"));

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

fn is_word_char(c: char) -> bool {
    is_cjk(c) || c.is_ascii_alphanumeric()
}

/// Extract keyword tokens from a tab title, in first-appearance order.
///
/// The title is lowercased and stripped of sentence punctuation, scanned
/// into segments of word characters, and each segment is re-split into its
/// CJK runs followed by its Latin/digit runs. Tokens shorter than two
/// characters are dropped. Duplicates are kept; the caller deduplicates
/// where distinctness matters.
///
/// An empty or punctuation-only title yields no tokens.
pub fn tokenize(title: &str) -> Vec<String> {
    let normalized: String = title
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in normalized.chars() {
        if is_word_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            if current.chars().count() > 1 {
                segments.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.chars().count() > 1 {
        segments.push(current);
    }

    let mut tokens = Vec::new();
    for segment in &segments {
        // CJK runs first, then Latin runs; cluster titling depends on
        // this order, so it is part of the contract
        for run in CJK_RUNS.find_iter(segment) {
            tokens.push(run.as_str().to_string());
        }
        for run in LATIN_RUNS.find_iter(segment) {
            tokens.push(run.as_str().to_string());
        }
    }

    tokens.retain(|token| token.chars().count() > 1);
    tokens
}
