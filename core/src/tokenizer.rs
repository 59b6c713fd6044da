use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[A-Za-z]+").expect("valid regex");
}

/// Lazily yield the maximal runs of ASCII letters in `text`, lower-cased, left to right.
/// Digits, punctuation and whitespace only ever separate tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    RE.find_iter(text).map(|mat| mat.as_str().to_ascii_lowercase())
}
