/// Words stripped from player input before parsing.
const STOP_WORDS: [&str; 8] = ["a", "an", "the", "to", "with", "on", "in", "is"];

/// Lowercase the input, drop stop words, and rejoin the rest with single
/// spaces. Word order is preserved; no stemming, no synonym resolution.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| word.to_lowercase())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect::<Vec<String>>()
        .join(" ")
}
