use crate::charged_words::ChargedWords;

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `article_words` found in `charged_words`, in `[0, 100]`.
///
/// An empty article scores exactly `0.0`.
pub fn calculate_jaundice_rate(article_words: &[String], charged_words: &ChargedWords) -> f64 {
    if article_words.is_empty() {
        return 0.0;
    }

    let found = article_words
        .iter()
        .filter(|word| charged_words.contains(word))
        .count();
    let score = found as f64 / article_words.len() as f64 * 100.0;

    round2(score)
}
