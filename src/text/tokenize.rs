/// English stopwords dropped by `tokenize`
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn't", "it", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shan't", "she", "should", "shouldn't", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "were", "weren't", "what", "when", "where", "which", "while", "who", "whom", "why", "with",
    "won't", "would", "wouldn't", "you", "your", "yours", "yourself", "yourselves",
];

/// Lowercase word tokens: maximal alphanumeric runs
pub fn words(document: &str) -> Vec<String> {
    document
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Like `words`, with English stopwords removed
pub fn tokenize(document: &str) -> Vec<String> {
    words(document)
        .into_iter()
        .filter(|word| !STOPWORDS.contains(&word.as_str()))
        .collect()
}

/// Splits text into sentences on `.`, `!` and `?`, keeping the terminator
pub fn sentences(text: &str) -> Vec<String> {
    text.split_inclusive(|c| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stopwords_and_punctuation() {
        assert_eq!(
            tokenize("The cat, famously, sat on the mat."),
            vec!["cat", "famously", "sat", "mat"]
        );
    }

    #[test]
    fn splits_sentences() {
        assert_eq!(
            sentences("First one. Second one! Third?"),
            vec!["First one.", "Second one!", "Third?"]
        );
    }
}
