use std::collections::{BTreeMap, HashMap, HashSet};

/// Documents (or sentences) mapped to their token lists
pub type Documents = BTreeMap<String, Vec<String>>;

/// Inverse document frequency of every word appearing in the documents:
/// idf = ln(N / df)
pub fn compute_idfs(documents: &Documents) -> HashMap<String, f64> {
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in documents.values() {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for word in unique {
            *document_frequency.entry(word).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    document_frequency
        .into_iter()
        .map(|(word, frequency)| (word.to_string(), (n / frequency as f64).ln()))
        .collect()
}

/// Names of the `n` documents that best match the query, ranked by the
/// summed tf-idf of the query words
pub fn top_files(
    query: &HashSet<String>,
    documents: &Documents,
    idfs: &HashMap<String, f64>,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = documents
        .iter()
        .map(|(name, tokens)| {
            let score = query
                .iter()
                .map(|word| {
                    let tf = tokens.iter().filter(|token| *token == word).count();
                    tf as f64 * idfs.get(word).copied().unwrap_or(0.0)
                })
                .sum();
            (score, name)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .expect("scores are never NaN")
            .then_with(|| a.1.cmp(b.1))
    });
    scored.into_iter().take(n).map(|(_, name)| name.clone()).collect()
}

/// The `n` sentences that best match the query, ranked by the summed idf of
/// the matching query words, ties broken by query term density
pub fn top_sentences(
    query: &HashSet<String>,
    sentences: &Documents,
    idfs: &HashMap<String, f64>,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<((f64, f64), &String)> = sentences
        .iter()
        .map(|(sentence, tokens)| {
            let matching_idf: f64 = query
                .iter()
                .filter(|word| tokens.contains(word))
                .map(|word| idfs.get(word).copied().unwrap_or(0.0))
                .sum();
            let density = if tokens.is_empty() {
                0.0
            } else {
                tokens.iter().filter(|token| query.contains(*token)).count() as f64
                    / tokens.len() as f64
            };
            ((matching_idf, density), sentence)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .expect("scores are never NaN")
            .then_with(|| a.1.cmp(b.1))
    });
    scored
        .into_iter()
        .take(n)
        .map(|(_, sentence)| sentence.clone())
        .collect()
}
