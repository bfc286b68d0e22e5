use ailab::text::tfidf::{compute_idfs, top_files, top_sentences, Documents};
use ailab::text::tokenize::tokenize;
use std::collections::HashSet;

fn documents() -> Documents {
    Documents::from([
        (
            "python.txt".to_string(),
            tokenize("Python is a programming language. Python emphasizes readability."),
        ),
        (
            "rust.txt".to_string(),
            tokenize("Rust is a programming language focused on safety."),
        ),
        (
            "cooking.txt".to_string(),
            tokenize("Searing locks flavor into the pan."),
        ),
    ])
}

fn query(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

#[test]
fn ubiquitous_words_have_zero_idf() {
    let documents = Documents::from([
        ("a".to_string(), vec!["shared".to_string()]),
        ("b".to_string(), vec!["shared".to_string(), "rare".to_string()]),
    ]);

    let idfs = compute_idfs(&documents);
    assert_eq!(idfs["shared"], 0.0);
    assert!((idfs["rare"] - 2.0_f64.ln()).abs() < 1e-9);
}

#[test]
fn repeated_terms_raise_the_tfidf_rank() {
    let documents = documents();
    let idfs = compute_idfs(&documents);

    // "python" appears twice in python.txt and nowhere else
    let top = top_files(&query("python"), &documents, &idfs, 2);
    assert_eq!(top[0], "python.txt");
}

#[test]
fn unrelated_queries_rank_by_their_own_terms() {
    let documents = documents();
    let idfs = compute_idfs(&documents);

    let top = top_files(&query("searing flavor"), &documents, &idfs, 1);
    assert_eq!(top, vec!["cooking.txt"]);
}

#[test]
fn sentence_ties_break_on_query_density() {
    let sentences = Documents::from([
        (
            "The language is safe.".to_string(),
            tokenize("The language is safe."),
        ),
        (
            "The language is safe and fast and modern.".to_string(),
            tokenize("The language is safe and fast and modern."),
        ),
    ]);
    let idfs = compute_idfs(&sentences);

    // both sentences match "language safe" with the same idf total; the
    // shorter one is denser
    let top = top_sentences(&query("language safe"), &sentences, &idfs, 1);
    assert_eq!(top, vec!["The language is safe."]);
}
