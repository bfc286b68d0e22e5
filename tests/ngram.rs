use ailab::text::ngram::NgramModel;
use ailab::text::tokenize::words;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn tokens(text: &str) -> Vec<String> {
    words(text)
}

#[test]
fn counts_contexts() {
    let model = NgramModel::train(2, &tokens("a b a b a c"));

    // contexts are single tokens: "a", "b", "c" never continues
    assert_eq!(model.context_count(), 2);
    assert_eq!(model.order(), 2);
}

#[test]
fn sampling_follows_observed_continuations() {
    let model = NgramModel::train(2, &tokens("a b a b a c"));
    let mut rng = StdRng::seed_from_u64(1);

    let context = vec!["b".to_string()];
    for _ in 0..20 {
        assert_eq!(model.sample(&context, &mut rng), Some("a".to_string()));
    }

    let context = vec!["a".to_string()];
    for _ in 0..20 {
        let next = model.sample(&context, &mut rng).unwrap();
        assert!(next == "b" || next == "c");
    }

    assert_eq!(model.sample(&[String::from("c")], &mut rng), None);
}

#[test]
fn generation_stays_in_vocabulary() {
    let text = "the quick brown fox jumps over the lazy dog and the quick grey cat";
    let tokens = tokens(text);
    let vocabulary: HashSet<&String> = tokens.iter().collect();

    let model = NgramModel::train(3, &tokens);
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..10 {
        let generated = model.generate(12, &mut rng);
        assert!(generated.len() >= 2);
        assert!(generated.len() <= 12);
        for token in &generated {
            assert!(vocabulary.contains(token));
        }
    }
}

#[test]
fn empty_corpus_generates_nothing() {
    let model = NgramModel::train(2, &[]);
    let mut rng = StdRng::seed_from_u64(3);
    assert!(model.generate(10, &mut rng).is_empty());
}
