use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashMap};

/// Order-n Markov language model over word tokens
pub struct NgramModel {
    n: usize,
    /// Continuation counts per (n-1)-token context
    continuations: HashMap<Vec<String>, BTreeMap<String, usize>>,
    /// Sorted unique contexts, for seeding generation
    contexts: Vec<Vec<String>>,
}

impl NgramModel {
    /// Counts every n-gram of the token stream. `n` must be at least 2
    pub fn train(n: usize, tokens: &[String]) -> Self {
        assert!(n >= 2, "the model order must be at least 2");

        let mut continuations: HashMap<Vec<String>, BTreeMap<String, usize>> = HashMap::new();
        for window in tokens.windows(n) {
            let (context, next) = window.split_at(n - 1);
            *continuations
                .entry(context.to_vec())
                .or_default()
                .entry(next[0].clone())
                .or_insert(0) += 1;
        }

        let mut contexts: Vec<Vec<String>> = continuations.keys().cloned().collect();
        contexts.sort();

        NgramModel {
            n,
            continuations,
            contexts,
        }
    }

    pub fn order(&self) -> usize {
        self.n
    }

    /// Number of distinct contexts seen in training
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Samples a continuation of the context proportionally to the observed
    /// counts, if the context was seen in training
    pub fn sample<R: Rng>(&self, context: &[String], rng: &mut R) -> Option<String> {
        let counts = self.continuations.get(context)?;
        let (words, weights): (Vec<&String>, Vec<usize>) = counts.iter().unzip();
        let index = WeightedIndex::new(weights)
            .expect("counts are positive")
            .sample(rng);
        Some(words[index].clone())
    }

    /// Generates up to `max_tokens` tokens starting from a random context.
    /// Generation stops early when the current context was never seen
    pub fn generate<R: Rng>(&self, max_tokens: usize, rng: &mut R) -> Vec<String> {
        let Some(start) = self.contexts.choose(rng) else {
            return Vec::new();
        };

        let mut output = start.clone();
        while output.len() < max_tokens {
            let context = output[output.len() - (self.n - 1)..].to_vec();
            match self.sample(&context, rng) {
                Some(word) => output.push(word),
                None => break,
            }
        }

        output
    }
}
