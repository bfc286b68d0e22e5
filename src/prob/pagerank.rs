use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

pub const DAMPING: f64 = 0.85;
pub const SAMPLES: usize = 10_000;
const THRESHOLD: f64 = 0.001;

/// Pages mapped to the set of corpus pages they link to
pub type Corpus = BTreeMap<String, HashSet<String>>;

/// Ranks per page; they always sum to 1
pub type Ranks = BTreeMap<String, f64>;

/// Probability distribution over which page a random surfer visits next.
///
/// With probability `damping` the surfer follows a link of `page`, chosen
/// uniformly; otherwise it jumps to any corpus page. A page without links
/// behaves as if it linked to the whole corpus.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Ranks {
    let n = corpus.len() as f64;
    let links = &corpus[page];

    if links.is_empty() {
        return corpus.keys().map(|p| (p.clone(), 1.0 / n)).collect();
    }

    let jump = (1.0 - damping) / n;
    corpus
        .keys()
        .map(|p| {
            let followed = if links.contains(p) {
                damping / links.len() as f64
            } else {
                0.0
            };
            (p.clone(), followed + jump)
        })
        .collect()
}

/// Estimates ranks by walking `samples` steps of the transition model,
/// starting from a page chosen uniformly at random
pub fn sample_pagerank<R: Rng>(corpus: &Corpus, damping: f64, samples: usize, rng: &mut R) -> Ranks {
    let pages: Vec<&String> = corpus.keys().collect();
    let mut page = (*pages.choose(rng).expect("corpus is not empty")).clone();

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    *counts.entry(page.clone()).or_insert(0) += 1;

    for _ in 1..samples {
        let model = transition_model(corpus, &page, damping);
        let (candidates, weights): (Vec<&String>, Vec<f64>) =
            model.iter().map(|(p, &weight)| (p, weight)).unzip();
        let index = WeightedIndex::new(weights)
            .expect("transition probabilities are positive")
            .sample(rng);

        page = candidates[index].clone();
        *counts.entry(page.clone()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(p, c)| (p, c as f64 / samples as f64))
        .collect()
}

/// Computes ranks by iterating the PageRank recurrence until every rank
/// moves by at most 0.001
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Ranks {
    let n = corpus.len() as f64;
    let mut ranks: Ranks = corpus.keys().map(|p| (p.clone(), 1.0 / n)).collect();

    loop {
        let mut current = Ranks::new();
        for page in corpus.keys() {
            let mut rank = (1.0 - damping) / n;
            for (other, links) in corpus {
                if other != page && links.contains(page) {
                    rank += damping * ranks[other] / links.len() as f64;
                }
                // a page without links distributes its rank everywhere
                if links.is_empty() {
                    rank += damping * ranks[other] / n;
                }
            }
            current.insert(page.clone(), rank);
        }

        let converged = corpus
            .keys()
            .all(|p| (current[p] - ranks[p]).abs() <= THRESHOLD);
        ranks = current;

        if converged {
            return ranks;
        }
    }
}
