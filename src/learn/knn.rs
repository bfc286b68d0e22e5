use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::HashMap;

/// k-nearest-neighbor classifier over f64 feature vectors
pub struct KNearest {
    k: usize,
    features: Vec<Vec<f64>>,
    labels: Vec<u32>,
}

impl KNearest {
    pub fn fit(k: usize, features: Vec<Vec<f64>>, labels: Vec<u32>) -> Self {
        assert!(k >= 1);
        assert_eq!(features.len(), labels.len());
        assert!(!features.is_empty(), "training set is empty");

        KNearest {
            k,
            features,
            labels,
        }
    }

    /// Majority vote among the k nearest training points, ties broken
    /// towards the smaller label
    pub fn predict(&self, x: &[f64]) -> u32 {
        let mut distances: Vec<(f64, u32)> = self
            .features
            .iter()
            .zip(&self.labels)
            .map(|(f, &label)| (squared_distance(f, x), label))
            .collect();
        distances.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("distances are never NaN"));

        let mut votes: HashMap<u32, usize> = HashMap::new();
        for &(_, label) in distances.iter().take(self.k) {
            *votes.entry(label).or_insert(0) += 1;
        }

        votes
            .into_iter()
            .max_by_key(|&(label, count)| (count, Reverse(label)))
            .map(|(label, _)| label)
            .expect("at least one neighbor voted")
    }

    /// Predicts every sample, in parallel
    pub fn predict_batch(&self, xs: &[Vec<f64>]) -> Vec<u32> {
        xs.par_iter().map(|x| self.predict(x)).collect()
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(left, right)| (left - right) * (left - right))
        .sum()
}
