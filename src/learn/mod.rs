pub mod knn;
pub mod perceptron;
pub mod qlearning;
pub mod split;

/// Classification counts and rates for a binary task (1 = positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub correct: usize,
    pub incorrect: usize,
    /// True positive rate
    pub sensitivity: f64,
    /// True negative rate
    pub specificity: f64,
}

impl Metrics {
    pub fn evaluate(labels: &[u32], predictions: &[u32]) -> Self {
        assert_eq!(labels.len(), predictions.len());

        let mut true_positives = 0usize;
        let mut true_negatives = 0usize;
        let mut false_positives = 0usize;
        let mut false_negatives = 0usize;

        for (&label, &prediction) in labels.iter().zip(predictions) {
            match (label, prediction) {
                (1, 1) => true_positives += 1,
                (0, 0) => true_negatives += 1,
                (0, _) => false_positives += 1,
                (_, _) => false_negatives += 1,
            }
        }

        Metrics {
            correct: true_positives + true_negatives,
            incorrect: false_positives + false_negatives,
            sensitivity: true_positives as f64 / (true_positives + false_negatives) as f64,
            specificity: true_negatives as f64 / (true_negatives + false_positives) as f64,
        }
    }
}
