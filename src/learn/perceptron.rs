/// Single-unit perceptron with the classic error-driven update rule
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
}

impl Perceptron {
    pub fn new(num_features: usize, learning_rate: f64) -> Self {
        Perceptron {
            weights: vec![0.0; num_features],
            bias: 0.0,
            learning_rate,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Threshold activation: 1 when the weighted sum is non-negative
    pub fn predict(&self, x: &[f64]) -> u32 {
        let activation: f64 = self.bias
            + self
                .weights
                .iter()
                .zip(x)
                .map(|(weight, feature)| weight * feature)
                .sum::<f64>();
        (activation >= 0.0) as u32
    }

    /// One pass over the data, applying `w += lr * (y - y_hat) * x` on every
    /// mistake. Returns the number of misclassified samples
    pub fn fit_epoch(&mut self, xs: &[Vec<f64>], ys: &[u32]) -> usize {
        assert_eq!(xs.len(), ys.len());
        let mut mistakes = 0;

        for (x, &y) in xs.iter().zip(ys) {
            let prediction = self.predict(x);
            let error = y as f64 - prediction as f64;
            if error != 0.0 {
                mistakes += 1;
                self.bias += self.learning_rate * error;
                for (weight, feature) in self.weights.iter_mut().zip(x) {
                    *weight += self.learning_rate * error * feature;
                }
            }
        }

        mistakes
    }

    /// Trains until an epoch goes through without mistakes, up to
    /// `max_epochs`. Returns the number of epochs used
    pub fn fit(&mut self, xs: &[Vec<f64>], ys: &[u32], max_epochs: usize) -> usize {
        for epoch in 1..=max_epochs {
            if self.fit_epoch(xs, ys) == 0 {
                return epoch;
            }
        }
        max_epochs
    }
}
