use crate::layer::{Layer, LayerOps};
use ndarray::{Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

/// A feedforward network: a stack of layers producing class logits,
/// trained with softmax cross-entropy
pub struct Network {
    pub(crate) layers: Vec<Layer>,
}

impl Network {
    pub fn new(layers: Vec<Layer>) -> Self {
        Network { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Class logits for a batch
    pub fn forward(&mut self, x: &Array2<f32>) -> Array2<f32> {
        self.layers
            .iter_mut()
            .fold(x.clone(), |activation, layer| layer.forward(&activation))
    }

    /// Softmax class probabilities for a batch
    pub fn predict_proba(&mut self, x: &Array2<f32>) -> Array2<f32> {
        softmax(&self.forward(x))
    }

    /// Most likely class per sample
    pub fn predict(&mut self, x: &Array2<f32>) -> Vec<usize> {
        self.forward(x)
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .max_by(|a, b| a.1.partial_cmp(b.1).expect("logits are never NaN"))
                    .map(|(index, _)| index)
                    .expect("networks have at least one output")
            })
            .collect()
    }

    /// One epoch of shuffled minibatch SGD against one-hot targets.
    /// Returns the mean cross-entropy over the epoch
    pub fn train_epoch<R: Rng>(
        &mut self,
        x: &Array2<f32>,
        y: &Array2<f32>,
        learning_rate: f32,
        batch_size: usize,
        rng: &mut R,
    ) -> f32 {
        assert_eq!(x.nrows(), y.nrows());
        assert!(batch_size >= 1);

        let samples = x.nrows();
        let mut order: Vec<usize> = (0..samples).collect();
        order.shuffle(rng);

        let mut total_loss = 0.0;
        for batch in order.chunks(batch_size) {
            let xb = x.select(Axis(0), batch);
            let yb = y.select(Axis(0), batch);

            let probs = softmax(&self.forward(&xb));
            total_loss += cross_entropy(&probs, &yb) * batch.len() as f32;

            // fused softmax + cross-entropy gradient on the logits
            let mut grad = (&probs - &yb) / batch.len() as f32;
            for layer in self.layers.iter_mut().rev() {
                grad = layer.backward(&grad);
            }
            for layer in &mut self.layers {
                layer.step(learning_rate);
            }
        }

        total_loss / samples as f32
    }

    /// Fraction of samples classified correctly
    pub fn accuracy(&mut self, x: &Array2<f32>, labels: &[usize]) -> f64 {
        assert_eq!(x.nrows(), labels.len());

        let predictions = self.predict(x);
        let correct = predictions
            .iter()
            .zip(labels)
            .filter(|(prediction, label)| prediction == label)
            .count();
        correct as f64 / labels.len() as f64
    }
}

/// Row-wise softmax, stabilized by subtracting each row's maximum
pub fn softmax(logits: &Array2<f32>) -> Array2<f32> {
    let mut output = logits.clone();
    for mut row in output.rows_mut() {
        let max = row.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|v| v / sum);
    }
    output
}

/// Mean cross-entropy of one-hot targets against predicted probabilities
pub fn cross_entropy(probs: &Array2<f32>, targets: &Array2<f32>) -> f32 {
    let log_probs = probs.mapv(|p| (p + 1e-7).ln());
    -(targets * &log_probs).sum() / probs.nrows() as f32
}
