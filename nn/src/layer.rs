use enum_dispatch::enum_dispatch;
use ndarray::{Array1, Array2, Axis};
use rand::Rng;

/// Operations every layer supports. Batches are row-major: one sample per
/// row
#[enum_dispatch]
pub trait LayerOps {
    /// Computes the layer output, caching whatever `backward` needs
    fn forward(&mut self, input: &Array2<f32>) -> Array2<f32>;

    /// Propagates the output gradient back to the input, accumulating
    /// parameter gradients along the way
    fn backward(&mut self, grad: &Array2<f32>) -> Array2<f32>;

    /// Applies one SGD step and clears the accumulated gradients
    fn step(&mut self, learning_rate: f32);
}

#[enum_dispatch(LayerOps)]
pub enum Layer {
    Dense,
    Relu,
}

/// Fully connected layer
pub struct Dense {
    pub(crate) weight: Array2<f32>,
    pub(crate) bias: Array1<f32>,
    input: Option<Array2<f32>>,
    grad_weight: Option<Array2<f32>>,
    grad_bias: Option<Array1<f32>>,
}

impl Dense {
    /// He-style uniform initialization in [-limit, limit] with
    /// limit = sqrt(6 / inputs)
    pub fn new<R: Rng>(inputs: usize, outputs: usize, rng: &mut R) -> Self {
        let limit = (6.0 / inputs as f32).sqrt();
        let weight = Array2::from_shape_fn((inputs, outputs), |_| rng.gen_range(-limit..limit));

        Dense::from_parts(weight, Array1::zeros(outputs))
    }

    pub(crate) fn from_parts(weight: Array2<f32>, bias: Array1<f32>) -> Self {
        Dense {
            weight,
            bias,
            input: None,
            grad_weight: None,
            grad_bias: None,
        }
    }

    pub fn inputs(&self) -> usize {
        self.weight.nrows()
    }

    pub fn outputs(&self) -> usize {
        self.weight.ncols()
    }
}

impl LayerOps for Dense {
    fn forward(&mut self, input: &Array2<f32>) -> Array2<f32> {
        self.input = Some(input.clone());
        input.dot(&self.weight) + &self.bias
    }

    fn backward(&mut self, grad: &Array2<f32>) -> Array2<f32> {
        let input = self.input.as_ref().expect("forward runs before backward");

        self.grad_weight = Some(input.t().dot(grad));
        self.grad_bias = Some(grad.sum_axis(Axis(0)));

        grad.dot(&self.weight.t())
    }

    fn step(&mut self, learning_rate: f32) {
        if let (Some(grad_weight), Some(grad_bias)) =
            (self.grad_weight.take(), self.grad_bias.take())
        {
            self.weight.scaled_add(-learning_rate, &grad_weight);
            self.bias.scaled_add(-learning_rate, &grad_bias);
        }
    }
}

/// Rectified linear activation
#[derive(Default)]
pub struct Relu {
    mask: Option<Array2<f32>>,
}

impl Relu {
    pub fn new() -> Self {
        Relu::default()
    }
}

impl LayerOps for Relu {
    fn forward(&mut self, input: &Array2<f32>) -> Array2<f32> {
        self.mask = Some(input.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 }));
        input.mapv(|v| v.max(0.0))
    }

    fn backward(&mut self, grad: &Array2<f32>) -> Array2<f32> {
        let mask = self.mask.as_ref().expect("forward runs before backward");
        grad * mask
    }

    fn step(&mut self, _learning_rate: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn dense_forward_is_affine() {
        let weight = array![[1.0, 0.0], [0.0, 2.0]];
        let bias = array![1.0, -1.0];
        let mut dense = Dense::from_parts(weight, bias);

        let output = dense.forward(&array![[3.0, 4.0]]);
        assert_eq!(output, array![[4.0, 7.0]]);
    }

    #[test]
    fn relu_masks_negative_gradients() {
        let mut relu = Relu::new();
        let output = relu.forward(&array![[-1.0, 2.0]]);
        assert_eq!(output, array![[0.0, 2.0]]);

        let grad = relu.backward(&array![[5.0, 5.0]]);
        assert_eq!(grad, array![[0.0, 5.0]]);
    }
}
