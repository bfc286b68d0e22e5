use ndarray::Array2;

/// One-hot encodes class labels into a (samples x classes) matrix
pub fn one_hot(labels: &[usize], classes: usize) -> Array2<f32> {
    let mut encoded = Array2::zeros((labels.len(), classes));
    for (row, &label) in labels.iter().enumerate() {
        assert!(label < classes, "label {label} out of range");
        encoded[[row, label]] = 1.0;
    }
    encoded
}
