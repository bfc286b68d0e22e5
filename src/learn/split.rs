use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffled train/test split; `test_fraction` of the samples land in the
/// test set
pub fn train_test_split<X: Clone, Y: Clone, R: Rng>(
    xs: &[X],
    ys: &[Y],
    test_fraction: f64,
    rng: &mut R,
) -> (Vec<X>, Vec<X>, Vec<Y>, Vec<Y>) {
    assert_eq!(xs.len(), ys.len());
    assert!((0.0..1.0).contains(&test_fraction));

    let mut indices: Vec<usize> = (0..xs.len()).collect();
    indices.shuffle(rng);

    let test_len = (xs.len() as f64 * test_fraction).round() as usize;
    let (test_indices, train_indices) = indices.split_at(test_len);

    let pick_x = |indices: &[usize]| indices.iter().map(|&i| xs[i].clone()).collect();
    let pick_y = |indices: &[usize]| indices.iter().map(|&i| ys[i].clone()).collect();

    (
        pick_x(train_indices),
        pick_x(test_indices),
        pick_y(train_indices),
        pick_y(test_indices),
    )
}
