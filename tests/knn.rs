use ailab::learn::knn::KNearest;
use ailab::learn::split::train_test_split;
use ailab::learn::Metrics;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn one_nearest_neighbor_copies_the_closest_label() {
    let model = KNearest::fit(
        1,
        vec![vec![0.0, 0.0], vec![10.0, 10.0]],
        vec![0, 1],
    );

    assert_eq!(model.predict(&[1.0, 1.0]), 0);
    assert_eq!(model.predict(&[9.0, 9.0]), 1);
}

#[test]
fn majority_vote_overrules_a_single_outlier() {
    let model = KNearest::fit(
        3,
        vec![
            vec![0.0, 0.0],
            vec![0.5, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
        ],
        vec![0, 1, 0, 1],
    );

    // the three nearest are 0, 1, 0
    assert_eq!(model.predict(&[0.2, 0.0]), 0);
}

#[test]
fn batch_prediction_matches_single_predictions() {
    let model = KNearest::fit(
        1,
        vec![vec![0.0], vec![5.0], vec![10.0]],
        vec![0, 1, 2],
    );

    let queries = vec![vec![0.4], vec![5.2], vec![8.9]];
    let batch = model.predict_batch(&queries);
    let singles: Vec<u32> = queries.iter().map(|q| model.predict(q)).collect();
    assert_eq!(batch, singles);
    assert_eq!(batch, vec![0, 1, 2]);
}

#[test]
fn metrics_split_rates_by_class() {
    let labels = vec![1, 1, 1, 1, 0, 0];
    let predictions = vec![1, 1, 1, 0, 0, 1];
    let metrics = Metrics::evaluate(&labels, &predictions);

    assert_eq!(metrics.correct, 4);
    assert_eq!(metrics.incorrect, 2);
    assert!((metrics.sensitivity - 0.75).abs() < 1e-9);
    assert!((metrics.specificity - 0.5).abs() < 1e-9);
}

#[test]
fn split_keeps_pairs_together() {
    let xs: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
    let ys: Vec<u32> = (0..10).collect();

    let mut rng = StdRng::seed_from_u64(5);
    let (x_train, x_test, y_train, y_test) = train_test_split(&xs, &ys, 0.4, &mut rng);

    assert_eq!(x_train.len(), 6);
    assert_eq!(x_test.len(), 4);

    for (x, y) in x_train.iter().zip(&y_train).chain(x_test.iter().zip(&y_test)) {
        assert_eq!(x[0] as u32, *y);
    }
}
