use ndarray::Array2;
use nn::encoding::one_hot;
use nn::io;
use nn::layer::{Dense, Layer, Relu};
use nn::model::Network;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Two linearly separable clusters around (-2, -2) and (2, 2)
fn clusters() -> (Array2<f32>, Vec<usize>) {
    let mut rows = Vec::new();
    let mut labels = Vec::new();

    for step in 0..20 {
        let offset = (step as f32) * 0.05;
        rows.extend([-2.0 + offset, -2.0 - offset]);
        labels.push(0);
        rows.extend([2.0 - offset, 2.0 + offset]);
        labels.push(1);
    }

    let x = Array2::from_shape_vec((labels.len(), 2), rows).unwrap();
    (x, labels)
}

#[test]
fn learns_a_separable_problem() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, labels) = clusters();
    let y = one_hot(&labels, 2);

    let mut network = Network::new(vec![Layer::from(Dense::new(2, 2, &mut rng))]);

    let first_loss = network.train_epoch(&x, &y, 0.5, 8, &mut rng);
    let mut last_loss = first_loss;
    for _ in 0..200 {
        last_loss = network.train_epoch(&x, &y, 0.5, 8, &mut rng);
    }

    assert!(last_loss < first_loss);
    assert_eq!(network.accuracy(&x, &labels), 1.0);
}

#[test]
fn deeper_network_shapes_line_up() {
    let mut rng = StdRng::seed_from_u64(11);
    let (x, labels) = clusters();
    let y = one_hot(&labels, 2);

    let mut network = Network::new(vec![
        Layer::from(Dense::new(2, 16, &mut rng)),
        Layer::from(Relu::new()),
        Layer::from(Dense::new(16, 2, &mut rng)),
    ]);

    let probs = network.predict_proba(&x);
    assert_eq!(probs.dim(), (labels.len(), 2));

    // training runs end to end and drives the loss down
    let first_loss = network.train_epoch(&x, &y, 0.1, 8, &mut rng);
    let mut last_loss = first_loss;
    for _ in 0..100 {
        last_loss = network.train_epoch(&x, &y, 0.1, 8, &mut rng);
    }
    assert!(last_loss < first_loss);
}

#[test]
fn save_load_round_trip_preserves_predictions() {
    let mut rng = StdRng::seed_from_u64(3);
    let (x, labels) = clusters();
    let y = one_hot(&labels, 2);

    let mut network = Network::new(vec![
        Layer::from(Dense::new(2, 8, &mut rng)),
        Layer::from(Relu::new()),
        Layer::from(Dense::new(8, 2, &mut rng)),
    ]);
    for _ in 0..20 {
        network.train_epoch(&x, &y, 0.1, 8, &mut rng);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.nn");
    io::save(&network, &path).unwrap();

    let mut restored = io::load(&path).unwrap();
    assert_eq!(restored.predict(&x), network.predict(&x));
}
