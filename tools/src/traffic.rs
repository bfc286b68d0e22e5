use crate::ppm::read_ppm;
use ailab::learn::split::train_test_split;
use anyhow::{ensure, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::Array2;
use nn::encoding::one_hot;
use nn::io;
use nn::layer::{Dense, Layer, Relu};
use nn::model::Network;
use rand::thread_rng;
use std::fs;
use std::path::{Path, PathBuf};

const IMG_WIDTH: usize = 30;
const IMG_HEIGHT: usize = 30;
const CATEGORIES: usize = 43;
const TEST_FRACTION: f64 = 0.4;
const HIDDEN: usize = 128;
const BATCH_SIZE: usize = 32;
const LEARNING_RATE: f32 = 0.01;

#[derive(Args)]
pub struct TrafficCommand {
    /// Directory with one numbered subdirectory of PPM images per category
    data_dir: PathBuf,

    /// Optional path the trained model is saved to
    model: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    epochs: usize,
}

/// Loads every `.ppm` under the numbered category directories, resampled to
/// 30x30 and flattened to RGB features
fn load_data(data_dir: &Path) -> Result<(Vec<Vec<f32>>, Vec<usize>)> {
    let mut features = Vec::new();
    let mut labels = Vec::new();

    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let Ok(category) = path
            .file_name()
            .expect("directories have names")
            .to_string_lossy()
            .parse::<usize>()
        else {
            continue;
        };
        ensure!(category < CATEGORIES, "category {category} out of range");

        for entry in fs::read_dir(&path)? {
            let path = entry?.path();
            if path.extension().map_or(true, |ext| ext != "ppm") {
                continue;
            }

            let image = read_ppm(&path)?.resize(IMG_WIDTH, IMG_HEIGHT);
            features.push(image.features());
            labels.push(category);
        }
    }

    Ok((features, labels))
}

fn to_matrix(rows: &[Vec<f32>]) -> Array2<f32> {
    let columns = rows.first().map_or(0, Vec::len);
    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), columns), flat).expect("rows have equal lengths")
}

pub fn run(cmd: TrafficCommand) -> Result<()> {
    let (features, labels) = load_data(&cmd.data_dir)
        .with_context(|| format!("failed to load images from {}", cmd.data_dir.display()))?;
    ensure!(features.len() >= 2, "not enough images to split");
    println!("Loaded {} images.", features.len());

    let mut rng = thread_rng();
    let (x_train, x_test, y_train, y_test) =
        train_test_split(&features, &labels, TEST_FRACTION, &mut rng);

    let x_train = to_matrix(&x_train);
    let x_test = to_matrix(&x_test);
    let y_onehot = one_hot(&y_train, CATEGORIES);

    let inputs = IMG_WIDTH * IMG_HEIGHT * 3;
    let mut network = Network::new(vec![
        Layer::from(Dense::new(inputs, HIDDEN, &mut rng)),
        Layer::from(Relu::new()),
        Layer::from(Dense::new(HIDDEN, CATEGORIES, &mut rng)),
    ]);

    let bar = ProgressBar::new(cmd.epochs as u64).with_style(
        ProgressStyle::with_template("Epochs: {bar:40} {pos}/{len} {msg}")
            .expect("the template is valid"),
    );
    for _ in 0..cmd.epochs {
        let loss = network.train_epoch(&x_train, &y_onehot, LEARNING_RATE, BATCH_SIZE, &mut rng);
        bar.inc(1);
        bar.set_message(format!("loss {loss:.4}"));
    }
    bar.finish();

    let accuracy = network.accuracy(&x_test, &y_test);
    println!("Test accuracy: {accuracy:.4}");

    if let Some(model) = cmd.model {
        io::save(&network, &model)?;
        println!("Model saved to {}.", model.display());
    }

    Ok(())
}
