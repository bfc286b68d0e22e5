use ailab::learn::knn::KNearest;
use ailab::learn::split::train_test_split;
use ailab::learn::Metrics;
use anyhow::{bail, ensure, Context, Result};
use clap::Args;
use rand::thread_rng;
use serde::Deserialize;
use std::path::PathBuf;

const TEST_FRACTION: f64 = 0.4;

#[derive(Args)]
pub struct ShoppingCommand {
    /// The online shoppers CSV
    data: PathBuf,
}

#[derive(Deserialize)]
struct ShoppingRecord {
    #[serde(rename = "Administrative")]
    administrative: f64,
    #[serde(rename = "Administrative_Duration")]
    administrative_duration: f64,
    #[serde(rename = "Informational")]
    informational: f64,
    #[serde(rename = "Informational_Duration")]
    informational_duration: f64,
    #[serde(rename = "ProductRelated")]
    product_related: f64,
    #[serde(rename = "ProductRelated_Duration")]
    product_related_duration: f64,
    #[serde(rename = "BounceRates")]
    bounce_rates: f64,
    #[serde(rename = "ExitRates")]
    exit_rates: f64,
    #[serde(rename = "PageValues")]
    page_values: f64,
    #[serde(rename = "SpecialDay")]
    special_day: f64,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "OperatingSystems")]
    operating_systems: f64,
    #[serde(rename = "Browser")]
    browser: f64,
    #[serde(rename = "Region")]
    region: f64,
    #[serde(rename = "TrafficType")]
    traffic_type: f64,
    #[serde(rename = "VisitorType")]
    visitor_type: String,
    #[serde(rename = "Weekend")]
    weekend: String,
    #[serde(rename = "Revenue")]
    revenue: String,
}

/// Month index 0-11; the dataset spells June out
fn month_index(month: &str) -> Result<f64> {
    let index = match month {
        "Jan" => 0,
        "Feb" => 1,
        "Mar" => 2,
        "Apr" => 3,
        "May" => 4,
        "June" => 5,
        "Jul" => 6,
        "Aug" => 7,
        "Sep" => 8,
        "Oct" => 9,
        "Nov" => 10,
        "Dec" => 11,
        other => bail!("invalid month: {other:?}"),
    };
    Ok(index as f64)
}

fn flag(value: &str) -> Result<f64> {
    match value {
        "TRUE" => Ok(1.0),
        "FALSE" => Ok(0.0),
        other => bail!("invalid boolean: {other:?}"),
    }
}

fn load_data(cmd: &ShoppingCommand) -> Result<(Vec<Vec<f64>>, Vec<u32>)> {
    let mut evidence = Vec::new();
    let mut labels = Vec::new();

    let mut reader = csv::Reader::from_path(&cmd.data)?;
    for record in reader.deserialize() {
        let record: ShoppingRecord = record?;

        let returning = if record.visitor_type == "Returning_Visitor" {
            1.0
        } else {
            0.0
        };

        evidence.push(vec![
            record.administrative,
            record.administrative_duration,
            record.informational,
            record.informational_duration,
            record.product_related,
            record.product_related_duration,
            record.bounce_rates,
            record.exit_rates,
            record.page_values,
            record.special_day,
            month_index(&record.month)?,
            record.operating_systems,
            record.browser,
            record.region,
            record.traffic_type,
            returning,
            flag(&record.weekend)?,
        ]);
        labels.push(u32::from(record.revenue == "TRUE"));
    }

    Ok((evidence, labels))
}

pub fn run(cmd: ShoppingCommand) -> Result<()> {
    let (evidence, labels) = load_data(&cmd)
        .with_context(|| format!("failed to load {}", cmd.data.display()))?;
    ensure!(evidence.len() >= 2, "not enough samples to split");

    let mut rng = thread_rng();
    let (x_train, x_test, y_train, y_test) =
        train_test_split(&evidence, &labels, TEST_FRACTION, &mut rng);

    let model = KNearest::fit(1, x_train, y_train);
    let predictions = model.predict_batch(&x_test);
    let metrics = Metrics::evaluate(&y_test, &predictions);

    println!("Correct: {}", metrics.correct);
    println!("Incorrect: {}", metrics.incorrect);
    println!("True Positive Rate: {:.2}%", 100.0 * metrics.sensitivity);
    println!("True Negative Rate: {:.2}%", 100.0 * metrics.specificity);

    Ok(())
}
