use ailab::text::ngram::NgramModel;
use ailab::text::tokenize::words;
use anyhow::{ensure, Context, Result};
use clap::Args;
use rand::thread_rng;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct NgramCommand {
    /// A text file, or a directory of .txt files
    corpus: PathBuf,

    /// Model order
    #[arg(long, default_value_t = 3)]
    n: usize,

    /// Number of samples to generate
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Maximum tokens per sample
    #[arg(long, default_value_t = 20)]
    length: usize,
}

fn load_corpus(cmd: &NgramCommand) -> Result<String> {
    if cmd.corpus.is_dir() {
        let mut contents = String::new();
        for entry in fs::read_dir(&cmd.corpus)? {
            let path = entry?.path();
            if path.extension().map_or(true, |ext| ext != "txt") {
                continue;
            }
            contents.push_str(&fs::read_to_string(&path)?);
            contents.push('\n');
        }
        Ok(contents)
    } else {
        Ok(fs::read_to_string(&cmd.corpus)?)
    }
}

pub fn run(cmd: NgramCommand) -> Result<()> {
    ensure!(cmd.n >= 2, "the model order must be at least 2");

    let contents = load_corpus(&cmd)
        .with_context(|| format!("failed to load {}", cmd.corpus.display()))?;
    let tokens = words(&contents);
    ensure!(
        tokens.len() >= cmd.n,
        "the corpus is too small for {}-grams",
        cmd.n
    );

    let model = NgramModel::train(cmd.n, &tokens);
    println!(
        "Trained an order-{} model with {} contexts.",
        model.order(),
        model.context_count()
    );

    let mut rng = thread_rng();
    for sample in 1..=cmd.samples {
        println!("{sample}: {}", model.generate(cmd.length, &mut rng).join(" "));
    }

    Ok(())
}
