use ailab::prob::pagerank::{iterate_pagerank, sample_pagerank, Corpus, DAMPING, SAMPLES};
use anyhow::{ensure, Context, Result};
use clap::Args;
use rand::thread_rng;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct PagerankCommand {
    /// Directory of HTML pages linking to each other
    corpus: PathBuf,
}

/// Parses a directory of HTML pages into a link graph. Only links to other
/// pages of the corpus are kept, and self-links are dropped
fn crawl(directory: &Path) -> Result<Corpus> {
    let href = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("the pattern is valid");
    let mut corpus = Corpus::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != "html") {
            continue;
        }

        let name = path
            .file_name()
            .expect("files have names")
            .to_string_lossy()
            .to_string();
        let contents = fs::read_to_string(&path)?;

        let links: HashSet<String> = href
            .captures_iter(&contents)
            .map(|capture| capture[1].to_string())
            .filter(|link| *link != name)
            .collect();

        corpus.insert(name, links);
    }

    // only keep links to pages inside the corpus
    let pages: HashSet<String> = corpus.keys().cloned().collect();
    for links in corpus.values_mut() {
        links.retain(|link| pages.contains(link));
    }

    Ok(corpus)
}

pub fn run(cmd: PagerankCommand) -> Result<()> {
    let corpus = crawl(&cmd.corpus)
        .with_context(|| format!("failed to crawl {}", cmd.corpus.display()))?;
    ensure!(!corpus.is_empty(), "the corpus has no HTML pages");

    let mut rng = thread_rng();

    let ranks = sample_pagerank(&corpus, DAMPING, SAMPLES, &mut rng);
    println!("PageRank Results from Sampling (n = {SAMPLES})");
    for (page, rank) in &ranks {
        println!("  {page}: {rank:.4}");
    }

    let ranks = iterate_pagerank(&corpus, DAMPING);
    println!("PageRank Results from Iteration");
    for (page, rank) in &ranks {
        println!("  {page}: {rank:.4}");
    }

    Ok(())
}
