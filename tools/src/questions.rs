use ailab::text::tfidf::{compute_idfs, top_files, top_sentences, Documents};
use ailab::text::tokenize::{sentences, tokenize};
use anyhow::{ensure, Context, Result};
use clap::Args;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const FILE_MATCHES: usize = 1;
const SENTENCE_MATCHES: usize = 1;

#[derive(Args)]
pub struct QuestionsCommand {
    /// Directory of .txt documents
    corpus: PathBuf,
}

fn load_files(directory: &Path) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let name = path
            .file_name()
            .expect("files have names")
            .to_string_lossy()
            .to_string();
        files.insert(name, fs::read_to_string(&path)?);
    }

    Ok(files)
}

pub fn run(cmd: QuestionsCommand) -> Result<()> {
    let files = load_files(&cmd.corpus)
        .with_context(|| format!("failed to load {}", cmd.corpus.display()))?;
    ensure!(!files.is_empty(), "the corpus has no .txt files");

    let file_words: Documents = files
        .iter()
        .map(|(name, contents)| (name.clone(), tokenize(contents)))
        .collect();
    let file_idfs = compute_idfs(&file_words);

    loop {
        print!("Query: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let query: HashSet<String> = tokenize(&line).into_iter().collect();
        if query.is_empty() {
            continue;
        }

        let matches = top_files(&query, &file_words, &file_idfs, FILE_MATCHES);

        // gather the sentences of the matching files
        let mut sentence_words = Documents::new();
        for name in &matches {
            for passage in files[name].lines() {
                for sentence in sentences(passage) {
                    let tokens = tokenize(&sentence);
                    if !tokens.is_empty() {
                        sentence_words.insert(sentence, tokens);
                    }
                }
            }
        }

        let sentence_idfs = compute_idfs(&sentence_words);
        for sentence in top_sentences(&query, &sentence_words, &sentence_idfs, SENTENCE_MATCHES) {
            println!("{sentence}");
        }
    }
}
