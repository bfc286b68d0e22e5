use ailab::csp::crossword::Crossword;
use ailab::csp::solver::{render, Solver};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct CrosswordCommand {
    /// Grid file: `_` marks an open cell
    structure: PathBuf,

    /// Newline-separated word list
    words: PathBuf,

    /// Optional file the solved grid is written to
    output: Option<PathBuf>,
}

pub fn run(cmd: CrosswordCommand) -> Result<()> {
    let structure = fs::read_to_string(&cmd.structure)
        .with_context(|| format!("failed to read {}", cmd.structure.display()))?;
    let words = fs::read_to_string(&cmd.words)
        .with_context(|| format!("failed to read {}", cmd.words.display()))?;

    let crossword = Crossword::parse(&structure, &words)?;
    let mut solver = Solver::new(&crossword);

    match solver.solve() {
        None => println!("No solution."),
        Some(assignment) => {
            let grid = render(&crossword, &assignment);
            print!("{grid}");
            if let Some(output) = cmd.output {
                fs::write(&output, grid)
                    .with_context(|| format!("failed to write {}", output.display()))?;
            }
        }
    }

    Ok(())
}
