mod crossword;
mod degrees;
mod heredity;
mod knights;
mod minesweeper;
mod ngram;
mod nim;
mod pagerank;
mod ppm;
mod questions;
mod shopping;
mod tictactoe;
mod traffic;

use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Finds the shortest chain of co-starring actors between two people
    Degrees(degrees::DegreesCommand),
    /// Plays tic-tac-toe against an optimal alpha-beta player
    Tictactoe(tictactoe::TictactoeCommand),
    /// Solves the knights-and-knaves puzzles by model checking
    Knights(knights::KnightsCommand),
    /// Lets the knowledge agent play a random minesweeper board
    Minesweeper(minesweeper::MinesweeperCommand),
    /// Ranks the pages of an HTML corpus by sampling and by iteration
    Pagerank(pagerank::PagerankCommand),
    /// Infers gene and trait probabilities for a family
    Heredity(heredity::HeredityCommand),
    /// Fills a crossword grid from a word list
    Crossword(crossword::CrosswordCommand),
    /// Predicts purchase intent with a nearest-neighbor classifier
    Shopping(shopping::ShoppingCommand),
    /// Trains a Q-learning player for Nim, then plays against you
    Nim(nim::NimCommand),
    /// Trains a sign classifier on a directory of PPM images
    Traffic(traffic::TrafficCommand),
    /// Answers queries over a text corpus with TF-IDF retrieval
    Questions(questions::QuestionsCommand),
    /// Generates text from an n-gram model of a corpus
    Ngram(ngram::NgramCommand),
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    match args.command {
        Commands::Degrees(cmd) => degrees::run(cmd),
        Commands::Tictactoe(cmd) => tictactoe::run(cmd),
        Commands::Knights(cmd) => knights::run(cmd),
        Commands::Minesweeper(cmd) => minesweeper::run(cmd),
        Commands::Pagerank(cmd) => pagerank::run(cmd),
        Commands::Heredity(cmd) => heredity::run(cmd),
        Commands::Crossword(cmd) => crossword::run(cmd),
        Commands::Shopping(cmd) => shopping::run(cmd),
        Commands::Nim(cmd) => nim::run(cmd),
        Commands::Traffic(cmd) => traffic::run(cmd),
        Commands::Questions(cmd) => questions::run(cmd),
        Commands::Ngram(cmd) => ngram::run(cmd),
    }
}
