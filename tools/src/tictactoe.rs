use ailab::core::evaluator::NullEvaluator;
use ailab::core::outcome::Outcome;
use ailab::core::position::Position;
use ailab::games::mnk::TicTacToe;
use ailab::search::minimax::minimax;
use anyhow::{bail, Result};
use clap::Args;
use std::io::{self, Write};

#[derive(Args)]
pub struct TictactoeCommand {
    /// Mark the human plays
    #[arg(long, default_value_t = 'X')]
    play_as: char,
}

fn print_board(board: &TicTacToe) {
    // cells are numbered 1-9, row by row
    for i in 0..3 {
        let row: Vec<String> = (0..3)
            .map(|j| match board.at(i * 3 + j) {
                Some(mark) => mark.to_string(),
                None => (i * 3 + j + 1).to_string(),
            })
            .collect();
        println!(" {} ", row.join(" | "));
        if i < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn read_move(board: &TicTacToe) -> Result<usize> {
    loop {
        print!("Your move (1-9): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }

        match line.trim().parse::<usize>() {
            Ok(cell) if (1..=9).contains(&cell) && board.at(cell - 1).is_none() => {
                return Ok(cell - 1);
            }
            _ => println!("That cell isn't available."),
        }
    }
}

pub fn run(cmd: TictactoeCommand) -> Result<()> {
    let human = match cmd.play_as {
        'X' | 'x' => 'X',
        'O' | 'o' => 'O',
        other => bail!("invalid mark: {other}"),
    };

    let mut board = TicTacToe::initial();

    loop {
        print_board(&board);

        if let Some(outcome) = board.status() {
            match outcome {
                Outcome::Draw => println!("Game over: draw."),
                // the player to move lost, so the previous player won
                _ => {
                    let winner = if board.to_move() == 'X' { 'O' } else { 'X' };
                    println!("Game over: {winner} wins.");
                }
            }
            return Ok(());
        }

        let action = if board.to_move() == human {
            read_move(&board)?
        } else {
            println!("Thinking...");
            let (_, action) = minimax::<_, i32, _>(&board, 9, &NullEvaluator);
            action.expect("non-terminal positions have a best action")
        };

        board = board.apply_action(&action);
    }
}
