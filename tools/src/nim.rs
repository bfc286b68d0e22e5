use ailab::games::nim::Nim;
use ailab::learn::qlearning::QLearner;
use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{thread_rng, Rng};
use std::io::{self, Write};

#[derive(Args)]
pub struct NimCommand {
    /// Number of self-play training games
    #[arg(long, default_value_t = 10_000)]
    games: usize,
}

fn prompt(message: &str) -> Result<u32> {
    loop {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }

        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Enter a number."),
        }
    }
}

fn print_piles(piles: &[u32]) {
    println!("Piles:");
    for (pile, size) in piles.iter().enumerate() {
        println!("Pile {pile}: {size}");
    }
}

pub fn run(cmd: NimCommand) -> Result<()> {
    let mut rng = thread_rng();
    let mut ai = QLearner::new(0.5, 0.1);

    let bar = ProgressBar::new(cmd.games as u64).with_style(
        ProgressStyle::with_template("Training: {bar:40} {pos}/{len}")
            .expect("the template is valid"),
    );
    let mut remaining = cmd.games;
    while remaining > 0 {
        let batch = remaining.min(100);
        ai.train(batch, &mut rng);
        remaining -= batch;
        bar.inc(batch as u64);
    }
    bar.finish();
    println!("Done training");

    let mut game = Nim::new(Nim::default_piles());
    let human: u8 = rng.gen_range(0..2);

    loop {
        println!();
        print_piles(game.piles());

        if game.player() == human {
            println!("Your Turn");
            loop {
                let pile = prompt("Choose Pile: ")? as usize;
                let count = prompt("Choose Count: ")?;
                match game.apply((pile, count)) {
                    Ok(()) => break,
                    Err(_) => println!("Invalid move, try again."),
                }
            }
        } else {
            println!("AI's Turn");
            let (pile, count) = ai.choose_action(game.piles(), false, &mut rng);
            println!("AI chose to take {count} from pile {pile}.");
            game.apply((pile, count)).expect("the AI picks valid moves");
        }

        if let Some(winner) = game.winner() {
            println!();
            println!("GAME OVER");
            if winner == human {
                println!("Winner: Human");
            } else {
                println!("Winner: AI");
            }
            return Ok(());
        }
    }
}
