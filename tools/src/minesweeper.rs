use ailab::logic::minesweeper::{Agent, Minefield};
use anyhow::{ensure, Result};
use clap::Args;
use rand::thread_rng;

#[derive(Args)]
pub struct MinesweeperCommand {
    #[arg(long, default_value_t = 8)]
    height: usize,

    #[arg(long, default_value_t = 8)]
    width: usize,

    #[arg(long, default_value_t = 8)]
    mines: usize,
}

pub fn run(cmd: MinesweeperCommand) -> Result<()> {
    ensure!(cmd.height > 0 && cmd.width > 0, "the board must be non-empty");
    ensure!(
        cmd.mines < cmd.height * cmd.width,
        "the board must have a safe cell"
    );

    let mut rng = thread_rng();
    let field = Minefield::random(cmd.height, cmd.width, cmd.mines, &mut rng);
    let mut agent = Agent::new(cmd.height, cmd.width);

    loop {
        let (cell, safe) = match agent.safe_move(&mut rng) {
            Some(cell) => (cell, true),
            None => match agent.random_move(&mut rng) {
                Some(cell) => (cell, false),
                None => break,
            },
        };

        if safe {
            println!("Making safe move: ({}, {})", cell.0, cell.1);
        } else {
            println!("Making random move: ({}, {})", cell.0, cell.1);
        }

        if field.is_mine(cell) {
            println!("Hit a mine at ({}, {}). Game lost.", cell.0, cell.1);
            return Ok(());
        }

        agent.add_knowledge(cell, field.nearby_mines(cell));
    }

    // no playable cell is left: everything unplayed is a known mine
    println!("All safe cells opened.");
    let mut flagged: Vec<_> = agent.mines().iter().copied().collect();
    flagged.sort();
    for (i, j) in flagged {
        println!("Mine flagged at ({i}, {j})");
    }

    if agent.mines() == field.mines() {
        println!("Game won.");
    }

    Ok(())
}
