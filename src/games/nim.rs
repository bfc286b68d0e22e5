use thiserror::Error;

/// An action is `(pile, count)`: take `count` objects from `pile`
pub type Action = (usize, u32);

#[derive(Debug, Error)]
#[error("invalid action: take {count} from pile {pile}")]
pub struct InvalidAction {
    pub pile: usize,
    pub count: u32,
}

/// Misere Nim: players alternate removing objects from a single pile, and
/// whoever removes the last object loses
#[derive(Debug, Clone)]
pub struct Nim {
    piles: Vec<u32>,
    player: u8,
    winner: Option<u8>,
}

impl Nim {
    pub fn new(piles: Vec<u32>) -> Self {
        Nim {
            piles,
            player: 0,
            winner: None,
        }
    }

    /// The classic starting piles
    pub fn default_piles() -> Vec<u32> {
        vec![1, 3, 5, 7]
    }

    /// All `(pile, count)` actions available in the given pile state
    pub fn available_actions(piles: &[u32]) -> Vec<Action> {
        let mut actions = Vec::new();
        for (pile, &size) in piles.iter().enumerate() {
            for count in 1..=size {
                actions.push((pile, count));
            }
        }
        actions
    }

    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Index of the player to move, 0 or 1
    pub fn player(&self) -> u8 {
        self.player
    }

    /// Index of the winning player once the game is over
    pub fn winner(&self) -> Option<u8> {
        self.winner
    }

    /// Applies an action and passes the turn. Taking the last object makes
    /// the other player the winner
    pub fn apply(&mut self, action: Action) -> Result<(), InvalidAction> {
        let (pile, count) = action;
        let invalid = InvalidAction { pile, count };

        if self.winner.is_some() || pile >= self.piles.len() {
            return Err(invalid);
        }
        if count < 1 || count > self.piles[pile] {
            return Err(invalid);
        }

        self.piles[pile] -= count;
        self.player = 1 - self.player;

        if self.piles.iter().all(|&size| size == 0) {
            self.winner = Some(self.player);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taking_the_last_object_loses() {
        let mut game = Nim::new(vec![1]);
        game.apply((0, 1)).unwrap();
        assert_eq!(game.winner(), Some(1));
    }

    #[test]
    fn rejects_overdraw() {
        let mut game = Nim::new(vec![2, 0]);
        assert!(game.apply((0, 3)).is_err());
        assert!(game.apply((1, 1)).is_err());
        assert!(game.apply((2, 1)).is_err());
        assert!(game.apply((0, 2)).is_ok());
    }

    #[test]
    fn available_actions_enumerates_every_take() {
        let actions = Nim::available_actions(&[1, 2]);
        assert_eq!(actions, vec![(0, 1), (1, 1), (1, 2)]);
    }
}
