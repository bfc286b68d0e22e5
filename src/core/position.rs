use super::outcome::Outcome;

/// A game position. It must contain all the information needed to continue
/// playing (the board, the player to move, etc.)
pub trait Position: Clone {
    type Action: Clone;

    /// Generates the starting position for the game
    fn initial() -> Self;

    /// Lists all valid actions from the current position
    fn valid_actions(&self) -> Vec<Self::Action>;

    /// Returns a new position after the given action is applied
    ///
    /// The point of view always changes to the other player, so if the move
    /// just played won the game, the resulting position's `status()` reports
    /// a loss.
    fn apply_action(&self, action: &Self::Action) -> Self;

    /// Returns the status of the position from the POV of the player to
    /// move, or `None` while the game is still being played
    fn status(&self) -> Option<Outcome>;
}
