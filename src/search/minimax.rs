use crate::core::evaluator::PositionEvaluator;
use crate::core::position::Position;
use crate::core::result::SearchResult;
use std::ops::Neg;

fn minimax_impl<P, V, E>(
    position: &P,
    max_depth: usize,
    mut alpha: Option<SearchResult<V>>,
    beta: Option<SearchResult<V>>,
    evaluator: &E,
) -> (SearchResult<V>, Option<P::Action>)
where
    P: Position,
    V: Clone + PartialOrd + Neg<Output = V>,
    E: PositionEvaluator<P, V>,
{
    // If the game is over, return the true outcome
    if let Some(outcome) = position.status() {
        return (SearchResult::Terminal(outcome), None);
    }

    // If we've reached the maximum depth, return the evaluation
    if max_depth == 0 {
        return (SearchResult::Heuristic(evaluator.eval(position)), None);
    }

    let mut best: Option<(SearchResult<V>, Option<P::Action>)> = None;

    for action in position.valid_actions() {
        let (opponent_result, _) = minimax_impl(
            &position.apply_action(&action),
            max_depth - 1,
            // the window is negated and swapped for the opponent
            beta.clone().map(Neg::neg),
            alpha.clone().map(Neg::neg),
            evaluator,
        );
        let branch = -opponent_result;

        if alpha.as_ref().map_or(true, |a| branch > *a) {
            alpha = Some(branch.clone());
        }

        if best.as_ref().map_or(true, |(b, _)| branch > *b) {
            best = Some((branch, Some(action)));
        }

        // cutoff: the opponent already has a better line elsewhere
        if let Some(ref beta) = beta {
            if alpha.as_ref().expect("alpha was raised above") >= beta {
                break;
            }
        }
    }

    best.expect("non-terminal positions have at least one valid action")
}

/// Negamax search with alpha-beta pruning.
///
/// Searches `max_depth` plies; positions at the horizon are scored by the
/// evaluator. Returns the value of the position from the POV of the player
/// to move together with the best action. The action is `None` when the
/// position is already terminal.
pub fn minimax<P, V, E>(
    position: &P,
    max_depth: usize,
    evaluator: &E,
) -> (SearchResult<V>, Option<P::Action>)
where
    P: Position,
    V: Clone + PartialOrd + Neg<Output = V>,
    E: PositionEvaluator<P, V>,
{
    minimax_impl(position, max_depth, None, None, evaluator)
}
