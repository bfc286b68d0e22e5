use super::outcome::Outcome;
use std::{cmp::Ordering, ops::Neg};

/// The result of a search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<Value> {
    /// The search reached a terminal state. The true outcome is known
    Terminal(Outcome),
    /// The search stopped at the depth limit and the value comes from an
    /// evaluator
    Heuristic(Value),
}

use Outcome::*;
use SearchResult::*;

impl<Value: PartialOrd> PartialOrd for SearchResult<Value> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Terminal(left), Terminal(right)) => left.partial_cmp(right),
            (Heuristic(left), Heuristic(right)) => left.partial_cmp(right),

            // Prefer a proven win over any evaluation, and any evaluation
            // over a proven draw or loss
            (Terminal(Win), Heuristic(_)) => Some(Ordering::Greater),
            (Terminal(_), Heuristic(_)) => Some(Ordering::Less),
            (Heuristic(_), Terminal(Win)) => Some(Ordering::Less),
            (Heuristic(_), Terminal(_)) => Some(Ordering::Greater),
        }
    }
}

impl<Value: Neg<Output = Value>> Neg for SearchResult<Value> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Terminal(outcome) => Terminal(-outcome),
            Heuristic(value) => Heuristic(-value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders() {
        type R = SearchResult<i32>;

        // Win > eval > Draw > Loss
        assert!(R::Terminal(Win) > R::Heuristic(1));
        assert!(R::Heuristic(1) > R::Heuristic(-1));
        assert!(R::Heuristic(-1) > R::Terminal(Draw));
        assert!(R::Terminal(Draw) > R::Terminal(Loss));
    }
}
