/// Evaluates a position into a heuristic value
pub trait PositionEvaluator<Position, Value> {
    fn eval(&self, position: &Position) -> Value;
}

/// Evaluator for full-depth searches, where the horizon is never reached
pub struct NullEvaluator;

impl<Position> PositionEvaluator<Position, i32> for NullEvaluator {
    fn eval(&self, _: &Position) -> i32 {
        unreachable!("full-depth searches never evaluate a position")
    }
}
