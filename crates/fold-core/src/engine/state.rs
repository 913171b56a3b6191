use crate::core::models::step::Folding;

/// A folding together with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub folding: Folding,
    pub score: i32,
}

/// Outcome of one bounded unit of strategy work.
///
/// `best` is `None` when the unit exhausted its attempt budget without a
/// single valid folding; that is the explicit no-solution outcome, never a
/// sentinel score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub best: Option<Solution>,
    pub observed_scores: Vec<i32>,
}

impl RunReport {
    /// Records an observed score and offers the candidate as a new best.
    pub fn record(&mut self, folding: &Folding, score: i32) {
        self.observed_scores.push(score);
        self.offer(folding, score);
    }

    /// Offers a candidate for best-tracking without recording its score.
    pub fn offer(&mut self, folding: &Folding, score: i32) {
        let improved = match &self.best {
            Some(best) => score < best.score,
            None => true,
        };
        if improved {
            self.best = Some(Solution {
                folding: folding.clone(),
                score,
            });
        }
    }

    /// Folds another unit's results into this aggregate.
    pub fn merge(&mut self, other: RunReport) {
        self.observed_scores.extend(other.observed_scores);
        if let Some(solution) = other.best {
            self.offer(&solution.folding, solution.score);
        }
    }
}
