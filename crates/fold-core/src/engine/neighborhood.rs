use super::evaluate::Evaluator;
use crate::core::models::step::{Folding, Step};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws a uniformly random folding: each of the `bond_count` steps is an
/// independent uniform choice over the six codes.
pub(crate) fn random_folding<R: Rng + ?Sized>(bond_count: usize, rng: &mut R) -> Folding {
    let steps = (0..bond_count)
        .map(|_| Step::ALL[rng.gen_range(0..Step::ALL.len())])
        .collect();
    Folding::new(steps)
}

/// Draws random foldings until one validates, returning it with its score.
/// Gives up after `max_attempts` draws.
pub(crate) fn random_valid_folding<R: Rng + ?Sized>(
    evaluator: &Evaluator<'_>,
    max_attempts: usize,
    rng: &mut R,
) -> Option<(Folding, i32)> {
    let bond_count = evaluator.sequence().bond_count();
    for _ in 0..max_attempts {
        let folding = random_folding(bond_count, rng);
        if let Ok(score) = evaluator.evaluate(&folding) {
            return Some((folding, score));
        }
    }
    None
}

/// The full single-position neighborhood: every bond reassigned to every
/// alternative step, 5 * len candidates. Validity is the caller's concern.
pub(crate) fn single_site_neighbors(folding: &Folding) -> Vec<Folding> {
    let mut neighbors = Vec::with_capacity(folding.len() * (Step::ALL.len() - 1));
    for (index, current) in folding.steps().iter().enumerate() {
        for step in Step::ALL {
            if step != *current {
                let mut neighbor = folding.clone();
                neighbor.set_step(index, step);
                neighbors.push(neighbor);
            }
        }
    }
    neighbors
}

/// One random single-position mutation: a random bond reassigned to a
/// uniformly random *different* step. Empty foldings are returned as-is.
pub(crate) fn random_mutation<R: Rng + ?Sized>(folding: &Folding, rng: &mut R) -> Folding {
    let mut mutated = folding.clone();
    if mutated.is_empty() {
        return mutated;
    }
    let index = rng.gen_range(0..mutated.len());
    let current = mutated.steps()[index];
    let alternatives: Vec<Step> = Step::ALL.iter().copied().filter(|&s| s != current).collect();
    if let Some(&step) = alternatives.choose(rng) {
        mutated.set_step(index, step);
    }
    mutated
}

/// Samples one frame chunk of `len` random steps. When `forbid_reverse` is
/// set, each position avoids undoing the step before it (`prev` seeds the
/// first position), which skips the trivially self-intersecting candidates.
pub(crate) fn random_chunk<R: Rng + ?Sized>(
    len: usize,
    prev: Option<Step>,
    forbid_reverse: bool,
    rng: &mut R,
) -> Vec<Step> {
    let mut chunk = Vec::with_capacity(len);
    let mut last = prev;
    for _ in 0..len {
        let step = loop {
            let candidate = Step::ALL[rng.gen_range(0..Step::ALL.len())];
            match last {
                Some(previous) if forbid_reverse && candidate == previous.reverse() => continue,
                _ => break candidate,
            }
        };
        chunk.push(step);
        last = Some(step);
    }
    chunk
}
