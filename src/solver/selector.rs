//! Greedy guess selection
//!
//! Picks the guess whose outcome tree has the lowest collision score against
//! the words still consistent with the feedback.

use super::cache::GuessCache;
use super::matcher::matches;
use super::mode::Mode;
use super::tree::{build_tree, score_tree};
use crate::core::{ConstraintSet, Word};
use crate::error::SolverError;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Score reported when no guess beats the fallback, and for a forced answer
pub const FALLBACK_SCORE: f64 = 1.0;

/// Below this many candidates the guess pool shrinks to the candidates themselves
///
/// With so few words left, a guess that can win outright beats one that only
/// splits the rest.
pub const SHORTLIST_THRESHOLD: usize = 3;

/// A chosen guess and the candidates it was chosen against
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult<'w> {
    pub score: f64,
    pub word: &'w Word,
    pub list: Vec<&'w Word>,
}

/// Guess selector over a fixed vocabulary
///
/// Selections are memoized in the owned [`GuessCache`]; a repeated
/// `(constraints, mode)` pair returns the stored result without scoring.
pub struct GuessSelector<'w> {
    guesses: &'w [Word],
    answers: &'w [Word],
    cache: GuessCache<'w>,
    evaluations: AtomicUsize,
}

impl<'w> GuessSelector<'w> {
    /// Create a selector with an empty cache
    ///
    /// # Parameters
    /// - `guesses`: every guessable word, in the order that breaks ties
    /// - `answers`: the words that can be the answer, also in vocabulary order
    #[must_use]
    pub fn new(guesses: &'w [Word], answers: &'w [Word]) -> Self {
        Self::with_cache(guesses, answers, GuessCache::new())
    }

    #[must_use]
    pub const fn with_cache(guesses: &'w [Word], answers: &'w [Word], cache: GuessCache<'w>) -> Self {
        Self {
            guesses,
            answers,
            cache,
            evaluations: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &GuessCache<'w> {
        &self.cache
    }

    /// Number of times the scoring loop has run (cache hits excluded)
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Possible answers consistent with `constraints`
    #[must_use]
    pub fn candidates(&self, constraints: &ConstraintSet) -> Vec<&'w Word> {
        matches(self.answers, constraints.as_slice())
    }

    /// Choose the next guess
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if no possible answer is consistent
    /// with `constraints`.
    ///
    /// # Examples
    /// ```
    /// use wordle_collision::core::{ConstraintSet, Word};
    /// use wordle_collision::solver::{GuessSelector, Mode};
    ///
    /// let vocabulary: Vec<Word> = ["cigar", "rebut", "sissy", "humph"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let selector = GuessSelector::new(&vocabulary, &vocabulary);
    ///
    /// let result = selector.select(&ConstraintSet::new(), Mode::Hard).unwrap();
    /// assert_eq!(result.list.len(), 4);
    /// assert!(result.score < 1.0);
    /// ```
    pub fn select(
        &self,
        constraints: &ConstraintSet,
        mode: Mode,
    ) -> Result<Arc<GuessResult<'w>>, SolverError> {
        if let Some(hit) = self.cache.get(constraints, mode) {
            return Ok(hit);
        }

        let result = self.compute(constraints, mode)?;
        Ok(self.cache.insert(constraints.clone(), mode, result))
    }

    fn compute(
        &self,
        constraints: &ConstraintSet,
        mode: Mode,
    ) -> Result<GuessResult<'w>, SolverError> {
        let filtered = self.candidates(constraints);

        match filtered.as_slice() {
            [] => {
                return Err(SolverError::NoCandidates {
                    constraints: constraints.len(),
                });
            }
            &[only] => {
                return Ok(GuessResult {
                    score: FALLBACK_SCORE,
                    word: only,
                    list: filtered.clone(),
                });
            }
            _ => {}
        }

        let pool: Vec<&'w Word> = if mode == Mode::Hard || filtered.len() < SHORTLIST_THRESHOLD {
            filtered.clone()
        } else {
            self.guesses.iter().collect()
        };

        self.evaluations.fetch_add(1, Ordering::Relaxed);
        let (score, word) = best_guess(&pool, &filtered).ok_or(SolverError::NoCandidates {
            constraints: constraints.len(),
        })?;

        Ok(GuessResult {
            score,
            word,
            list: filtered,
        })
    }
}

/// Lowest-scoring guess in `pool` against `candidates`
///
/// `pool[0]` is the fallback and is not scored; any other guess replaces it
/// only with a score strictly below [`FALLBACK_SCORE`]. Among equal scores
/// the earliest guess wins, regardless of how rayon splits the work.
///
/// Returns `None` if the pool is empty.
#[must_use]
pub fn best_guess<'w>(pool: &[&'w Word], candidates: &[&Word]) -> Option<(f64, &'w Word)> {
    let fallback = *pool.first()?;

    let best = pool
        .par_iter()
        .enumerate()
        .skip(1)
        .map(|(index, &guess)| (score_tree(&build_tree(guess, candidates)), index))
        .min_by(|(a_score, a_index), (b_score, b_index)| {
            a_score.total_cmp(b_score).then(a_index.cmp(b_index))
        });

    match best {
        Some((score, index)) if score < FALLBACK_SCORE => Some((score, pool[index])),
        _ => Some((FALLBACK_SCORE, fallback)),
    }
}
