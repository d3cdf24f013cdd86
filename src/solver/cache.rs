//! Memoized guess selections
//!
//! Games over the same vocabulary keep reaching identical feedback (every game
//! starts from the empty set), so selections are stored by the value of
//! their inputs and shared between callers.

use super::mode::Mode;
use super::selector::GuessResult;
use crate::core::ConstraintSet;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    constraints: ConstraintSet,
    mode: Mode,
}

/// Append-only table of selections keyed by `(constraints, mode)`
///
/// Entries are never evicted. The first result stored for a key is the one
/// every later lookup sees.
#[derive(Debug, Default)]
pub struct GuessCache<'w> {
    entries: Mutex<FxHashMap<CacheKey, Arc<GuessResult<'w>>>>,
}

impl<'w> GuessCache<'w> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, FxHashMap<CacheKey, Arc<GuessResult<'w>>>> {
        // Entries are only ever inserted whole, so a poisoned map is still valid
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a stored selection
    #[must_use]
    pub fn get(&self, constraints: &ConstraintSet, mode: Mode) -> Option<Arc<GuessResult<'w>>> {
        let key = CacheKey {
            constraints: constraints.clone(),
            mode,
        };
        self.entries().get(&key).cloned()
    }

    /// Store a selection unless one is already present, returning the stored one
    pub fn insert(
        &self,
        constraints: ConstraintSet,
        mode: Mode,
        result: GuessResult<'w>,
    ) -> Arc<GuessResult<'w>> {
        let key = CacheKey { constraints, mode };
        Arc::clone(
            self.entries()
                .entry(key)
                .or_insert_with(|| Arc::new(result)),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Forget every stored selection
    pub fn clear(&self) {
        self.entries().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Constraint, Word};

    fn result<'w>(word: &'w Word, score: f64) -> GuessResult<'w> {
        GuessResult {
            score,
            word,
            list: vec![word],
        }
    }

    #[test]
    fn lookups_are_by_value() {
        let word = Word::new("cigar").unwrap();
        let cache = GuessCache::new();

        let mut stored = ConstraintSet::new();
        stored
            .extend_from_guess([Constraint::new(Color::Green, 0, b'c', 1).unwrap()])
            .unwrap();
        cache.insert(stored.clone(), Mode::Easy, result(&word, 0.5));

        let mut rebuilt = ConstraintSet::new();
        rebuilt
            .extend_from_guess([Constraint::new(Color::Green, 0, b'c', 1).unwrap()])
            .unwrap();

        assert!(cache.get(&rebuilt, Mode::Easy).is_some());
        assert!(cache.get(&rebuilt, Mode::Hard).is_none());
        assert!(cache.get(&ConstraintSet::new(), Mode::Easy).is_none());
    }

    #[test]
    fn first_insert_wins() {
        let first = Word::new("cigar").unwrap();
        let second = Word::new("rebut").unwrap();
        let cache = GuessCache::new();

        let a = cache.insert(ConstraintSet::new(), Mode::Hard, result(&first, 0.5));
        let b = cache.insert(ConstraintSet::new(), Mode::Hard, result(&second, 0.1));

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.word.text(), "cigar");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let word = Word::new("cigar").unwrap();
        let cache = GuessCache::new();
        cache.insert(ConstraintSet::new(), Mode::Easy, result(&word, 1.0));
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }
}
