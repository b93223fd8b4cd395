//! Non-repeating random task selector.
//!
//! # Responsibility
//! - Pick a uniformly random task from a deck.
//! - Never show the same task twice in a row on "other task" requests.
//!
//! # Invariants
//! - After the first selection `last_index` is always set.
//! - `select_other` never returns `last_index` for decks with 2+ entries.
//! - Single-entry decks are rejected by `select_other` instead of spinning.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{SelectorError, SelectorResult};
use crate::model::task::{TaskList, TaskPick};

/// Selection bookkeeping for one screen session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_index: Option<usize>,
    pub last_index: Option<usize>,
}

/// Random task picker bound to one deck.
///
/// Generic over the random source so tests can inject a seeded generator.
#[derive(Debug)]
pub struct TaskSelector<R: Rng = StdRng> {
    tasks: TaskList,
    state: SelectionState,
    rng: R,
}

impl TaskSelector<StdRng> {
    /// Creates a selector seeded from OS entropy.
    pub fn new(tasks: TaskList) -> Self {
        Self::with_rng(tasks, StdRng::from_entropy())
    }
}

impl<R: Rng> TaskSelector<R> {
    pub fn with_rng(tasks: TaskList, rng: R) -> Self {
        Self {
            tasks,
            state: SelectionState::default(),
            rng,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the task currently on screen, if any was selected yet.
    pub fn current(&self) -> Option<TaskPick> {
        let index = self.state.current_index?;
        self.pick_at(index)
    }

    /// Draws the first task of a session; no exclusion applies.
    ///
    /// # Errors
    /// - `SelectorError::EmptyList` when the deck has no entries.
    pub fn select_initial(&mut self) -> SelectorResult<TaskPick> {
        let len = self.tasks.len();
        if len == 0 {
            return Err(SelectorError::EmptyList);
        }

        let index = self.rng.gen_range(0..len);
        debug!("event=task_select module=selector status=ok mode=initial index={index} deck_len={len}");
        Ok(self.commit(index))
    }

    /// Draws a task different from the previously shown one.
    ///
    /// Uses rejection sampling, which terminates quickly for small decks of
    /// two or more entries.
    ///
    /// # Errors
    /// - `SelectorError::EmptyList` when the deck has no entries.
    /// - `SelectorError::SingleElement` when the deck has exactly one entry.
    pub fn select_other(&mut self) -> SelectorResult<TaskPick> {
        let len = self.tasks.len();
        match len {
            0 => return Err(SelectorError::EmptyList),
            1 => return Err(SelectorError::SingleElement),
            _ => {}
        }

        let mut attempts = 1_u32;
        let mut index = self.rng.gen_range(0..len);
        while Some(index) == self.state.last_index {
            index = self.rng.gen_range(0..len);
            attempts += 1;
        }
        debug!(
            "event=task_select module=selector status=ok mode=other index={index} previous={:?} attempts={attempts}",
            self.state.last_index
        );
        Ok(self.commit(index))
    }

    fn commit(&mut self, index: usize) -> TaskPick {
        self.state.current_index = Some(index);
        self.state.last_index = Some(index);
        // `index` comes from `gen_range(0..len)`, so the lookup always hits.
        let text = self.tasks.get(index).map(str::to_string).unwrap_or_default();
        TaskPick { index, text }
    }

    fn pick_at(&self, index: usize) -> Option<TaskPick> {
        self.tasks.get(index).map(|text| TaskPick {
            index,
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionState, TaskSelector};
    use crate::model::task::TaskList;
    use crate::selector::SelectorError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(tasks: &[&str], seed: u64) -> TaskSelector<StdRng> {
        let deck = TaskList::new(tasks.iter().copied()).expect("non-empty deck");
        TaskSelector::with_rng(deck, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn fresh_selector_has_no_selection() {
        let selector = seeded(&["a", "b"], 1);
        assert_eq!(selector.state(), SelectionState::default());
        assert_eq!(selector.current(), None);
    }

    #[test]
    fn select_initial_sets_last_and_current_index() {
        let mut selector = seeded(&["a", "b", "c"], 7);
        let pick = selector.select_initial().expect("initial pick");

        assert!(pick.index < 3);
        assert_eq!(selector.state().last_index, Some(pick.index));
        assert_eq!(selector.current(), Some(pick));
    }

    #[test]
    fn select_initial_on_single_entry_deck_succeeds() {
        let mut selector = seeded(&["only"], 3);
        let pick = selector.select_initial().expect("initial pick");
        assert_eq!(pick.index, 0);
        assert_eq!(pick.text, "only");
    }

    #[test]
    fn select_other_rejects_single_entry_deck() {
        let mut selector = seeded(&["only"], 3);
        selector.select_initial().expect("initial pick");

        let err = selector
            .select_other()
            .expect_err("single-entry deck must not loop");
        assert_eq!(err, SelectorError::SingleElement);
        assert_eq!(selector.state().last_index, Some(0));
    }

    #[test]
    fn select_other_without_initial_pick_draws_freely() {
        let mut selector = seeded(&["a", "b"], 11);
        let pick = selector.select_other().expect("other pick");
        assert!(pick.index < 2);
        assert_eq!(selector.state().last_index, Some(pick.index));
    }

    #[test]
    fn picks_carry_the_deck_text_at_their_index() {
        let mut selector = seeded(&["a", "b", "c", "d"], 23);
        let first = selector.select_initial().expect("initial pick");
        assert_eq!(selector.tasks().get(first.index), Some(first.text.as_str()));

        for _ in 0..20 {
            let other = selector.select_other().expect("other pick");
            assert_eq!(selector.tasks().get(other.index), Some(other.text.as_str()));
            assert_eq!(selector.current(), Some(other));
        }
    }

    #[test]
    fn two_entry_deck_alternates() {
        let mut selector = seeded(&["a", "b"], 5);
        let mut previous = selector.select_initial().expect("initial pick").index;
        for _ in 0..50 {
            let next = selector.select_other().expect("other pick").index;
            assert_eq!(next, 1 - previous);
            previous = next;
        }
    }
}
