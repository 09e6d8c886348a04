//! Turn moves.
//!
//! A [`Move`] is a value object: it carries the catalog entry it targets by
//! value and never mutates the catalog. The transition function in
//! `rules::transition` interprets moves against a state.

use serde::{Deserialize, Serialize};

use super::action::Action;

/// One turn's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Do nothing.
    Wait,
    /// Restore every exhausted Cast spell.
    Rest,
    /// Play a Cast or Brew action, `times` >= 1 applications.
    Play { action: Action, times: u32 },
    /// Learn a tome entry into a new Cast spell.
    Learn(Action),
}

impl Move {
    /// Play an action once.
    #[must_use]
    pub fn play(action: Action) -> Self {
        Self::Play { action, times: 1 }
    }

    /// Play an action `times` times.
    #[must_use]
    pub fn play_times(action: Action, times: u32) -> Self {
        debug_assert!(times >= 1);
        Self::Play { action, times }
    }

    /// The id of the targeted catalog entry, if any.
    #[must_use]
    pub fn action_id(&self) -> Option<i32> {
        match self {
            Move::Wait | Move::Rest => None,
            Move::Play { action, .. } | Move::Learn(action) => Some(action.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ingredients;

    #[test]
    fn test_action_id() {
        let cast = Action::cast(42, Ingredients::new(2, 0, 0, 0));

        assert_eq!(Move::Wait.action_id(), None);
        assert_eq!(Move::Rest.action_id(), None);
        assert_eq!(Move::play(cast).action_id(), Some(42));
        assert_eq!(Move::Learn(cast).action_id(), Some(42));
    }

    #[test]
    fn test_play_times() {
        let cast = Action::cast(7, Ingredients::new(-1, 1, 0, 0)).with_repeatable();
        let mv = Move::play_times(cast, 3);

        match mv {
            Move::Play { action, times } => {
                assert_eq!(action.id, 7);
                assert_eq!(times, 3);
            }
            Move::Wait | Move::Rest | Move::Learn(_) => panic!("expected Play"),
        }
    }
}
