//! Per-turn decision driver.
//!
//! Glues the pieces together for one turn: consult the learning policy
//! first (a strong tome entry early on beats one searched move), then run
//! the time-boxed search and emit the first move of its best path.

use std::time::Duration;

use tracing::debug;

use crate::core::{GameState, Move};
use crate::policy::choose_learn;
use crate::search::{Clock, FrontierSearch};

/// Budget for the first turn; the referee grants extra start-up time.
pub const FIRST_TURN_BUDGET: Duration = Duration::from_millis(1000);

/// Budget for every later turn: 50 ms from the referee, minus a safety
/// margin for protocol I/O.
pub const TURN_BUDGET: Duration = Duration::from_millis(42);

/// Last turn on which learning is still worth a whole move.
pub const LEARN_PHASE_TURNS: u32 = 10;

/// Choose this turn's move.
pub fn choose_move<C: Clock>(
    search: &mut FrontierSearch<C>,
    state: &GameState,
    turn_start: Duration,
    budget: Duration,
) -> Move {
    if state.turn <= LEARN_PHASE_TURNS {
        if let Some(mv) = choose_learn(state) {
            debug!(turn = state.turn, ?mv, "learning instead of searching");
            return mv;
        }
    }

    let outcome = search.run(state, turn_start, budget);
    let mv = outcome.first_move();
    debug!(
        turn = state.turn,
        ?mv,
        rank = outcome.rank,
        path_len = outcome.path.len(),
        "searched move"
    );
    mv
}

/// Budget for a given 1-based turn number.
#[must_use]
pub fn budget_for_turn(turn: u32) -> Duration {
    if turn <= 1 {
        FIRST_TURN_BUDGET
    } else {
        TURN_BUDGET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Ingredients, Player};
    use crate::search::{ManualClock, SearchConfig};

    fn search() -> FrontierSearch<ManualClock> {
        FrontierSearch::with_clock(SearchConfig::default(), ManualClock::new())
    }

    fn base_state(turn: u32, actions: Vec<Action>) -> GameState {
        GameState::new(
            turn,
            Player::new(Ingredients::new(3, 0, 0, 0), 0),
            Player::new(Ingredients::new(3, 0, 0, 0), 0),
            actions,
        )
    }

    #[test]
    fn test_learning_preempts_search_early() {
        let tome = Action::learn(20, Ingredients::new(1, 1, 0, 0), 0, 0);
        let state = base_state(1, vec![tome]);

        let mv = choose_move(&mut search(), &state, Duration::ZERO, TURN_BUDGET);
        assert_eq!(mv, Move::Learn(tome));
    }

    #[test]
    fn test_learning_stops_after_early_game() {
        let tome = Action::learn(20, Ingredients::new(1, 1, 0, 0), 0, 0);
        let cast = Action::cast(78, Ingredients::new(0, 2, 0, 0));
        let state = base_state(LEARN_PHASE_TURNS + 1, vec![tome, cast]);

        let mv = choose_move(&mut search(), &state, Duration::ZERO, TURN_BUDGET);
        assert_ne!(mv, Move::Learn(tome));
    }

    #[test]
    fn test_budget_for_turn() {
        assert_eq!(budget_for_turn(1), FIRST_TURN_BUDGET);
        assert_eq!(budget_for_turn(2), TURN_BUDGET);
        assert_eq!(budget_for_turn(99), TURN_BUDGET);
    }
}
