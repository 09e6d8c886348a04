//! Move serialization and the inverse parser.
//!
//! Exactly one output line per turn: `WAIT`, `REST`, `BREW <id>`,
//! `CAST <id>`, `CAST <id> <times>` (repeatable spell applied more than
//! once), or `LEARN <id>`.

use crate::core::{ActionKind, GameState, Move};

use super::reader::ParseError;

/// Serialize a move to its protocol line (without the newline).
#[must_use]
pub fn format_move(mv: &Move) -> String {
    match mv {
        Move::Wait => "WAIT".to_string(),
        Move::Rest => "REST".to_string(),
        Move::Learn(action) => format!("LEARN {}", action.id),
        Move::Play { action, times } => match action.kind {
            ActionKind::Brew => format!("BREW {}", action.id),
            ActionKind::Cast | ActionKind::OpponentCast => {
                if action.repeatable && *times > 1 {
                    format!("CAST {} {}", action.id, times)
                } else {
                    format!("CAST {}", action.id)
                }
            }
            // A tome entry is never played directly; the closest line is
            // the learn command for it.
            ActionKind::Learn => format!("LEARN {}", action.id),
        },
    }
}

/// Parse a protocol line back into a move against `state`'s catalog.
///
/// Used by tests and replay debugging; the live adapter only serializes.
pub fn parse_move(line: &str, state: &GameState) -> Result<Move, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let command = *tokens.first().ok_or(ParseError::UnexpectedEof)?;
    match command {
        "WAIT" => Ok(Move::Wait),
        "REST" => Ok(Move::Rest),
        "BREW" | "CAST" | "LEARN" => {
            let id_token = tokens.get(1).ok_or(ParseError::UnexpectedEof)?;
            let id: i32 = id_token.parse().map_err(|_| ParseError::InvalidInt {
                token: id_token.to_string(),
            })?;
            let action = *state
                .find_action(id)
                .ok_or(ParseError::UnknownActionId(id))?;

            match command {
                "BREW" => Ok(Move::play(action)),
                "LEARN" => Ok(Move::Learn(action)),
                _ => {
                    let times: u32 = match tokens.get(2) {
                        Some(token) => token.parse().map_err(|_| ParseError::InvalidInt {
                            token: token.to_string(),
                        })?,
                        None => 1,
                    };
                    if times == 0 {
                        return Err(ParseError::InvalidRepeatCount(times));
                    }
                    Ok(Move::play_times(action, times))
                }
            }
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, GameState, Ingredients, Player};

    fn catalog_state() -> GameState {
        GameState::new(
            1,
            Player::new(Ingredients::new(3, 0, 0, 0), 0),
            Player::default(),
            vec![
                Action::brew(70, Ingredients::new(-2, -2, 0, -2), 15),
                Action::cast(78, Ingredients::new(2, 0, 0, 0)),
                Action::cast(79, Ingredients::new(-1, 1, 0, 0)).with_repeatable(),
                Action::learn(20, Ingredients::new(0, 2, 0, 0), 1, 0),
            ],
        )
    }

    #[test]
    fn test_format_basics() {
        let state = catalog_state();

        assert_eq!(format_move(&Move::Wait), "WAIT");
        assert_eq!(format_move(&Move::Rest), "REST");
        assert_eq!(format_move(&Move::play(*state.find_action(70).unwrap())), "BREW 70");
        assert_eq!(format_move(&Move::play(*state.find_action(78).unwrap())), "CAST 78");
        assert_eq!(
            format_move(&Move::Learn(*state.find_action(20).unwrap())),
            "LEARN 20"
        );
    }

    #[test]
    fn test_format_repeat_count_only_when_needed() {
        let state = catalog_state();
        let repeatable = *state.find_action(79).unwrap();

        assert_eq!(format_move(&Move::play(repeatable)), "CAST 79");
        assert_eq!(format_move(&Move::play_times(repeatable, 3)), "CAST 79 3");
    }

    #[test]
    fn test_round_trip() {
        let state = catalog_state();
        let moves = [
            Move::Wait,
            Move::Rest,
            Move::play(*state.find_action(70).unwrap()),
            Move::play(*state.find_action(78).unwrap()),
            Move::play_times(*state.find_action(79).unwrap(), 4),
            Move::Learn(*state.find_action(20).unwrap()),
        ];

        for mv in moves {
            let parsed = parse_move(&format_move(&mv), &state).unwrap();
            assert_eq!(parsed, mv);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_id() {
        let state = catalog_state();
        assert!(matches!(
            parse_move("BREW 999", &state),
            Err(ParseError::UnknownActionId(999))
        ));
    }

    #[test]
    fn test_parse_rejects_zero_repeat_count() {
        let state = catalog_state();
        assert!(matches!(
            parse_move("CAST 79 0", &state),
            Err(ParseError::InvalidRepeatCount(0))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        let state = catalog_state();
        assert!(matches!(
            parse_move("DANCE", &state),
            Err(ParseError::UnknownCommand(_))
        ));
    }
}
