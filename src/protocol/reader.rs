//! Turn input parsing.
//!
//! Input format, one turn per call:
//!
//! ```text
//! actionCount
//! actionId actionType delta0 delta1 delta2 delta3 price tomeIndex taxCount castable repeatable
//! ...                                          (actionCount lines)
//! inv0 inv1 inv2 inv3 score                    (me)
//! inv0 inv1 inv2 inv3 score                    (opponent)
//! ```
//!
//! Malformed input is fatal: the agent cannot recover a turn it cannot
//! read, so every defect surfaces as a [`ParseError`].

use std::io::BufRead;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{Action, ActionKind, GameState, Ingredients, Player};

/// Fatal turn-input defects.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected {expected} fields, got {got}: {line:?}")]
    WrongFieldCount {
        expected: usize,
        got: usize,
        line: String,
    },

    #[error("invalid integer {token:?}")]
    InvalidInt { token: String },

    #[error("unknown action kind {0:?}")]
    UnknownKind(String),

    #[error("duplicate action id {0}")]
    DuplicateActionId(i32),

    #[error("unknown action id {0}")]
    UnknownActionId(i32),

    #[error("repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(u32),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn parse_int(token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInt {
        token: token.to_string(),
    })
}

/// Read one non-empty line; `Ok(None)` on clean end of input.
fn next_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ParseError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            return Ok(Some(line.trim().to_string()));
        }
    }
}

fn fields(line: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ParseError::WrongFieldCount {
            expected,
            got: tokens.len(),
            line: line.to_string(),
        });
    }
    Ok(tokens)
}

fn parse_action(line: &str) -> Result<Action, ParseError> {
    let tokens = fields(line, 11)?;

    let kind = ActionKind::from_tag(tokens[1])
        .ok_or_else(|| ParseError::UnknownKind(tokens[1].to_string()))?;

    Ok(Action {
        id: parse_int(tokens[0])?,
        kind,
        deltas: Ingredients::new(
            parse_int(tokens[2])?,
            parse_int(tokens[3])?,
            parse_int(tokens[4])?,
            parse_int(tokens[5])?,
        ),
        price: parse_int(tokens[6])?,
        tome_index: parse_int(tokens[7])?,
        tax_count: parse_int(tokens[8])?,
        castable: parse_int(tokens[9])? != 0,
        repeatable: parse_int(tokens[10])? != 0,
    })
}

fn parse_player(line: &str) -> Result<Player, ParseError> {
    let tokens = fields(line, 5)?;

    Ok(Player::new(
        Ingredients::new(
            parse_int(tokens[0])?,
            parse_int(tokens[1])?,
            parse_int(tokens[2])?,
            parse_int(tokens[3])?,
        ),
        parse_int(tokens[4])?,
    ))
}

/// Read one turn's state. `Ok(None)` on clean end of input at the turn
/// boundary; end of input mid-turn is an error.
pub fn read_state<R: BufRead>(input: &mut R, turn: u32) -> Result<Option<GameState>, ParseError> {
    let Some(count_line) = next_line(input)? else {
        return Ok(None);
    };
    let action_count = parse_int(fields(&count_line, 1)?[0])?;

    let mut seen = FxHashSet::default();
    let mut actions = Vec::with_capacity(action_count.max(0) as usize);
    for _ in 0..action_count {
        let line = next_line(input)?.ok_or(ParseError::UnexpectedEof)?;
        let action = parse_action(&line)?;
        if !seen.insert(action.id) {
            return Err(ParseError::DuplicateActionId(action.id));
        }
        actions.push(action);
    }

    let me = parse_player(&next_line(input)?.ok_or(ParseError::UnexpectedEof)?)?;
    let opponent = parse_player(&next_line(input)?.ok_or(ParseError::UnexpectedEof)?)?;

    Ok(Some(GameState::new(turn, me, opponent, actions)))
}
