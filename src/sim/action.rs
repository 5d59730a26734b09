//! State transitions
//!
//! Every change to the game goes through `reduce`, which is pure: it takes the
//! current state and an action and returns the next state, or an error that
//! leaves the caller's state untouched. Persistence is the caller's job.

use thiserror::Error;

use super::economy::{self, ActionKind};
use super::lifecycle;
use super::state::GameState;
use crate::config::GameConfig;

/// A single player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pay to raise hunger
    Feed,
    /// Pay to raise affection
    Pet,
    /// Raise happiness directly (free)
    Play,
    /// Pay the minigame entry fee; stats are untouched
    EnterMinigame,
    /// Commit a finished typing session: coins plus the play bonus
    CompleteWordGame { wpm: u32, accuracy: u32 },
    /// Adjust the balance (negative amounts floor at zero)
    AddCurrency(i64),
    /// Spend coins, all or nothing
    SpendCurrency(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no game in progress")]
    NoGame,
    #[error("not enough coins: need {cost}, have {balance}")]
    InsufficientFunds { cost: u32, balance: u32 },
}

fn pay(state: &mut GameState, cost: u32) -> Result<(), ActionError> {
    state.currency =
        economy::charge(state.currency, cost).ok_or(ActionError::InsufficientFunds {
            cost,
            balance: state.currency,
        })?;
    Ok(())
}

/// Apply a care action's stat effect, stamp its timestamp, and check adoption
fn care(state: &mut GameState, kind: ActionKind, config: &GameConfig, now: u64) {
    let max = config.max_stat_value;
    let pet = &mut state.pet;
    pet.stats = pet.stats.apply(&kind.effect(config), max);
    match kind {
        ActionKind::Feed => pet.last_fed = now,
        ActionKind::Pet => pet.last_petted = now,
        ActionKind::Play => pet.last_played = now,
    }
    log::debug!("{} after {}: {:?}", pet.name, kind.as_str(), pet.stats);
    lifecycle::check_adoption(pet, max, now);
}

/// Compute the state that follows `action`
pub fn reduce(
    state: &GameState,
    action: Action,
    config: &GameConfig,
    now: u64,
) -> Result<GameState, ActionError> {
    let mut next = state.clone();

    match action {
        Action::Feed | Action::Pet => {
            let kind = if action == Action::Feed {
                ActionKind::Feed
            } else {
                ActionKind::Pet
            };
            pay(&mut next, kind.cost(config))?;
            care(&mut next, kind, config, now);
        }
        Action::Play => {
            care(&mut next, ActionKind::Play, config, now);
        }
        Action::EnterMinigame => {
            pay(&mut next, ActionKind::Play.cost(config))?;
        }
        Action::CompleteWordGame { wpm, accuracy } => {
            let reward = economy::word_game_reward(wpm, accuracy, config);
            next.currency = economy::credit(next.currency, i64::from(reward));
            care(&mut next, ActionKind::Play, config, now);
        }
        Action::AddCurrency(amount) => {
            next.currency = economy::credit(next.currency, amount);
        }
        Action::SpendCurrency(amount) => {
            pay(&mut next, amount)?;
        }
    }

    Ok(next)
}
