//! Session-scoped hand-off between screens.
//!
//! The player flow crosses several routes while the server addresses most
//! events to the whole room. The few values a screen learns right before
//! navigating away (name, round timer, answer outcome) are parked in session
//! storage so the next screen can pick them up.

use gloo_storage::{SessionStorage, Storage};

use quizcast::data::AnswerOutcome;
use quizcast::log;

const PLAYER_NAME_KEY: &str = "quizcast.player-name";
const TIMER_KEY: &str = "quizcast.round-timer";
const OUTCOME_KEY: &str = "quizcast.last-outcome";

pub fn remember_player_name(name: &str) {
    if let Err(err) = SessionStorage::set(PLAYER_NAME_KEY, name) {
        log::warn!("could not persist player name: {err}");
    }
}

pub fn player_name() -> Option<String> {
    SessionStorage::get(PLAYER_NAME_KEY).ok()
}

pub fn remember_round_timer(timer: u32) {
    if let Err(err) = SessionStorage::set(TIMER_KEY, timer) {
        log::warn!("could not persist round timer: {err}");
    }
}

pub fn take_round_timer() -> Option<u32> {
    let timer = SessionStorage::get(TIMER_KEY).ok();
    SessionStorage::delete(TIMER_KEY);
    timer
}

pub fn remember_outcome(outcome: &AnswerOutcome) {
    if let Err(err) = SessionStorage::set(OUTCOME_KEY, outcome) {
        log::warn!("could not persist answer outcome: {err}");
    }
}

pub fn take_outcome() -> Option<AnswerOutcome> {
    let outcome = SessionStorage::get(OUTCOME_KEY).ok();
    SessionStorage::delete(OUTCOME_KEY);
    outcome
}
