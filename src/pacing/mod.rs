//! Paced roll resolution for display.
//!
//! A front-end that wants the token to visibly hop one space at a time runs
//! the roll through [`drive_roll`], which applies one step per tick of a
//! tokio interval. The engine lock is taken only for the duration of each
//! step, so queries and commands interleave freely between ticks.
//!
//! Cancellation needs no extra handle: resetting or restarting the game
//! invalidates the roll's ticket, the next tick is refused with
//! [`CommandError::StaleRoll`] and the task ends without touching the state.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::core::{Dice, PendingQuestion};
use crate::rules::{CommandError, RollTicket, StepOutcome, TurnEngine};

/// Engine shared between a front-end and its pacing tasks.
pub type SharedEngine<D> = Arc<Mutex<TurnEngine<D>>>;

/// Wrap an engine for shared async use.
pub fn share<D: Dice>(engine: TurnEngine<D>) -> SharedEngine<D> {
    Arc::new(Mutex::new(engine))
}

/// Step the roll for `ticket` once per `interval` until it lands.
pub async fn drive_roll<D: Dice>(
    engine: SharedEngine<D>,
    ticket: RollTicket,
    interval: Duration,
) -> Result<PendingQuestion, CommandError> {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the first step waits a full interval.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let outcome = engine.lock().await.advance(&ticket);
        match outcome {
            Ok(StepOutcome::Landed { question, .. }) => return Ok(question),
            Ok(StepOutcome::Moved { .. }) => {}
            Err(err) => {
                log::debug!("paced roll for {} stopped: {err}", ticket.player());
                return Err(err);
            }
        }
    }
}

/// A roll being stepped out in the background.
pub struct PacedRoll {
    pub ticket: RollTicket,
    pub handle: JoinHandle<Result<PendingQuestion, CommandError>>,
}

/// Roll for the current player and spawn a task pacing the move at the
/// configured step interval.
pub async fn start_paced_roll<D>(engine: &SharedEngine<D>) -> Result<PacedRoll, CommandError>
where
    D: Dice + Send + 'static,
{
    let (ticket, interval) = {
        let mut guard = engine.lock().await;
        let ticket = guard.roll_dice()?;
        (ticket, guard.config().step_interval())
    };
    let handle = tokio::spawn(drive_roll(Arc::clone(engine), ticket, interval));
    Ok(PacedRoll { ticket, handle })
}
