//! Roll step sequence.
//!
//! A roll is resolved as a sequence of single steps. [`TurnEngine::roll_dice`]
//! hands out a [`RollTicket`]; each [`TurnEngine::advance`] with that ticket
//! applies one step. Every roll, game start and reset bumps the engine's
//! generation, so a ticket from before a reset is refused instead of moving a
//! token in the new game.
//!
//! [`TurnEngine::roll_dice`]: super::TurnEngine::roll_dice
//! [`TurnEngine::advance`]: super::TurnEngine::advance

use serde::{Deserialize, Serialize};

use crate::board::{Space, SpaceId};
use crate::core::{Category, PendingQuestion, PlayerId, WedgeSet};
use crate::movement::Heading;

/// Handle on an in-flight roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollTicket {
    pub(crate) generation: u64,
    roll: u8,
    player: PlayerId,
}

impl RollTicket {
    pub(crate) fn new(generation: u64, roll: u8, player: PlayerId) -> Self {
        Self {
            generation,
            roll,
            player,
        }
    }

    /// Pips rolled.
    #[must_use]
    pub fn roll(&self) -> u8 {
        self.roll
    }

    /// Player moving.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }
}

/// Why a roll stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopReason {
    /// Every pip was used.
    StepLimit,
    /// Reached the center holding all four wedges.
    FinalCenter,
    /// Reached a wedge space whose category the player lacks.
    UncollectedWedge,
}

/// Result of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Token moved and the roll continues.
    Moved { to: SpaceId, steps_taken: u8 },
    /// Token stopped; a question is now pending.
    Landed {
        question: PendingQuestion,
        reason: StopReason,
    },
}

/// Result of answering a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// Final-center question answered; the game is over.
    Won(PlayerId),
    /// Correct on an uncollected wedge space. Same player rolls again.
    WedgeAwarded(Category),
    /// Correct, but nothing to award. Same player rolls again.
    NoWedge,
    /// Wrong: token sent back and the turn passes.
    Reverted { to: SpaceId, next_player: PlayerId },
}

/// Engine-side bookkeeping for the roll being stepped out.
#[derive(Clone, Debug)]
pub(crate) struct ActiveRoll {
    pub ticket: RollTicket,
    pub seat: usize,
    pub start_position: SpaceId,
    pub steps_taken: u8,
    /// Wedges at roll time. Never refreshed mid-roll.
    pub wedges: WedgeSet,
}

impl ActiveRoll {
    pub fn heading(&self) -> Heading {
        Heading::for_wedges(&self.wedges)
    }

    /// Stop reason after landing on `space`, if the roll ends here.
    pub fn stop_reason(&self, space: &Space) -> Option<StopReason> {
        if space.is_center() && self.heading().is_center() {
            Some(StopReason::FinalCenter)
        } else if space.is_wedge && !self.wedges.contains(space.category) {
            Some(StopReason::UncollectedWedge)
        } else if self.steps_taken >= self.ticket.roll {
            Some(StopReason::StepLimit)
        } else {
            None
        }
    }
}
