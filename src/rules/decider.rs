//! Restart confirmation.
//!
//! When a combatant falls, the game asks whether to start a new fight
//! before any further turn proceeds. Front ends answer with a dialog or a
//! stdin prompt; tests answer with a fixed value.

use crate::core::Combatant;

/// Decides whether a finished fight restarts.
pub trait RestartDecider {
    /// Called once per decided fight, synchronously, with the winner.
    ///
    /// Returning true restarts the game immediately.
    fn confirm_restart(&mut self, winner: Combatant) -> bool;
}

impl<F> RestartDecider for F
where
    F: FnMut(Combatant) -> bool,
{
    fn confirm_restart(&mut self, winner: Combatant) -> bool {
        self(winner)
    }
}

/// Always starts a new fight.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysRestart;

impl RestartDecider for AlwaysRestart {
    fn confirm_restart(&mut self, _winner: Combatant) -> bool {
        true
    }
}

/// Never starts a new fight; the game stays over.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverRestart;

impl RestartDecider for NeverRestart {
    fn confirm_restart(&mut self, _winner: Combatant) -> bool {
        false
    }
}

/// Answers every prompt with a fixed value and remembers who won.
#[derive(Clone, Debug, Default)]
pub struct RecordingDecider {
    answer: bool,
    prompts: Vec<Combatant>,
}

impl RecordingDecider {
    /// Create a decider that answers `answer` to every prompt.
    #[must_use]
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }

    /// Winners announced so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> &[Combatant] {
        &self.prompts
    }

    /// Change the answer given to later prompts.
    pub fn set_answer(&mut self, answer: bool) {
        self.answer = answer;
    }
}

impl RestartDecider for RecordingDecider {
    fn confirm_restart(&mut self, winner: Combatant) -> bool {
        self.prompts.push(winner);
        self.answer
    }
}
