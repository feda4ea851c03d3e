//! Setup lifecycle shared by the JS entry points: Idle → Pending → Attached.
//!
//! Every setup attempt takes a ticket (a generation number). A deferred setup
//! only completes while its ticket is still the pending one, so a setup that
//! was torn down before the page finished loading cannot later attach over a
//! newer one.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

pub enum Stage<T> {
    Idle,
    /// Waiting for the page, owned by the given ticket.
    Pending(u64),
    Attached(T),
}

pub struct SetupSlot<T> {
    stage: Stage<T>,
    generation: u64,
}

impl<T> Default for SetupSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SetupSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { stage: Stage::Idle, generation: 0 }
    }

    /// Start a setup. Returns its ticket, or `None` if one is already pending
    /// or attached.
    pub fn begin(&mut self) -> Option<u64> {
        if !matches!(self.stage, Stage::Idle) {
            return None;
        }
        self.generation += 1;
        self.stage = Stage::Pending(self.generation);
        Some(self.generation)
    }

    /// Whether `ticket` is the setup currently pending.
    #[must_use]
    pub fn owns(&self, ticket: u64) -> bool {
        matches!(self.stage, Stage::Pending(current) if current == ticket)
    }

    /// Store the attached value for `ticket`. A stale ticket hands the value
    /// back untouched.
    ///
    /// # Errors
    ///
    /// Returns `value` when `ticket` no longer owns the pending setup.
    pub fn complete(&mut self, ticket: u64, value: T) -> Result<(), T> {
        if !self.owns(ticket) {
            return Err(value);
        }
        self.stage = Stage::Attached(value);
        Ok(())
    }

    /// Drop a pending setup that failed; a stale ticket is ignored.
    pub fn abandon(&mut self, ticket: u64) {
        if self.owns(ticket) {
            self.stage = Stage::Idle;
        }
    }

    /// Return to idle, handing back whatever was there.
    pub fn teardown(&mut self) -> Stage<T> {
        std::mem::replace(&mut self.stage, Stage::Idle)
    }

    #[must_use]
    pub fn attached(&self) -> Option<&T> {
        match &self.stage {
            Stage::Attached(value) => Some(value),
            _ => None,
        }
    }
}
