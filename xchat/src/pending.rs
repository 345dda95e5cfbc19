//! Single-slot buffer holding the last successful completion's outputs.

use std::sync::Mutex;

use crate::ChatError;

#[derive(Debug, Default)]
pub struct PendingOutputs {
    slot: Mutex<Vec<String>>,
}

impl PendingOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was pending.
    pub fn fill(&self, outputs: Vec<String>) -> Result<(), ChatError> {
        *self.lock()? = outputs;
        Ok(())
    }

    /// Empties the slot and returns its previous contents.
    pub fn take(&self) -> Result<Vec<String>, ChatError> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    pub fn peek(&self) -> Result<Vec<String>, ChatError> {
        Ok(self.lock()?.clone())
    }

    pub fn is_empty(&self) -> Result<bool, ChatError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<String>>, ChatError> {
        self.slot
            .lock()
            .map_err(|_| ChatError::store("pending outputs lock poisoned"))
    }
}
