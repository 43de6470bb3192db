//! One independent training controller per agent.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parley_types::AgentId;
use tracing::debug;

use crate::controller::TrainingController;
use crate::error::TrainingError;
use crate::hooks::{NoopObserver, TrainingObserver};
use crate::ingest::{DurationSource, RandomDurations};

#[derive(Debug)]
pub struct TrainingRegistry<D = RandomDurations, O = NoopObserver> {
    sessions: HashMap<AgentId, TrainingController<D, O>>,
}

impl<D, O> Default for TrainingRegistry<D, O> {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl<D: DurationSource, O: TrainingObserver> TrainingRegistry<D, O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller under its agent id.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::DuplicateSession` if the agent already has one.
    pub fn open(
        &mut self,
        controller: TrainingController<D, O>,
    ) -> Result<&mut TrainingController<D, O>, TrainingError> {
        let agent_id = controller.agent_id().clone();
        match self.sessions.entry(agent_id) {
            Entry::Occupied(entry) => {
                Err(TrainingError::DuplicateSession(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                debug!(agent = %entry.key(), "opened training session");
                Ok(entry.insert(controller))
            }
        }
    }

    pub fn get(&self, agent_id: &AgentId) -> Option<&TrainingController<D, O>> {
        self.sessions.get(agent_id)
    }

    pub fn get_mut(&mut self, agent_id: &AgentId) -> Option<&mut TrainingController<D, O>> {
        self.sessions.get_mut(agent_id)
    }

    pub fn close(&mut self, agent_id: &AgentId) -> Option<TrainingController<D, O>> {
        self.sessions.remove(agent_id)
    }

    /// Agent ids in sorted order.
    pub fn agent_ids(&self) -> Vec<&AgentId> {
        let mut ids: Vec<&AgentId> = self.sessions.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
