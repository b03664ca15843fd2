use std::collections::VecDeque;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::CatalogError;
use crate::gateway::events::EventPublisher;

const DEFAULT_HISTORY: usize = 100;

// LogPublisher writes domain events to the tracing output and keeps a short history of them
#[derive(Debug)]
pub struct LogPublisher {
    history: Mutex<VecDeque<DomainEvent>>,
    capacity: usize,
}

impl LogPublisher {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // most recently published events, oldest first
    pub async fn recent(&self) -> Vec<DomainEvent> {
        self.history.lock().await.iter().cloned().collect()
    }
}

impl Default for LogPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), CatalogError> {
        tracing::info!(
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            data = event.json_data.as_str(),
            "domain event");
        let mut history = self.history.lock().await;
        if self.capacity == 0 {
            return Ok(());
        }
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(event.clone());
        Ok(())
    }
}
