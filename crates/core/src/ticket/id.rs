//! Ticket id allocation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::TicketId;

/// How fresh ticket ids are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Milliseconds since the Unix epoch at creation time.
    #[default]
    Timestamp,
    /// A counter starting at 1.
    Sequential,
}

/// Hands out ids that are unique and strictly increasing for one session.
#[derive(Debug)]
pub struct IdAllocator {
    strategy: IdStrategy,
    last: Option<i64>,
}

impl IdAllocator {
    /// Create an allocator for the given strategy.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last: None,
        }
    }

    /// The strategy this allocator uses.
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> TicketId {
        let candidate = match self.strategy {
            IdStrategy::Timestamp => Utc::now().timestamp_millis(),
            IdStrategy::Sequential => self.last.map_or(1, |last| last + 1),
        };
        self.next_from(candidate)
    }

    /// Bump `candidate` past the last issued value if needed.
    fn next_from(&mut self, candidate: i64) -> TicketId {
        let value = match self.last {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last = Some(value);
        TicketId::new(value.to_string())
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
