use std::sync::Arc;

use hifitime::Epoch;

use crate::{feed::EphemerisSource, store::EpochStore, time::now_utc, tracker_errors::TrackerError};

/// Where "now" comes from when matching the closest epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceClock {
    System,
    Fixed(Epoch),
}

impl ReferenceClock {
    pub fn now(&self) -> Result<Epoch, TrackerError> {
        match self {
            ReferenceClock::System => now_utc(),
            ReferenceClock::Fixed(epoch) => Ok(*epoch),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EpochStore>,
    pub feed: Arc<dyn EphemerisSource>,
    pub clock: ReferenceClock,
}

impl AppState {
    pub fn new(store: Arc<dyn EpochStore>, feed: Arc<dyn EphemerisSource>) -> Self {
        Self {
            store,
            feed,
            clock: ReferenceClock::System,
        }
    }

    pub fn with_clock(mut self, clock: ReferenceClock) -> Self {
        self.clock = clock;
        self
    }
}
