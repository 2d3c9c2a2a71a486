use driftbase_types::prelude::Timestamp;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(elapsed.as_millis() as i64)
    }
}

/// Capability bundle handed to every change set. The engine only requires a
/// time source; concrete integrations extend this with a handle to the
/// system under migration, which the engine never inspects.
pub trait Context: Send + Sync {
    fn clock(&self) -> &dyn Clock;
}

/// Context carrying a clock and nothing else.
#[derive(Clone)]
pub struct BasicContext {
    clock: Arc<dyn Clock>,
}

impl BasicContext {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Context for BasicContext {
    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
