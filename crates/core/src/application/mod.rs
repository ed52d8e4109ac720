// Application Layer - Use Cases around the queue engine

pub mod alerts;
pub mod auto_advance;
pub mod intake;
pub mod queue_engine;

// Re-exports
pub use alerts::{StatusAlerts, StatusChange, StatusTracker};
pub use auto_advance::{start_auto_advance, AutoAdvanceHandle, AutoAdvanceSlot};
pub use intake::{register, validate_form, RegistrationForm};
pub use queue_engine::{QueueEngine, SharedEngine};
