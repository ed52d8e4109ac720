// Port Layer - Interfaces for external collaborators

pub mod id_provider; // For deterministic testing
pub mod notifier;
pub mod observer;
pub mod time_provider;

// Re-exports
pub use id_provider::IdProvider;
pub use notifier::StatusNotifier;
pub use observer::AdvanceObserver;
pub use time_provider::TimeProvider;
