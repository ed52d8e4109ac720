// Domain Layer - Pure queue entities and classification

pub mod config;
pub mod error;
pub mod notice;
pub mod queue;
pub mod status;
pub mod token;

// Re-exports
pub use config::{EngineConfig, ProgressBaseline};
pub use error::DomainError;
pub use notice::{Notice, NoticeSeverity};
pub use queue::{EntryRole, QueueEntry, StatusReport};
pub use status::{classify, message, QueueStatus};
pub use token::{Department, Token, TokenId, TokenNumber, TokenStatus};
