// Token ID Port (deterministic IDs in tests)

/// Source of the opaque token ID, separate from the display number
pub trait IdProvider: Send + Sync {
    /// Fresh ID for a token about to be issued
    fn generate_id(&self) -> String;
}

/// Random UUID v4 token IDs
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic IDs: token-1, token-2, ...
    #[derive(Default)]
    pub struct SequentialIdProvider {
        counter: AtomicU64,
    }

    impl IdProvider for SequentialIdProvider {
        fn generate_id(&self) -> String {
            let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
            format!("token-{}", n)
        }
    }
}
