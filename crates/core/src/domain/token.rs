// Token Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token ID (UUID v4), distinct from the display number
pub type TokenId = String;

/// Department name, drawn from the catalog at issuance time
pub type Department = String;

/// Display identifier of a token: prefix plus sequence number (e.g. `A-43`)
///
/// All tokens of one engine share a prefix and one numeric namespace, so the
/// sequence number alone orders them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenNumber {
    prefix: String,
    value: u64,
}

impl TokenNumber {
    pub fn new(prefix: impl Into<String>, value: u64) -> Self {
        Self {
            prefix: prefix.into(),
            value,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for TokenNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.value)
    }
}

/// Token lifecycle state
///
/// The engine issues tokens as `Waiting` and does not transition them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Waiting,
    Serving,
    Done,
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStatus::Waiting => write!(f, "waiting"),
            TokenStatus::Serving => write!(f, "serving"),
            TokenStatus::Done => write!(f, "done"),
        }
    }
}

/// One issued queue ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub number: TokenNumber,

    // Opaque caller-supplied fields, never interpreted by the engine
    pub holder_name: String,
    pub contact: String,
    pub department: Department,

    pub issued_at: i64, // epoch ms
    pub status: TokenStatus,

    /// Serving pointer value when this token was issued
    pub serving_at_issue: u64,
}

impl Token {
    /// Create a new waiting token
    ///
    /// # Arguments
    ///
    /// * `id` - Unique token ID (injected, not generated)
    /// * `number` - Display number assigned by the engine
    /// * `issued_at` - Creation timestamp in epoch ms (injected, not system time)
    /// * `serving_at_issue` - Serving pointer at the moment of issuance
    pub fn new(
        id: impl Into<String>,
        number: TokenNumber,
        holder_name: impl Into<String>,
        contact: impl Into<String>,
        department: impl Into<String>,
        issued_at: i64,
        serving_at_issue: u64,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            holder_name: holder_name.into(),
            contact: contact.into(),
            department: department.into(),
            issued_at,
            status: TokenStatus::Waiting,
            serving_at_issue,
        }
    }
}
