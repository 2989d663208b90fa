//! Caller identity verification boundary.
//!
//! Token issuance lives with an external identity provider; this module only
//! defines the shape the rest of the application depends on. The server
//! injects a concrete verifier (JWT in production, an in-memory double in
//! tests), so no service ever talks to the provider directly.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// The authenticated caller, as established from a bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Trait for exchanging a bearer token for a caller identity.
///
/// Rejection surfaces as `Error::Unauthorized`; implementations must not
/// leak provider-specific detail beyond that.
#[async_trait::async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity>;
}
