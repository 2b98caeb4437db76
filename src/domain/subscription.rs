//! Newsletter subscription records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_subscription_id;

/// A newsletter signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Create a subscription for an already-validated address
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: generate_subscription_id(&email),
            email,
            created_at: Utc::now(),
        }
    }
}
