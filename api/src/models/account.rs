use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::services::password::Credential;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub credential: Credential,
    pub created_at: i64, // Unix timestamp
}

impl Account {
    pub fn new(username: String, email: String, credential: Credential) -> Self {
        Account {
            id: ObjectId::new(),
            username,
            email,
            credential,
            created_at: Utc::now().timestamp(),
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.to_hex(),
            username: self.username.clone(),
        }
    }
}

/// What templates get to see of an account.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub id: String,
    pub username: String,
}
