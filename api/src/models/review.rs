use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewFields {
    pub rating: i32, // 1..=5
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub rating: i32,
    pub body: String,
    pub author: ObjectId,
    pub created_at: i64,
}

impl Review {
    pub fn new(fields: ReviewFields, author: ObjectId) -> Self {
        Review {
            id: ObjectId::new(),
            rating: fields.rating,
            body: fields.body,
            author,
            created_at: Utc::now().timestamp(),
        }
    }
}
