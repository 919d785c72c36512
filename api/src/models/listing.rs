use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Validated, owner-independent listing fields. Produced by form validation
/// and applied on create and update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub price: f64,
    pub image: String,
    pub location: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub location: String,
    pub description: String,
    pub author: ObjectId,
    #[serde(default)]
    pub reviews: Vec<ObjectId>, // insertion order
    pub created_at: i64,
}

impl Listing {
    pub fn new(fields: ListingFields, author: ObjectId) -> Self {
        Listing {
            id: ObjectId::new(),
            title: fields.title,
            price: fields.price,
            image: fields.image,
            location: fields.location,
            description: fields.description,
            author,
            reviews: Vec::new(),
            created_at: Utc::now().timestamp(),
        }
    }

    pub fn apply(&mut self, fields: ListingFields) {
        self.title = fields.title;
        self.price = fields.price;
        self.image = fields.image;
        self.location = fields.location;
        self.description = fields.description;
    }

    pub fn is_owned_by(&self, account_id: &ObjectId) -> bool {
        self.author == *account_id
    }

    pub fn path(&self) -> String {
        format!("/hotels/{}", self.id.to_hex())
    }
}

/// Whole prices render without a fractional part, anything else with two
/// decimals.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}
