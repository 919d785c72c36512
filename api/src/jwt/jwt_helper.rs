// src/jwt/jwt_helper.rs
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::Result as JwtResult, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;

use crate::jwt::claims::Claims;

pub fn create_token(account_id: &ObjectId, secret: &[u8], ttl_secs: i64) -> JwtResult<String> {
    let claims = Claims {
        sub: account_id.to_hex(),
        exp: (Utc::now().timestamp() + ttl_secs).max(0) as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
}

pub fn verify_token(token: &str, secret: &[u8]) -> JwtResult<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation).map(|data| data.claims)
}
