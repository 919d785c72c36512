pub mod claims;
pub mod jwt_helper;
