pub mod listing_details;
pub mod password;
pub mod session;
