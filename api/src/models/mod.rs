pub mod account;
pub mod listing;
pub mod review;
