pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
