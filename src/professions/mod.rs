pub mod consts;
pub mod fallback;
pub mod handlers;
pub mod models;
