// survey-client/src/api/mod.rs
pub mod actions;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod surveys;
