// survey-client/src/domain/mod.rs
pub mod action;
pub mod audit;
pub mod permission;
pub mod role;
