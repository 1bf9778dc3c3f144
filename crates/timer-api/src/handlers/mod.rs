//! HTTP handlers

pub mod extend;
pub mod health;
pub mod validate;
