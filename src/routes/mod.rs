//! Site-level route handlers

pub mod health;
pub mod offers;
