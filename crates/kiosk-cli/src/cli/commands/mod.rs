//! Command handlers.

pub mod check;
pub mod config;
pub mod view;
