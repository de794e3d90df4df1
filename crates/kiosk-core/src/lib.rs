//! Core kiosk library (site content model, config, contact submission, logging).

pub mod config;
pub mod contact;
pub mod logging;
pub mod site;
