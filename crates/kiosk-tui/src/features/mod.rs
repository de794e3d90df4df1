//! Feature slices for the kiosk TUI (state + update logic per slice).

pub mod contact;
pub mod gallery;
pub mod header;
pub mod page;
