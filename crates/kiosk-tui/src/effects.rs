//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! performs I/O.

use std::path::PathBuf;

use kiosk_core::contact::ContactFields;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// POST the contact form to its action URL.
    SubmitContact {
        action: String,
        fields: ContactFields,
    },

    /// Decode a gallery image for the enlarger overlay.
    LoadImage {
        index: usize,
        path: PathBuf,
        /// Maximum size of the decoded grid, in terminal cells.
        max_cells: (u16, u16),
    },
}
