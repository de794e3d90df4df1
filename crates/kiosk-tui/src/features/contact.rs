//! Contact form state: field focus, editing, and result banners.
//!
//! The form intercepts nothing until focused; once a field has focus, typing
//! edits it, Tab/Shift-Tab cycle focus, Esc leaves the form, and Enter on the
//! Send control (or Ctrl+S anywhere in the form) submits. Submission has no
//! disabled state: the user may submit again while a request is in flight.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kiosk_core::contact::ContactFields;

/// The focusable controls of the form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Name,
    Email,
    Message,
    Send,
}

impl FormControl {
    fn next(self) -> Self {
        match self {
            FormControl::Name => FormControl::Email,
            FormControl::Email => FormControl::Message,
            FormControl::Message => FormControl::Send,
            FormControl::Send => FormControl::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormControl::Name => FormControl::Send,
            FormControl::Email => FormControl::Name,
            FormControl::Message => FormControl::Email,
            FormControl::Send => FormControl::Message,
        }
    }
}

/// Result banner shown below the form. Success and error are mutually
/// exclusive: showing one hides the other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    #[default]
    None,
    Success,
    Error,
}

/// What the reducer should do after a form key event.
#[derive(Debug, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// Submit the current fields.
    Submit,
}

/// Contact form state.
#[derive(Debug, Default)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub focus: Option<FormControl>,
    pub banner: Banner,
    /// True while a submission is in flight (drives the poll cadence only;
    /// the Send control is never disabled).
    pub submitting: bool,
}

impl ContactFormState {
    pub fn focus_control(&mut self, control: FormControl) {
        self.focus = Some(control);
    }

    /// Handles a key while the form has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('s') {
            return FormAction::Submit;
        }

        match key.code {
            KeyCode::Esc => {
                self.focus = None;
                FormAction::None
            }
            KeyCode::Tab => {
                self.focus = self.focus.map(FormControl::next);
                FormAction::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.map(FormControl::prev);
                FormAction::None
            }
            KeyCode::Enter => match self.focus {
                Some(FormControl::Send) => FormAction::Submit,
                // Enter inside the message adds a line break
                Some(FormControl::Message) => {
                    self.fields.message.push('\n');
                    FormAction::None
                }
                // Enter in a single-line field moves on, like Tab
                Some(_) => {
                    self.focus = self.focus.map(FormControl::next);
                    FormAction::None
                }
                None => FormAction::None,
            },
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop();
                }
                FormAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.focused_field_mut() {
                    field.push(c);
                }
                FormAction::None
            }
            _ => FormAction::None,
        }
    }

    /// Pastes text into the focused field.
    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.focused_field_mut() {
            field.push_str(text);
        }
    }

    pub fn on_submit_started(&mut self) {
        self.submitting = true;
    }

    /// Applies the submission outcome: success shows the success banner and
    /// clears the fields; failure shows the error banner and leaves the
    /// fields untouched.
    pub fn on_submit_finished(&mut self, ok: bool) {
        self.submitting = false;
        if ok {
            self.banner = Banner::Success;
            self.fields.reset();
        } else {
            self.banner = Banner::Error;
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(FormControl::Name) => Some(&mut self.fields.name),
            Some(FormControl::Email) => Some(&mut self.fields.email),
            Some(FormControl::Message) => Some(&mut self.fields.message),
            Some(FormControl::Send) | None => None,
        }
    }
}
