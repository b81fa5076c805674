use super::{navigation::SplashEntry, text_field::FieldEdit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// The splash delay started for this entry has elapsed.
    SplashElapsed(SplashEntry),
}

/// A key press normalised to a name: printable characters as themselves,
/// special keys as lowercase words ("enter", "backtab", "up", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The text-field edit this key performs. Keys held with Ctrl never edit.
    pub fn field_edit(&self) -> Option<FieldEdit> {
        if self.ctrl {
            return None;
        }

        FieldEdit::from_key(&self.key)
    }
}
