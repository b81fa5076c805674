//! Single-line editable text used by the login and sign-up forms.

use thiserror::Error;

/// Character limit for fields built with [`TextField::default`].
pub const DEFAULT_CHAR_LIMIT: usize = 256;

/// One editing step applied to a [`TextField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl FieldEdit {
    /// Maps a normalised key name to an edit. Single characters insert
    /// themselves; anything else unknown yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let edit = match key {
            "backspace" => Self::Backspace,
            "delete" => Self::Delete,
            "left" => Self::Left,
            "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Insert(ch),
                    _ => return None,
                }
            }
        };

        Some(edit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Field holds at most {limit} characters.")]
pub struct FieldFull {
    pub limit: usize,
}

/// Editable text stored as characters so the cursor is always a valid
/// character index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    chars: Vec<char>,
    cursor: usize,
    limit: usize,
}

impl Default for TextField {
    fn default() -> Self {
        Self::with_limit(DEFAULT_CHAR_LIMIT)
    }
}

impl TextField {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            limit,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when the field holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|ch| ch.is_whitespace())
    }

    /// Applies one edit. Only an insert into a full field fails; cursor moves
    /// and deletions at the boundaries are silent no-ops.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), FieldFull> {
        match edit {
            FieldEdit::Insert(ch) => return self.insert_char(ch),
            FieldEdit::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            FieldEdit::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            FieldEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            FieldEdit::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            FieldEdit::Home => self.cursor = 0,
            FieldEdit::End => self.cursor = self.chars.len(),
        }

        Ok(())
    }

    pub fn insert_char(&mut self, ch: char) -> Result<(), FieldFull> {
        if self.chars.len() >= self.limit {
            return Err(FieldFull { limit: self.limit });
        }

        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Text as displayed: either verbatim or one bullet per character.
    pub fn display_text(&self, masked: bool) -> String {
        if masked {
            "\u{2022}".repeat(self.chars.len())
        } else {
            self.text()
        }
    }
}
