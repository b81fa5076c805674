//! Login and sign-up form models.
//!
//! Neither form talks to a backend: logging in always succeeds and signing up
//! only checks that the fields are filled and the passwords agree.

use thiserror::Error;

use super::text_field::TextField;

const NAME_CHAR_LIMIT: usize = 64;
const EMAIL_CHAR_LIMIT: usize = 254;
const PASSWORD_CHAR_LIMIT: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    focus: LoginField,
    password_visible: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextField::with_limit(EMAIL_CHAR_LIMIT),
            password: TextField::with_limit(PASSWORD_CHAR_LIMIT),
            focus: LoginField::default(),
            password_visible: false,
        }
    }
}

impl LoginForm {
    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        // Two fields: previous and next coincide.
        self.focus = self.focus.next();
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpField {
    #[default]
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    const ORDER: [SignUpField; 4] = [
        SignUpField::Name,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::ConfirmPassword,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }
}

/// Why a sign-up attempt was turned down. The display text is the notice
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignUpRejection {
    #[error("Please fill in all fields.")]
    BlankFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Each password field has its own visibility toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    focus: SignUpField,
    password_visible: bool,
    confirm_password_visible: bool,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            name: TextField::with_limit(NAME_CHAR_LIMIT),
            email: TextField::with_limit(EMAIL_CHAR_LIMIT),
            password: TextField::with_limit(PASSWORD_CHAR_LIMIT),
            confirm_password: TextField::with_limit(PASSWORD_CHAR_LIMIT),
            focus: SignUpField::default(),
            password_visible: false,
            confirm_password_visible: false,
        }
    }
}

impl SignUpForm {
    pub fn focus(&self) -> SignUpField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let order = SignUpField::ORDER;
        self.focus = order[(self.focus.position() + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = SignUpField::ORDER;
        self.focus = order[(self.focus.position() + order.len() - 1) % order.len()];
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            SignUpField::Name => &mut self.name,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn confirm_password_visible(&self) -> bool {
        self.confirm_password_visible
    }

    /// Toggles the focused password field, or the Password field when focus
    /// is on a plain field.
    pub fn toggle_password_visibility(&mut self) {
        match self.focus {
            SignUpField::ConfirmPassword => {
                self.confirm_password_visible = !self.confirm_password_visible;
            }
            SignUpField::Name | SignUpField::Email | SignUpField::Password => {
                self.password_visible = !self.password_visible;
            }
        }
    }

    /// Blank fields are reported before a password mismatch.
    pub fn validate(&self) -> Result<(), SignUpRejection> {
        let any_blank = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_blank());

        if any_blank {
            return Err(SignUpRejection::BlankFields);
        }

        if self.password.text() != self.confirm_password.text() {
            return Err(SignUpRejection::PasswordMismatch);
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
