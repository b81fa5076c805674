use std::time::{Duration, Instant};

use super::{
    auth_form::{LoginForm, SignUpForm},
    chat_list_state::ChatListState,
    navigation::Navigator,
};

/// Transient message shown in the status line until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: now + duration,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    navigator: Navigator,
    chat_list: ChatListState,
    login: LoginForm,
    sign_up: SignUpForm,
    notice: Option<Notice>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ChatListState::default())
    }
}

impl ShellState {
    pub fn new(chat_list: ChatListState) -> Self {
        Self {
            running: true,
            navigator: Navigator::default(),
            chat_list,
            login: LoginForm::default(),
            sign_up: SignUpForm::default(),
            notice: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn chat_list(&self) -> &ChatListState {
        &self.chat_list
    }

    pub fn chat_list_mut(&mut self) -> &mut ChatListState {
        &mut self.chat_list
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn sign_up(&self) -> &SignUpForm {
        &self.sign_up
    }

    pub fn sign_up_mut(&mut self) -> &mut SignUpForm {
        &mut self.sign_up
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Drops the notice once its time is up.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }
}
