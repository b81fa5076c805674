use std::time::{Duration, Instant};

use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    navigation::{Navigator, Screen, Tab},
    shell_state::{Notice, ShellState},
    text_field::FieldFull,
};

use super::contracts::{ShellOrchestrator, SplashScheduler};

const ACCOUNT_CREATED_NOTICE: &str = "Account created successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSettings {
    pub splash_delay: Duration,
    pub notice_duration: Duration,
}

pub struct DefaultShellOrchestrator<S>
where
    S: SplashScheduler,
{
    state: ShellState,
    splash: S,
    settings: ShellSettings,
}

impl<S> DefaultShellOrchestrator<S>
where
    S: SplashScheduler,
{
    pub fn new(state: ShellState, splash: S, settings: ShellSettings) -> Self {
        Self {
            state,
            splash,
            settings,
        }
    }

    fn quit(&mut self) {
        self.splash.cancel();
        self.state.navigator_mut().dispose_splash();
        self.state.stop();
    }

    fn navigate(&mut self, action: &'static str, apply: impl FnOnce(&mut Navigator) -> bool) {
        let from = self.state.navigator().screen();
        if apply(self.state.navigator_mut()) {
            let to = self.state.navigator().screen();
            tracing::debug!(
                action,
                from = from.as_label(),
                to = to.as_label(),
                "navigation applied"
            );
        } else {
            tracing::trace!(action, screen = from.as_label(), "navigation ignored");
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        let notice = Notice::new(text, Instant::now(), self.settings.notice_duration);
        self.state.show_notice(notice);
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl && key.key == "c" {
            self.quit();
            return;
        }

        match self.state.navigator().screen() {
            Screen::Splash => {
                if key.key == "q" && !key.ctrl {
                    self.quit();
                }
            }
            Screen::Login => self.handle_login_key(&key),
            Screen::SignUp => self.handle_sign_up_key(&key),
            Screen::Home => self.handle_home_key(&key),
        }
    }

    fn handle_login_key(&mut self, key: &KeyInput) {
        match (key.ctrl, key.key.as_str()) {
            (false, "enter") => {
                // Any submission is accepted; there is no credential check.
                self.state.login_mut().reset();
                self.navigate("login_succeeded", Navigator::login_succeeded);
            }
            (true, "s") => self.navigate("go_to_sign_up", Navigator::go_to_sign_up),
            (true, "v") => self.state.login_mut().toggle_password_visibility(),
            (false, "tab" | "down") => self.state.login_mut().focus_next(),
            (false, "backtab" | "up") => self.state.login_mut().focus_previous(),
            _ => {
                let outcome = key
                    .field_edit()
                    .map(|edit| self.state.login_mut().focused_field_mut().apply(edit));
                self.report_edit(outcome);
            }
        }
    }

    fn handle_sign_up_key(&mut self, key: &KeyInput) {
        match (key.ctrl, key.key.as_str()) {
            (false, "enter") => self.submit_sign_up(),
            (true, "l") => self.navigate("go_to_login", Navigator::go_to_login),
            (true, "v") => self.state.sign_up_mut().toggle_password_visibility(),
            (false, "tab" | "down") => self.state.sign_up_mut().focus_next(),
            (false, "backtab" | "up") => self.state.sign_up_mut().focus_previous(),
            _ => {
                let outcome = key
                    .field_edit()
                    .map(|edit| self.state.sign_up_mut().focused_field_mut().apply(edit));
                self.report_edit(outcome);
            }
        }
    }

    fn report_edit(&mut self, outcome: Option<Result<(), FieldFull>>) {
        if let Some(Err(full)) = outcome {
            tracing::debug!(limit = full.limit, "form field is full");
            self.notify(full.to_string());
        }
    }

    fn submit_sign_up(&mut self) {
        match self.state.sign_up().validate() {
            Ok(()) => {
                tracing::info!("sign-up form accepted");
                self.state.sign_up_mut().reset();
                self.notify(ACCOUNT_CREATED_NOTICE);
                self.navigate("sign_up_succeeded", Navigator::sign_up_succeeded);
            }
            Err(rejection) => {
                tracing::debug!(?rejection, "sign-up form rejected");
                self.notify(rejection.to_string());
            }
        }
    }

    fn handle_home_key(&mut self, key: &KeyInput) {
        if key.ctrl {
            return;
        }

        let Some(tab) = self.state.navigator().active_tab() else {
            return;
        };

        if let Some(target) = Tab::from_hotkey(&key.key) {
            self.select_tab(target);
            return;
        }

        match key.key.as_str() {
            "q" => self.quit(),
            "tab" | "l" | "right" => self.select_tab(tab.next()),
            "backtab" | "h" | "left" => self.select_tab(tab.previous()),
            "j" | "down" if tab == Tab::Chats => self.state.chat_list_mut().select_next(),
            "k" | "up" if tab == Tab::Chats => self.state.chat_list_mut().select_previous(),
            "enter" if tab == Tab::Chats => {
                if let Some(id) = self.state.chat_list_mut().mark_selected_read() {
                    tracing::debug!(thread_id = %id, "chat thread marked read");
                }
            }
            _ => {}
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if self.state.navigator_mut().set_tab(tab) {
            tracing::debug!(tab = tab.title(), "tab selected");
        }
    }
}

impl<S> ShellOrchestrator for DefaultShellOrchestrator<S>
where
    S: SplashScheduler,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn start(&mut self) -> Result<()> {
        if let Some(entry) = self.state.navigator().splash_entry() {
            self.splash.schedule(entry, self.settings.splash_delay)?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        if !self.state.is_running() {
            tracing::trace!(?event, "event after shutdown ignored");
            return Ok(());
        }

        match event {
            AppEvent::Tick => self.state.expire_notice(Instant::now()),
            AppEvent::QuitRequested => self.quit(),
            AppEvent::SplashElapsed(entry) => {
                self.navigate("advance_from_splash", |navigator| {
                    navigator.advance_from_splash(entry)
                });
            }
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            auth_form::SignUpField,
            chat::ChatThreadId,
            chat_list_state::ChatListState,
            chat_registry::ChatRegistry,
            sample_data,
        },
        usecases::splash::ManualSplashScheduler,
    };

    const SETTINGS: ShellSettings = ShellSettings {
        splash_delay: Duration::from_millis(2_500),
        notice_duration: Duration::from_secs(60),
    };

    fn orchestrator() -> DefaultShellOrchestrator<ManualSplashScheduler> {
        let registry =
            ChatRegistry::from_seed(sample_data::seed_threads()).expect("seed ids are unique");
        DefaultShellOrchestrator::new(
            ShellState::new(ChatListState::new(registry)),
            ManualSplashScheduler::default(),
            SETTINGS,
        )
    }

    fn send(orchestrator: &mut DefaultShellOrchestrator<ManualSplashScheduler>, event: AppEvent) {
        orchestrator
            .handle_event(event)
            .expect("event must be handled");
    }

    fn press(orchestrator: &mut DefaultShellOrchestrator<ManualSplashScheduler>, key: &str) {
        send(orchestrator, AppEvent::InputKey(KeyInput::new(key, false)));
    }

    fn press_ctrl(orchestrator: &mut DefaultShellOrchestrator<ManualSplashScheduler>, key: &str) {
        send(orchestrator, AppEvent::InputKey(KeyInput::new(key, true)));
    }

    fn type_text(orchestrator: &mut DefaultShellOrchestrator<ManualSplashScheduler>, text: &str) {
        for ch in text.chars() {
            press(orchestrator, &ch.to_string());
        }
    }

    fn started_at_login() -> DefaultShellOrchestrator<ManualSplashScheduler> {
        let mut orchestrator = orchestrator();
        orchestrator.start().expect("start must schedule splash");
        let (entry, _) = orchestrator.splash.scheduled[0];
        send(&mut orchestrator, AppEvent::SplashElapsed(entry));
        orchestrator
    }

    fn started_at_home() -> DefaultShellOrchestrator<ManualSplashScheduler> {
        let mut orchestrator = started_at_login();
        press(&mut orchestrator, "enter");
        orchestrator
    }

    fn screen(orchestrator: &DefaultShellOrchestrator<ManualSplashScheduler>) -> Screen {
        orchestrator.state().navigator().screen()
    }

    fn notice(orchestrator: &DefaultShellOrchestrator<ManualSplashScheduler>) -> Option<&str> {
        orchestrator.state().notice().map(Notice::text)
    }

    #[test]
    fn start_schedules_splash_timer_with_configured_delay() {
        let mut orchestrator = orchestrator();

        orchestrator.start().expect("start must succeed");

        assert_eq!(orchestrator.splash.scheduled.len(), 1);
        assert_eq!(
            orchestrator.splash.scheduled[0].1,
            Duration::from_millis(2_500)
        );
        assert_eq!(screen(&orchestrator), Screen::Splash);
    }

    #[test]
    fn splash_elapsed_moves_to_login_exactly_once() {
        let mut orchestrator = started_at_login();
        assert_eq!(screen(&orchestrator), Screen::Login);

        press_ctrl(&mut orchestrator, "s");
        let (entry, _) = orchestrator.splash.scheduled[0];
        send(&mut orchestrator, AppEvent::SplashElapsed(entry));

        assert_eq!(screen(&orchestrator), Screen::SignUp);
    }

    #[test]
    fn keys_on_splash_do_not_navigate() {
        let mut orchestrator = orchestrator();
        orchestrator.start().expect("start must succeed");

        press(&mut orchestrator, "enter");
        press(&mut orchestrator, "x");

        assert_eq!(screen(&orchestrator), Screen::Splash);
        assert!(orchestrator.state().is_running());
    }

    #[test]
    fn quit_cancels_pending_splash_timer() {
        let mut orchestrator = orchestrator();
        orchestrator.start().expect("start must succeed");

        send(&mut orchestrator, AppEvent::QuitRequested);

        assert!(!orchestrator.state().is_running());
        assert_eq!(orchestrator.splash.cancellations, 1);
    }

    #[test]
    fn splash_firing_queued_before_quit_is_dropped() {
        let mut orchestrator = orchestrator();
        orchestrator.start().expect("start must succeed");
        let (entry, _) = orchestrator.splash.scheduled[0];

        send(&mut orchestrator, AppEvent::QuitRequested);
        send(&mut orchestrator, AppEvent::SplashElapsed(entry));

        assert!(!orchestrator.state().is_running());
        assert_eq!(screen(&orchestrator), Screen::Splash);
    }

    #[test]
    fn quit_retires_the_splash_visit() {
        let mut orchestrator = orchestrator();
        orchestrator.start().expect("start must succeed");
        let (entry, _) = orchestrator.splash.scheduled[0];

        send(&mut orchestrator, AppEvent::QuitRequested);

        assert_ne!(orchestrator.state().navigator().splash_entry(), Some(entry));
    }

    #[test]
    fn full_field_reports_notice_and_keeps_text() {
        let mut orchestrator = started_at_login();
        let limit = orchestrator.state().login().email.limit();
        type_text(&mut orchestrator, &"a".repeat(limit));
        assert_eq!(notice(&orchestrator), None);

        press(&mut orchestrator, "b");

        assert_eq!(
            notice(&orchestrator),
            Some(format!("Field holds at most {limit} characters.").as_str())
        );
        assert_eq!(orchestrator.state().login().email.text(), "a".repeat(limit));
    }

    #[test]
    fn sign_up_ctrl_v_reveals_only_focused_password() {
        let mut orchestrator = started_at_login();
        press_ctrl(&mut orchestrator, "s");
        press(&mut orchestrator, "backtab");

        press_ctrl(&mut orchestrator, "v");

        let sign_up = orchestrator.state().sign_up();
        assert_eq!(sign_up.focus(), SignUpField::ConfirmPassword);
        assert!(sign_up.confirm_password_visible());
        assert!(!sign_up.password_visible());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut orchestrator = started_at_login();

        press_ctrl(&mut orchestrator, "c");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn q_is_typed_into_login_field_instead_of_quitting() {
        let mut orchestrator = started_at_login();

        type_text(&mut orchestrator, "qa@mail");

        assert!(orchestrator.state().is_running());
        assert_eq!(orchestrator.state().login().email.text(), "qa@mail");
    }

    #[test]
    fn login_without_credentials_enters_home_on_chats() {
        let mut orchestrator = started_at_login();
        type_text(&mut orchestrator, "me@mail");

        press(&mut orchestrator, "enter");

        assert_eq!(screen(&orchestrator), Screen::Home);
        assert_eq!(
            orchestrator.state().navigator().active_tab(),
            Some(Tab::Chats)
        );
        assert!(orchestrator.state().login().email.is_empty());
    }

    #[test]
    fn login_tab_moves_focus_and_ctrl_v_toggles_visibility() {
        let mut orchestrator = started_at_login();

        press(&mut orchestrator, "tab");
        type_text(&mut orchestrator, "pw");
        press_ctrl(&mut orchestrator, "v");

        let login = orchestrator.state().login();
        assert_eq!(login.password.text(), "pw");
        assert!(login.email.is_empty());
        assert!(login.password_visible());
    }

    #[test]
    fn sign_up_and_back_to_login() {
        let mut orchestrator = started_at_login();

        press_ctrl(&mut orchestrator, "s");
        assert_eq!(screen(&orchestrator), Screen::SignUp);

        press_ctrl(&mut orchestrator, "l");
        assert_eq!(screen(&orchestrator), Screen::Login);
    }

    #[test]
    fn sign_up_with_blank_fields_shows_notice_and_stays() {
        let mut orchestrator = started_at_login();
        press_ctrl(&mut orchestrator, "s");

        press(&mut orchestrator, "enter");

        assert_eq!(screen(&orchestrator), Screen::SignUp);
        assert_eq!(notice(&orchestrator), Some("Please fill in all fields."));
    }

    #[test]
    fn sign_up_with_mismatched_passwords_shows_notice() {
        let mut orchestrator = started_at_login();
        press_ctrl(&mut orchestrator, "s");
        for value in ["Maya", "maya@mail", "one", "two"] {
            type_text(&mut orchestrator, value);
            press(&mut orchestrator, "tab");
        }

        press(&mut orchestrator, "enter");

        assert_eq!(screen(&orchestrator), Screen::SignUp);
        assert_eq!(notice(&orchestrator), Some("Passwords do not match."));
    }

    #[test]
    fn successful_sign_up_returns_to_login_with_notice() {
        let mut orchestrator = started_at_login();
        press_ctrl(&mut orchestrator, "s");
        for value in ["Maya", "maya@mail", "secret", "secret"] {
            type_text(&mut orchestrator, value);
            press(&mut orchestrator, "down");
        }

        press(&mut orchestrator, "enter");

        assert_eq!(screen(&orchestrator), Screen::Login);
        assert_eq!(notice(&orchestrator), Some(ACCOUNT_CREATED_NOTICE));
        assert_eq!(orchestrator.state().sign_up().focus(), SignUpField::Name);
        assert!(orchestrator.state().sign_up().name.is_empty());
    }

    #[test]
    fn tick_expires_old_notice() {
        let mut orchestrator = started_at_login();
        orchestrator.settings.notice_duration = Duration::ZERO;
        press_ctrl(&mut orchestrator, "s");
        press(&mut orchestrator, "enter");

        send(&mut orchestrator, AppEvent::Tick);

        assert_eq!(notice(&orchestrator), None);
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut orchestrator = started_at_login();
        type_text(&mut orchestrator, "abc");

        press(&mut orchestrator, "backspace");
        press(&mut orchestrator, "home");
        press(&mut orchestrator, "delete");

        assert_eq!(orchestrator.state().login().email.text(), "b");
    }

    #[test]
    fn home_tabs_follow_hotkeys_and_cycling() {
        let mut orchestrator = started_at_home();
        let active = |o: &DefaultShellOrchestrator<ManualSplashScheduler>| {
            o.state().navigator().active_tab()
        };

        press(&mut orchestrator, "2");
        assert_eq!(active(&orchestrator), Some(Tab::Profile));

        press(&mut orchestrator, "4");
        press(&mut orchestrator, "2");
        assert_eq!(active(&orchestrator), Some(Tab::Profile));

        press(&mut orchestrator, "tab");
        assert_eq!(active(&orchestrator), Some(Tab::Contacts));

        press(&mut orchestrator, "h");
        press(&mut orchestrator, "h");
        assert_eq!(active(&orchestrator), Some(Tab::Chats));

        press(&mut orchestrator, "backtab");
        assert_eq!(active(&orchestrator), Some(Tab::Settings));
    }

    #[test]
    fn chats_tab_navigates_and_marks_thread_read() {
        let mut orchestrator = started_at_home();

        press(&mut orchestrator, "j");
        press(&mut orchestrator, "j");
        press(&mut orchestrator, "enter");

        let registry = orchestrator.state().chat_list().registry();
        let maya = registry.get(ChatThreadId::new(3)).expect("seed has thread 3");
        assert_eq!(maya.display_name, "Maya");
        assert_eq!(registry.unread_badge(maya), None);
        assert_eq!(registry.total_unread(), 5);
    }

    #[test]
    fn list_keys_are_ignored_outside_chats_tab() {
        let mut orchestrator = started_at_home();
        press(&mut orchestrator, "3");

        press(&mut orchestrator, "j");
        press(&mut orchestrator, "enter");

        assert_eq!(orchestrator.state().chat_list().selected_index(), Some(0));
        assert_eq!(orchestrator.state().chat_list().registry().total_unread(), 6);
    }

    #[test]
    fn q_quits_from_home() {
        let mut orchestrator = started_at_home();

        press(&mut orchestrator, "q");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn named_and_ctrl_keys_are_not_typed_into_fields() {
        let mut orchestrator = started_at_login();

        press(&mut orchestrator, "f5");
        press_ctrl(&mut orchestrator, "a");
        press(&mut orchestrator, "a");

        assert_eq!(orchestrator.state().login().email.text(), "a");
        assert_eq!(notice(&orchestrator), None);
    }

    #[test]
    fn events_after_quit_are_ignored() {
        let mut orchestrator = started_at_home();
        press(&mut orchestrator, "q");

        press(&mut orchestrator, "2");

        assert_eq!(
            orchestrator.state().navigator().active_tab(),
            Some(Tab::Chats)
        );
    }
}
