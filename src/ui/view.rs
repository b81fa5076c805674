use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{
    navigation::{Screen, Tab},
    shell_state::ShellState,
};

use super::{auth_view, home_view, styles};

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let navigator = state.navigator();
    match navigator.screen() {
        Screen::Splash => auth_view::render_splash(frame, content_area),
        Screen::Login => auth_view::render_login(frame, content_area, state.login()),
        Screen::SignUp => auth_view::render_sign_up(frame, content_area, state.sign_up()),
        Screen::Home => home_view::render_home(
            frame,
            content_area,
            navigator.active_tab().unwrap_or_default(),
            state.chat_list(),
        ),
    }

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

/// The active notice if there is one, otherwise key hints for the screen.
fn status_line(state: &ShellState) -> Line<'static> {
    if let Some(notice) = state.notice() {
        return Line::from(Span::styled(
            format!(" {} ", notice.text()),
            styles::notice_style(),
        ));
    }

    let navigator = state.navigator();
    let hint = match navigator.screen() {
        Screen::Splash => "q: quit",
        Screen::Login => "Tab: next field | Enter: login | Ctrl+S: sign up | Ctrl+C: quit",
        Screen::SignUp => "Tab: next field | Enter: create account | Ctrl+L: login | Ctrl+C: quit",
        Screen::Home => match navigator.active_tab() {
            Some(Tab::Chats) => "j/k: navigate | Enter: mark read | 1-4/Tab: switch tab | q: quit",
            _ => "1-4/Tab: switch tab | q: quit",
        },
    };

    Line::from(Span::styled(
        format!("{} | {hint}", navigator.screen().as_label()),
        styles::status_style(),
    ))
}
