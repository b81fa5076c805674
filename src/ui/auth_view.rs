//! Splash, login and sign-up screens.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::auth_form::{LoginField, LoginForm, SignUpField, SignUpForm};

use super::{
    form_field::{render_form_field, FormField, FIELD_HEIGHT},
    styles,
};

const FORM_WIDTH: u16 = 48;
const HEADER_HEIGHT: u16 = 3;
const HINT_HEIGHT: u16 = 2;

pub fn render_splash(frame: &mut Frame<'_>, area: Rect) {
    let lines = splash_lines();
    let target = centered(area, area.width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        target,
    );
}

pub fn render_login(frame: &mut Frame<'_>, area: Rect, form: &LoginForm) {
    render_form_screen(
        frame,
        area,
        login_header_lines(),
        &login_fields(form),
        login_hint_line(),
    );
}

pub fn render_sign_up(frame: &mut Frame<'_>, area: Rect, form: &SignUpForm) {
    render_form_screen(
        frame,
        area,
        sign_up_header_lines(),
        &sign_up_fields(form),
        sign_up_hint_line(),
    );
}

fn render_form_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    header: Vec<Line<'static>>,
    fields: &[FormField<'_>],
    hint: Line<'static>,
) {
    let height = HEADER_HEIGHT + FIELD_HEIGHT * fields.len() as u16 + HINT_HEIGHT;
    let form_area = centered(area, FORM_WIDTH, height);

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(HINT_HEIGHT));
    let rows = Layout::vertical(constraints).split(form_area);

    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        rows[0],
    );
    for (field, row) in fields.iter().zip(rows.iter().skip(1)) {
        render_form_field(frame, *row, field);
    }
    frame.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        rows[rows.len() - 1],
    );
}

/// Clamps a `width` x `height` box to `area` and centres it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn splash_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("SwiftChat", styles::brand_title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Chat faster. Stay connected.",
            styles::brand_caption_style(),
        )),
    ]
}

fn login_header_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Welcome Back!", styles::brand_title_style())),
        Line::from(Span::styled(
            "Sign in to continue chatting",
            styles::brand_caption_style(),
        )),
    ]
}

fn sign_up_header_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Create Account", styles::brand_title_style())),
        Line::from(Span::styled(
            "Join SwiftChat and start messaging instantly.",
            styles::brand_caption_style(),
        )),
    ]
}

fn login_fields(form: &LoginForm) -> [FormField<'_>; 2] {
    [
        FormField {
            label: "Email",
            field: &form.email,
            focused: form.focus() == LoginField::Email,
            masked: false,
        },
        FormField {
            label: "Password",
            field: &form.password,
            focused: form.focus() == LoginField::Password,
            masked: !form.password_visible(),
        },
    ]
}

fn sign_up_fields(form: &SignUpForm) -> [FormField<'_>; 4] {
    [
        FormField {
            label: "Full Name",
            field: &form.name,
            focused: form.focus() == SignUpField::Name,
            masked: false,
        },
        FormField {
            label: "Email",
            field: &form.email,
            focused: form.focus() == SignUpField::Email,
            masked: false,
        },
        FormField {
            label: "Password",
            field: &form.password,
            focused: form.focus() == SignUpField::Password,
            masked: !form.password_visible(),
        },
        FormField {
            label: "Confirm Password",
            field: &form.confirm_password,
            focused: form.focus() == SignUpField::ConfirmPassword,
            masked: !form.confirm_password_visible(),
        },
    ]
}

fn login_hint_line() -> Line<'static> {
    Line::from(Span::styled(
        "Enter: Login | Ctrl+S: Sign Up | Ctrl+V: show password",
        styles::hint_style(),
    ))
}

fn sign_up_hint_line() -> Line<'static> {
    Line::from(Span::styled(
        "Enter: Sign Up | Ctrl+L: Log in | Ctrl+V: show password",
        styles::hint_style(),
    ))
}
