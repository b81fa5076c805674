//! Bordered single-line form field used by the login and sign-up screens.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::text_field::TextField;

use super::styles;

/// Height of one rendered field: border, text, border.
pub const FIELD_HEIGHT: u16 = 3;

pub struct FormField<'a> {
    pub label: &'static str,
    pub field: &'a TextField,
    pub focused: bool,
    pub masked: bool,
}

pub fn render_form_field(frame: &mut Frame<'_>, area: Rect, form_field: &FormField<'_>) {
    let border_style = if form_field.focused {
        styles::focused_field_border_style()
    } else {
        styles::unfocused_field_border_style()
    };

    let paragraph = Paragraph::new(field_line(form_field.field, form_field.masked)).block(
        Block::default()
            .title(Span::styled(form_field.label, styles::field_label_style()))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if form_field.focused {
        let offset = cursor_column(form_field.field, form_field.masked);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(offset.min(u16::MAX as usize) as u16)
            .min(area.right().saturating_sub(2));
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn field_line(field: &TextField, masked: bool) -> Line<'static> {
    Line::from(Span::styled(
        field.display_text(masked),
        styles::field_text_style(),
    ))
}

/// Display column of the cursor inside the field's text area.
fn cursor_column(field: &TextField, masked: bool) -> usize {
    let shown = field.display_text(masked);
    let before_cursor: String = shown.chars().take(field.cursor_position()).collect();
    before_cursor.width()
}
