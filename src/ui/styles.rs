//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Brand blue used for titles and highlights.
const BRAND_BLUE: Color = Color::Rgb(0x21, 0x96, 0xF3);
/// Darker blue used for avatars and accents.
const BRAND_DARK_BLUE: Color = Color::Rgb(0x0D, 0x47, 0xA1);

// =============================================================================
// Splash and auth styles
// =============================================================================

pub fn brand_title_style() -> Style {
    Style::default()
        .fg(BRAND_BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn brand_caption_style() -> Style {
    Style::default().fg(BRAND_BLUE)
}

pub fn field_label_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn field_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn focused_field_border_style() -> Style {
    Style::default().fg(BRAND_BLUE)
}

pub fn unfocused_field_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Home styles
// =============================================================================

pub fn active_tab_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BRAND_DARK_BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_tab_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Style for avatar initials.
pub fn avatar_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BRAND_DARK_BLUE)
        .add_modifier(Modifier::BOLD)
}

/// Style for chat name (bold, bright).
pub fn chat_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for message preview text (dimmed).
pub fn chat_preview_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for unread count badge (green).
pub fn unread_count_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn highlight_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

// =============================================================================
// Status line
// =============================================================================

pub fn notice_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
