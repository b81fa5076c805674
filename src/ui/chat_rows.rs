//! Single-line rows for the Chats tab.
//!
//! Row layout: `AJ Alex Johnson  preview text...    09:45 [2]`. The preview
//! absorbs all slack: it is padded when short and cut with an ellipsis when
//! the row would overflow.

use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{chat::ChatThread, chat_registry::ChatRegistry};

use super::styles;

const AVATAR_WIDTH: usize = 2;
const ELLIPSIS: &str = "...";

/// Builds the styled row for one thread, fitted to `width` columns.
pub fn chat_row_line(registry: &ChatRegistry, thread: &ChatThread, width: usize) -> Line<'static> {
    let parts = RowParts::new(registry, thread, width);

    let mut spans = vec![
        Span::styled(parts.avatar, styles::avatar_style()),
        Span::raw(" "),
        Span::styled(thread.display_name.clone(), styles::chat_name_style()),
        Span::raw(" "),
        Span::styled(parts.preview, styles::chat_preview_style()),
    ];

    if parts.padding > 0 {
        spans.push(Span::raw(" ".repeat(parts.padding)));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        thread.timestamp_label.clone(),
        styles::timestamp_style(),
    ));

    if let Some(badge) = parts.badge {
        spans.push(Span::styled(badge, styles::unread_count_style()));
    }

    Line::from(spans)
}

/// Unstyled version of [`chat_row_line`] for plain-text output.
pub fn chat_row_text(registry: &ChatRegistry, thread: &ChatThread, width: usize) -> String {
    chat_row_line(registry, thread, width)
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

struct RowParts {
    avatar: String,
    preview: String,
    padding: usize,
    badge: Option<String>,
}

impl RowParts {
    fn new(registry: &ChatRegistry, thread: &ChatThread, width: usize) -> Self {
        let avatar = pad_to_width(&registry.initials_for(thread), AVATAR_WIDTH);
        let badge = registry
            .unread_badge(thread)
            .map(|count| format!(" [{count}]"));

        let fixed_width = AVATAR_WIDTH
            + 1
            + thread.display_name.width()
            + 1
            + 1
            + thread.timestamp_label.width()
            + badge.as_deref().map_or(0, |badge| badge.width());
        let available = width.saturating_sub(fixed_width);

        let preview = normalize_preview(&thread.last_message_preview);
        let preview = truncate_to_width(&preview, available);
        let padding = available.saturating_sub(preview.width());

        Self {
            avatar,
            preview,
            padding,
            badge,
        }
    }
}

/// Collapses newlines and runs of whitespace into single spaces.
fn normalize_preview(preview: &str) -> String {
    preview.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to at most `max_width` display columns, ending with `...`
/// when anything was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut used = 0;
    let mut kept = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        kept.push(ch);
    }

    kept.push_str(ELLIPSIS);
    kept
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}
