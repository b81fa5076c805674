//! Home screen: tab bar plus the body of the active tab.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    chat::initials,
    chat_list_state::ChatListState,
    navigation::Tab,
    sample_data::{self, Profile},
};

use super::{chat_rows::chat_row_line, styles};

pub fn render_home(frame: &mut Frame<'_>, area: Rect, tab: Tab, chat_list: &ChatListState) {
    let [tabs_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

    let total_unread = chat_list.registry().total_unread();
    frame.render_widget(Paragraph::new(tab_bar_line(tab, total_unread)), tabs_area);

    let block = Block::default()
        .title(tab.title())
        .borders(Borders::ALL)
        .border_style(styles::focused_field_border_style());

    match tab {
        Tab::Chats => render_chats(frame, body_area, block, chat_list),
        Tab::Profile => frame.render_widget(
            Paragraph::new(profile_lines(&sample_data::PROFILE)).block(block),
            body_area,
        ),
        Tab::Contacts => frame.render_widget(List::new(contact_items()).block(block), body_area),
        Tab::Settings => frame.render_widget(List::new(settings_items()).block(block), body_area),
    }
}

fn render_chats(frame: &mut Frame<'_>, area: Rect, block: Block<'_>, chat_list: &ChatListState) {
    let registry = chat_list.registry();
    if registry.is_empty() {
        frame.render_widget(Paragraph::new("No chats yet.").block(block), area);
        return;
    }

    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'static>> = registry
        .list()
        .iter()
        .map(|thread| ListItem::new(chat_row_line(registry, thread, inner_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles::highlight_style());

    let mut list_state = ListState::default();
    list_state.select(chat_list.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// `1 Chats (3)  2 Profile  3 Contacts  4 Settings`; the unread total is
/// omitted when zero.
fn tab_bar_line(active: Tab, total_unread: u32) -> Line<'static> {
    let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);

    for tab in Tab::ALL {
        let mut label = format!(" {} {}", tab.position() + 1, tab.title());
        if tab == Tab::Chats && total_unread > 0 {
            label.push_str(&format!(" ({total_unread})"));
        }
        label.push(' ');

        let style = if tab == active {
            styles::active_tab_style()
        } else {
            styles::inactive_tab_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn profile_lines(profile: &Profile) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", profile.avatar),
            styles::avatar_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(profile.name, styles::brand_title_style())),
        Line::from(Span::styled(profile.email, styles::hint_style())),
        Line::from(""),
    ];

    lines.extend(
        sample_data::PROFILE_OPTIONS
            .iter()
            .map(|option| Line::from(Span::styled(format!("> {option}"), styles::list_item_style()))),
    );

    lines
}

fn contact_items() -> Vec<ListItem<'static>> {
    sample_data::CONTACTS
        .iter()
        .map(|name| {
            let avatar = format!("{:<2}", initials(name));
            ListItem::new(Line::from(vec![
                Span::styled(avatar, styles::avatar_style()),
                Span::raw(" "),
                Span::styled(*name, styles::list_item_style()),
            ]))
        })
        .collect()
}

fn settings_items() -> Vec<ListItem<'static>> {
    sample_data::SETTINGS_ITEMS
        .iter()
        .map(|item| ListItem::new(Span::styled(*item, styles::list_item_style())))
        .collect()
}
