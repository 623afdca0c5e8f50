//! One row per STUN server

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;

const DELETE_MARKER: &str = " ✕ ";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = &app.colors;
    let texts = app.texts;
    let editing = app.editing();
    // no deleting while a save is running
    let show_delete = !app.save_state.loading;
    let width = usize::from(area.width);

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let prefix = row_prefix(index);
            let text = match editing {
                Some(edit) if edit.row == index => edit.buffer.as_str(),
                _ => row.as_str(),
            };

            let mut spans = vec![Span::styled(prefix.clone(), c.muted())];
            let text_width = if text.is_empty() {
                spans.push(Span::styled(texts.stun.placeholder, c.muted()));
                texts.stun.placeholder.width()
            } else {
                spans.push(Span::raw(text.to_string()));
                text.width()
            };

            if show_delete {
                let used = prefix.width() + text_width + DELETE_MARKER.width();
                spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
                spans.push(Span::styled(DELETE_MARKER, Style::default().fg(c.error)));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).highlight_style(c.selected());
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);

    if let Some(edit) = editing {
        let visible_row = edit.row.saturating_sub(state.offset());
        let x = row_prefix(edit.row).width() + edit.buffer.width();
        let x = area.x + u16::try_from(x).unwrap_or(u16::MAX).min(area.width.saturating_sub(1));
        let y = area.y + u16::try_from(visible_row).unwrap_or(u16::MAX).min(area.height.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn row_prefix(index: usize) -> String {
    format!(" {:>2}  ", index + 1)
}
