//! Status bar: current message first, then key hints for the input mode

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = &app.colors;
    let separator = || Span::styled(" │ ", Style::default().fg(c.muted));
    let mut spans = Vec::new();

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(format!(" {msg}"), Style::default().fg(c.warning)));
        spans.push(separator());
    } else {
        spans.push(Span::raw(" "));
    }

    for (i, (key, desc)) in hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(key, c.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(desc));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(c.statusbar());
    frame.render_widget(paragraph, area);
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &app.texts.hints;
    if app.editing().is_some() {
        return vec![
            ("Enter", h.finish),
            ("Esc", h.revert),
            ("Ctrl+u", h.clear),
        ];
    }

    let mut hints = vec![("↑↓", h.select), ("a", h.add), ("Enter", h.edit)];
    if !app.save_state.loading {
        hints.push(("d", h.delete));
    }
    hints.push(("q", h.quit));
    hints
}
