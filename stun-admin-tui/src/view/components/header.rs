//! Panel header: row count on the left, add / saving / saved on the right

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = &app.colors;
    let texts = app.texts;

    let left = if app.editing().is_some() {
        texts.stun.input_label.to_string()
    } else {
        (texts.stun.server_count)(app.rows.len())
    };

    // the add affordance gives way to the save indicator
    let affordance = if app.save_state.loading {
        let frame_symbol = SPINNER[app.tick % SPINNER.len()];
        Span::styled(
            format!("{frame_symbol} {}", texts.common.saving),
            Style::default().fg(c.warning),
        )
    } else if app.save_state.saved {
        Span::styled(
            format!("✓ {}", texts.common.saved),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("[+] {}", texts.common.add),
            Style::default().fg(c.highlight),
        )
    };

    let right_width = u16::try_from(affordance.content.width()).unwrap_or(u16::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    frame.render_widget(Paragraph::new(left).style(c.muted()), columns[0]);
    frame.render_widget(
        Paragraph::new(affordance).alignment(Alignment::Right),
        columns[1],
    );
}
