//! STUN help text

use ratatui::{
    layout::Rect,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(app.texts.stun.help)
        .style(app.colors.muted())
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
