//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;

use super::components;

const HELP_HEIGHT: u16 = 2;

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_panel(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = &app.colors;
    let title = Paragraph::new(format!(" {} v{}", app.texts.common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// The STUN server panel: header, optional error, rows, help text
fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let c = &app.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(c.border(app.editing().is_some()))
        .title(format!(" {} ", app.texts.stun.title))
        .title_style(c.title())
        .style(Style::default().bg(c.bg).fg(c.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error_height = u16::from(app.save_state.error.is_some());
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Min(1),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(inner);

    components::header::render(app, frame, sections[0]);
    if let Some(error) = &app.save_state.error {
        let line = Paragraph::new(format!("{}: {error}", app.texts.common.error))
            .style(Style::default().fg(c.error))
            .wrap(Wrap { trim: true });
        frame.render_widget(line, sections[1]);
    }
    components::server_list::render(app, frame, sections[2]);
    components::help::render(app, frame, sections[3]);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use stun_admin_core::types::DEFAULT_STUN_SERVER;

    use super::*;
    use crate::message::{AppMessage, ListMessage};
    use crate::test_support::{test_app, test_app_with_store, SlowSettingsStore};
    use crate::update::update;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test(start_paused = true)]
    async fn renders_rows_add_affordance_and_help() {
        let (app, _store) = test_app(Some(&["stun.a.example:3478", "stun.b.example:443"])).await;
        let screen = draw(&app);

        assert!(screen.contains("STUN servers"));
        assert!(screen.contains("stun.a.example:3478"));
        assert!(screen.contains("stun.b.example:443"));
        assert!(screen.contains("[+] Add"));
        assert!(screen.contains("✕"));
        assert!(screen.contains("A STUN server is used to determine the public IP address"));
        assert!(screen.contains("2 STUN servers"));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_row_shows_placeholder() {
        let (mut app, _store) = test_app(None).await;
        update(&mut app, AppMessage::List(ListMessage::AddRow));

        let screen = draw(&app);
        assert!(screen.contains(DEFAULT_STUN_SERVER));
        assert!(screen.contains("stunserver:port"));
        // the header names the field while editing
        assert!(screen.contains("STUN server URL"));
    }

    #[tokio::test(start_paused = true)]
    async fn saving_shows_spinner_and_hides_delete() {
        let store = Arc::new(SlowSettingsStore::new(Duration::from_millis(2000)));
        let mut app = test_app_with_store(store, Some(&["a:1"])).await;

        app.editor.edit_row(0, "a:2").unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        app.refresh();

        let screen = draw(&app);
        assert!(screen.contains("Saving..."));
        assert!(!screen.contains("[+] Add"));
        assert!(!screen.contains("✕"));
    }

    #[tokio::test(start_paused = true)]
    async fn checkmark_after_save_then_add_again() {
        let (mut app, _store) = test_app(Some(&["a:1"])).await;

        app.editor.edit_row(0, "a:2").unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;
        app.refresh();
        let screen = draw(&app);
        assert!(screen.contains("✓ Saved"));
        assert!(!screen.contains("[+] Add"));

        tokio::time::sleep(Duration::from_millis(3000)).await;
        app.refresh();
        let screen = draw(&app);
        assert!(!screen.contains("✓ Saved"));
        assert!(screen.contains("[+] Add"));
    }

    #[tokio::test(start_paused = true)]
    async fn edit_mode_hints_name_clear_for_ctrl_u() {
        let (mut app, _store) = test_app(Some(&["a:1"])).await;
        update(&mut app, AppMessage::List(ListMessage::EditSelected));
        assert!(app.editing().is_some());

        let screen = draw(&app);
        assert!(screen.contains("Ctrl+u Clear"));
        assert!(!screen.contains("Ctrl+u Delete"));
    }

    #[tokio::test(start_paused = true)]
    async fn status_message_is_shown() {
        let (mut app, _store) = test_app(Some(&["a:1"])).await;
        update(&mut app, AppMessage::List(ListMessage::RemoveSelected));

        let screen = draw(&app);
        assert!(screen.contains("You deleted all STUN servers"));
    }
}
