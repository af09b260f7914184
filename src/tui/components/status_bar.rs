// Status bar component
//
// Renders request state on the left and keybind hints for the focused region.

use crate::session::GenerationStatus;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals drop the global keybinds and keep only the focused
/// region's hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let state = match &app.session.status {
        GenerationStatus::Idle => "💤 idle".to_string(),
        GenerationStatus::Loading { request_id, .. } => {
            format!("{} request {}", app.spinner_char(), request_id)
        }
        GenerationStatus::Success { captions, .. } => format!("✅ {} captions", captions.len()),
        GenerationStatus::Error { kind } => format!("💀 {:?} error", kind),
    };

    let status_text = if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        format!(
            " {} │ {} │ Tab:next  Ctrl+G:generate  Ctrl+T:thread  Esc:quit",
            state,
            app.focus.hint()
        )
    } else {
        format!(" {} │ {}", state, app.focus.hint())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
