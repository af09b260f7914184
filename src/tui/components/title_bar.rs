// Title bar component
//
// Renders the app title with the loading indicator and model name.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name
/// - Spinner while a generation is in flight
/// - Tagline (hidden on narrow terminals)
/// - Model name in the top-right corner
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let indicator = if app.session.is_loading() {
        format!(" {} cooking", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        format!(
            " ✨ Gen-Z Hype Machine{} ──── Turn boring product specs into main-character captions. No cap. 🧢",
            indicator
        )
    } else {
        format!(" ✨ Hype Machine{}", indicator)
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(
                    Line::from(format!(" {} ", app.model))
                        .style(Style::default().fg(app.theme.muted))
                        .right_aligned(),
                ),
        );

    f.render_widget(title, area);
}
