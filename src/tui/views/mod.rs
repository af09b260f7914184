// Views module - screen-level rendering logic
//
// A single screen: title on top, form and results in the middle, logs and
// status bar at the bottom. The breakpoint decides whether form and results
// sit side by side or stacked.

use super::app::App;
use super::layout::Breakpoint;
use crate::tui::components::{form_panel, logs_panel, results_panel, status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the form panel contents plus its border
const FORM_HEIGHT: u16 = 19;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let bp = Breakpoint::from_width(f.area().width);
    let logs_height = if bp.at_least(Breakpoint::Normal) { 6 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_content(f, chunks[1], app, bp);
    if logs_height > 0 {
        logs_panel::render(f, chunks[2], app);
    }
    status_bar::render(f, chunks[3], app);
}

fn render_content(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let (direction, constraints) = if bp.at_least(Breakpoint::Wide) {
        (
            Direction::Horizontal,
            [Constraint::Percentage(45), Constraint::Percentage(55)],
        )
    } else {
        (
            Direction::Vertical,
            [Constraint::Length(FORM_HEIGHT), Constraint::Min(5)],
        )
    };

    let panes = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    form_panel::render(f, panes[0], app);
    results_panel::render(f, panes[1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::session::{Event, Tone};
    use crate::tui::clipboard::RecordingClipboard;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        App::with_clipboard(
            &Config::default(),
            LogBuffer::new(),
            Box::new(RecordingClipboard::default()),
        )
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn idle_screen_shows_form_and_placeholder() {
        let text = screen(&app(), 120, 40);
        assert!(text.contains("Product Name"));
        assert!(text.contains("Choose Your Vibe"));
        assert!(text.contains("Waiting for your input..."));
        assert!(!text.contains("Copy Thread"));
    }

    #[test]
    fn success_screen_lists_captions_with_tone() {
        let mut app = app();
        app.dispatch(Event::Edit {
            field: crate::session::Field::ProductName,
            value: "Balm".into(),
        });
        app.dispatch(Event::Edit {
            field: crate::session::Field::Features,
            value: "neon".into(),
        });
        app.dispatch(Event::SelectTone(Tone::Chill));
        let jobs = app.dispatch(Event::Submit);
        // Changing tone after submit doesn't change the batch's label
        app.dispatch(Event::SelectTone(Tone::Witty));
        app.dispatch(Event::GenerationFinished {
            request_id: jobs[0].request_id,
            result: Ok(vec!["first one".into(), "second one".into()]),
        });

        let text = screen(&app, 120, 40);
        assert!(text.contains("Your Captions"));
        assert!(text.contains("Vibe: Chill"));
        assert!(text.contains("Option 1"));
        assert!(text.contains("second one"));
        assert!(text.contains("Copy Thread"));
    }

    #[test]
    fn validation_banner_and_required_markers() {
        let mut app = app();
        app.dispatch(Event::Submit);

        let text = screen(&app, 80, 50);
        assert!(text.contains("Required"));
        assert!(text.contains("Bestie, don't leave me hanging!"));
    }

    #[test]
    fn narrow_terminal_still_renders() {
        let text = screen(&app(), 40, 30);
        assert!(text.contains("Hype Machine"));
    }
}
