// Form panel component
//
// Product name and features inputs, the vibe picker, the generate button,
// the message banner, and the thread copy button once captions exist.

use super::text_field::TextField;
use crate::session::{CopyTarget, Field, Tone};
use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Drop the deets ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // product name
            Constraint::Length(3), // features
            Constraint::Length(3), // vibe
            Constraint::Length(2), // message
            Constraint::Length(3), // generate
            Constraint::Length(3), // thread
            Constraint::Min(0),
        ])
        .split(inner);

    let compact = !Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);

    render_input(
        f,
        rows[0],
        app,
        LabeledInput {
            field: Field::ProductName,
            label: "Product Name",
            placeholder: if compact {
                "e.g., Spicy Lip Balm"
            } else {
                "e.g., Spicy Cheetos Lip Balm"
            },
            text: &app.name_field,
            focused: app.focus == Focus::ProductName,
        },
    );
    render_input(
        f,
        rows[1],
        app,
        LabeledInput {
            field: Field::Features,
            label: "3 Key Features",
            placeholder: if compact {
                "e.g., fiery, 24h moisture"
            } else {
                "e.g., Tastes fiery, moisturizes for 24h, bright neon orange tint"
            },
            text: &app.features_field,
            focused: app.focus == Focus::Features,
        },
    );
    render_tone_picker(f, rows[2], app);
    render_message(f, rows[3], app);
    render_generate_button(f, rows[4], app);

    if app.session.thread_available() {
        render_thread_button(f, rows[5], app);
    }
}

struct LabeledInput<'a> {
    field: Field,
    label: &'a str,
    placeholder: &'a str,
    text: &'a TextField,
    focused: bool,
}

fn render_input(f: &mut Frame, area: Rect, app: &App, input: LabeledInput<'_>) {
    let theme = &app.theme;
    let invalid = app.session.errors.is_invalid(input.field);

    let mut title = vec![Span::styled(
        format!(" {} ", input.label),
        Style::default().fg(theme.label),
    )];
    if invalid {
        title.push(Span::styled(
            "Required ",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let border_color = if invalid {
        theme.error
    } else if input.focused {
        theme.highlight
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(title));
    let inner = block.inner(area);

    // Keep the cursor inside the box by scrolling long values horizontally
    let cursor = input.text.cursor_column();
    let offset = cursor.saturating_sub(inner.width.saturating_sub(1));

    let content = if input.text.value().is_empty() {
        Paragraph::new(input.placeholder).style(
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Paragraph::new(input.text.value())
            .style(Style::default().fg(theme.input))
            .scroll((0, offset))
    };

    f.render_widget(content.block(block), area);

    if input.focused && inner.width > 0 {
        f.set_cursor_position((inner.x + cursor - offset, inner.y));
    }
}

fn render_tone_picker(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Tone;

    let mut spans = Vec::new();
    for (i, tone) in Tone::ALL.iter().enumerate() {
        let style = if *tone == app.session.tone {
            Style::default()
                .fg(theme.tone_selected_fg)
                .bg(theme.tone_selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.label)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, tone), style));
        spans.push(Span::raw(" "));
    }

    let picker = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(if focused {
                theme.highlight
            } else {
                theme.border
            }))
            .title(Span::styled(
                " Choose Your Vibe ",
                Style::default().fg(theme.label),
            )),
    );

    f.render_widget(picker, area);
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = app.session.message {
        let banner = Paragraph::new(message)
            .style(
                Style::default()
                    .fg(app.theme.error)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(banner, area);
    }
}

fn render_generate_button(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Generate;

    let (label, style) = if app.session.can_submit() {
        (
            "Hype It Up 🚀".to_string(),
            Style::default()
                .fg(theme.button)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("{} Cooking...", app.spinner_char()),
            Style::default().fg(theme.button_disabled),
        )
    };

    let border_color = if focused { theme.highlight } else { theme.button };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(button, area);
}

fn render_thread_button(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let (label, color) = if app.is_copied(CopyTarget::Thread) {
        ("Copied Thread! ✅", theme.copied)
    } else {
        ("Copy Thread for Twitter 🐦  (Ctrl+T)", theme.label)
    };

    let button = Paragraph::new(label)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(button, area);
}
