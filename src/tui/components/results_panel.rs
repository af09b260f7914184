// Results panel component
//
// One rendering per request state:
// - Idle: waiting placeholder
// - Loading: spinner
// - Success: numbered caption cards with per-card copy state
// - Error: failure placeholder

use crate::session::{CopyTarget, GenerationStatus, Tone};
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Lines above the first card in the success view
const HEADER_LINES: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(if focused {
            app.theme.highlight
        } else {
            app.theme.border
        }))
        .title(" Results ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.session.status {
        GenerationStatus::Idle => render_placeholder(
            f,
            inner,
            app,
            vec![
                Line::from("✨"),
                Line::from(Span::styled(
                    "Waiting for your input...",
                    Style::default()
                        .fg(app.theme.foreground)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Enter details to generate captions.",
                    Style::default().fg(app.theme.muted),
                )),
            ],
        ),
        GenerationStatus::Loading { .. } => render_placeholder(
            f,
            inner,
            app,
            vec![
                Line::from(Span::styled(
                    app.spinner_char().to_string(),
                    Style::default().fg(app.theme.spinner),
                )),
                Line::from(Span::styled(
                    "Generating the Hype...",
                    Style::default()
                        .fg(app.theme.spinner)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Consulting the group chat",
                    Style::default().fg(app.theme.muted),
                )),
            ],
        ),
        GenerationStatus::Success { captions, tone } => {
            render_captions(f, inner, app, captions, *tone)
        }
        GenerationStatus::Error { .. } => render_placeholder(
            f,
            inner,
            app,
            vec![
                Line::from("🫠"),
                Line::from(Span::styled(
                    "Total Flop",
                    Style::default()
                        .fg(app.theme.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Something went wrong. Don't ghost us, try again!",
                    Style::default().fg(app.theme.muted),
                )),
            ],
        ),
    }
}

/// Vertically centered block of lines
fn render_placeholder(f: &mut Frame, area: Rect, app: &App, lines: Vec<Line<'static>>) {
    let top = (area.height as usize).saturating_sub(lines.len()) / 2;
    let mut text = vec![Line::from(""); top];
    text.extend(lines);

    let placeholder = Paragraph::new(text)
        .style(Style::default().fg(app.theme.foreground))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

fn render_captions(f: &mut Frame, area: Rect, app: &App, captions: &[String], tone: Tone) {
    let theme = &app.theme;
    let width = area.width.max(1) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "Your Captions",
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" Vibe: {} ", tone),
                Style::default()
                    .fg(theme.tone_selected_fg)
                    .bg(theme.tone_selected_bg),
            ),
        ]),
        Line::from(""),
    ];

    if captions.is_empty() {
        lines.push(Line::from(Span::styled(
            "The model came back empty-handed. Try another vibe?",
            Style::default().fg(theme.muted),
        )));
    }

    // Track where the selected card starts so it can be scrolled into view
    let mut selected_span = (0, 0);
    let mut row = HEADER_LINES;

    for (i, caption) in captions.iter().enumerate() {
        let selected = i == app.selected_caption;
        let copy_label = if app.is_copied(CopyTarget::Caption(i)) {
            Span::styled(
                "✓ Copied",
                Style::default()
                    .fg(theme.copied)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[c] Copy", Style::default().fg(theme.muted))
        };

        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.highlight)),
            Span::styled(
                format!("Option {}", i + 1),
                Style::default()
                    .fg(theme.caption_number)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            copy_label,
        ]));

        let caption_style = if selected {
            Style::default()
                .fg(theme.caption)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.caption)
        };
        for text_line in caption.lines() {
            lines.push(Line::from(Span::styled(text_line.to_string(), caption_style)));
        }
        lines.push(Line::from(""));

        let height = card_height(caption, width);
        if selected {
            selected_span = (row, height);
        }
        row += height;
    }

    let scroll = scroll_offset(selected_span, area.height as usize);

    let cards = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(cards, area);
}

/// Rows a caption card occupies: label, wrapped text, spacer
fn card_height(caption: &str, width: usize) -> usize {
    let text_rows: usize = caption
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    text_rows.max(1) + 2
}

/// First visible row so that the selected card fits in the viewport
fn scroll_offset((start, height): (usize, usize), viewport: usize) -> usize {
    if start + height <= viewport {
        0
    } else {
        (start + height - viewport).min(start)
    }
}
