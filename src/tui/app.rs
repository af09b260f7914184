// TUI application state
//
// Wraps the session state machine with the pieces only the terminal needs:
// text field cursors, focus, caption selection, animation frame, theme.
// Every change to form/lifecycle state goes through `dispatch`, which feeds
// the session one event and runs clipboard effects inline. Generation
// effects are handed back to the event loop, which owns the runtime.

use super::clipboard::{ClipboardSink, SystemClipboard};
use super::components::text_field::{EditOutcome, TextField};
use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::{
    CopyTarget, Effect, Event, Field, RequestId, Session, Tone, ValidatedInput,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Focusable regions, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ProductName,
    Features,
    Tone,
    Generate,
    Results,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::ProductName,
        Focus::Features,
        Focus::Tone,
        Focus::Generate,
        Focus::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Keybind hints for the status bar
    pub fn hint(self) -> &'static str {
        match self {
            Focus::ProductName | Focus::Features => "type to edit  ←→:move  Enter:next",
            Focus::Tone => "←→ or 1-4:pick vibe  Enter:next",
            Focus::Generate => "Enter:hype it up",
            Focus::Results => "↑↓:select  Enter/c:copy  t:copy thread",
        }
    }
}

/// A generation request the event loop must start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    pub request_id: RequestId,
    pub input: ValidatedInput,
    pub tone: Tone,
}

/// Main application state for the TUI
pub struct App {
    /// Form and request lifecycle
    pub session: Session,

    pub focus: Focus,
    pub name_field: TextField,
    pub features_field: TextField,

    /// Highlighted caption in the results pane (0-based)
    pub selected_caption: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Spinner frame, advanced on every tick
    pub animation_frame: usize,

    pub theme: Theme,

    /// Model name for the title bar
    pub model: String,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self::with_clipboard(config, log_buffer, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(
        config: &Config,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            session: Session::new(config.default_tone),
            focus: Focus::default(),
            name_field: TextField::default(),
            features_field: TextField::default(),
            selected_caption: 0,
            should_quit: false,
            animation_frame: 0,
            theme: Theme::by_name(&config.theme),
            model: config.model.clone(),
            log_buffer,
            clipboard,
        }
    }

    /// Feed one event to the session
    ///
    /// Clipboard writes happen here (fire-and-forget); generation requests
    /// are returned for the caller to start.
    pub fn dispatch(&mut self, event: Event) -> Vec<GenerationJob> {
        let (next, effects) = std::mem::take(&mut self.session).update(event);
        self.session = next;

        let mut jobs = Vec::new();
        for effect in effects {
            match effect {
                Effect::Generate {
                    request_id,
                    input,
                    tone,
                } => {
                    self.selected_caption = 0;
                    jobs.push(GenerationJob {
                        request_id,
                        input,
                        tone,
                    });
                }
                Effect::CopyToClipboard { target, text } => self.write_clipboard(target, &text),
            }
        }
        jobs
    }

    fn write_clipboard(&mut self, target: CopyTarget, text: &str) {
        // The "copied" acknowledgment is already showing; a failed write only logs
        match self.clipboard.write_text(text) {
            Ok(()) => tracing::debug!("Copied {:?} ({} bytes)", target, text.len()),
            Err(e) => tracing::warn!("Clipboard write failed for {:?}: {:#}", target, e),
        }
    }

    /// Advance animations and expire copy acknowledgments
    pub fn on_tick(&mut self, now: Instant) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.dispatch(Event::Tick(now));
    }

    /// Get current spinner character based on animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Whether a copy acknowledgment is visible right now
    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.session.acks.is_active(target, Instant::now())
    }

    /// Handle keyboard input
    /// Layered dispatch: global chords → focused region
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<GenerationJob> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return Vec::new();
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Vec::new();
            }
            KeyCode::Char('g') if ctrl => return self.dispatch(Event::Submit),
            KeyCode::Char('t') if ctrl => return self.copy_thread(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        match self.focus {
            Focus::ProductName => self.edit(Field::ProductName, key),
            Focus::Features => self.edit(Field::Features, key),
            Focus::Tone => self.handle_tone_key(key.code),
            Focus::Generate => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Event::Submit),
                _ => Vec::new(),
            },
            Focus::Results => self.handle_results_key(key.code),
        }
    }

    fn edit(&mut self, field: Field, key: KeyEvent) -> Vec<GenerationJob> {
        let text_field = match field {
            Field::ProductName => &mut self.name_field,
            Field::Features => &mut self.features_field,
        };

        match text_field.handle_key(key) {
            EditOutcome::Changed => {
                let value = text_field.value().to_string();
                self.dispatch(Event::Edit { field, value })
            }
            EditOutcome::Moved => Vec::new(),
            EditOutcome::Ignored => {
                if key.code == KeyCode::Enter {
                    self.focus = self.focus.next();
                }
                Vec::new()
            }
        }
    }

    fn handle_tone_key(&mut self, code: KeyCode) -> Vec<GenerationJob> {
        let tone = self.session.tone;
        let picked = match code {
            KeyCode::Left | KeyCode::Up => Some(tone.prev()),
            KeyCode::Right | KeyCode::Down => Some(tone.next()),
            KeyCode::Char(c @ '1'..='4') => Tone::from_index(c as usize - '1' as usize),
            KeyCode::Enter => {
                self.focus = self.focus.next();
                None
            }
            _ => None,
        };

        match picked {
            Some(tone) => self.dispatch(Event::SelectTone(tone)),
            None => Vec::new(),
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) -> Vec<GenerationJob> {
        let count = self.session.captions().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_caption = self.selected_caption.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_caption + 1 < count {
                    self.selected_caption += 1;
                }
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char('c') => self.dispatch(Event::CopyCaption {
                index: self.selected_caption,
                now: Instant::now(),
            }),
            KeyCode::Char('t') => self.copy_thread(),
            _ => Vec::new(),
        }
    }

    fn copy_thread(&mut self) -> Vec<GenerationJob> {
        self.dispatch(Event::CopyThread {
            now: Instant::now(),
        })
    }
}
