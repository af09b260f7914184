//! Session state machine
//!
//! One generation session: form fields, selected tone, validation flags, and
//! the four-state request lifecycle. All mutation goes through
//! [`Session::update`], which consumes the current snapshot and an [`Event`]
//! and returns the next snapshot plus the [`Effect`]s the runtime must carry
//! out (start a request, write the clipboard).
//!
//! ```text
//!            valid Submit                 Finished(Ok)
//!   Idle ───────────────────▶ Loading ─────────────────▶ Success
//!   Success ────────────────▶    │
//!   Error ──────────────────▶    │        Finished(Err)
//!                                └──────────────────────▶ Error
//! ```
//!
//! Events that don't match a legal transition are ignored, including a
//! second Submit while Loading and completions for a request that is no
//! longer outstanding.

mod ack;
mod thread;
mod tone;
mod validation;

pub use ack::CopyTarget;
pub use thread::format_thread;
pub use tone::Tone;
pub use validation::{Field, ValidatedInput};

use ack::CopyAcks;
use validation::{validate, FormInput, ValidationErrors, VALIDATION_MESSAGE};

use crate::generation::{ErrorKind, GenerationError};
use std::fmt;
use std::time::Instant;

/// Message shown for every non-validation failure
pub const FAILURE_MESSAGE: &str = "Oops! The vibe check failed. Try again later. 💀";

/// Identifies one generation attempt within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Request lifecycle
///
/// Captions live inside `Success`, so they can't be shown in any other state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        tone: Tone,
    },
    Success {
        captions: Vec<String>,
        tone: Tone,
    },
    Error {
        kind: ErrorKind,
    },
}

impl GenerationStatus {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationStatus::Idle => "Idle",
            GenerationStatus::Loading { .. } => "Loading",
            GenerationStatus::Success { .. } => "Success",
            GenerationStatus::Error { .. } => "Error",
        }
    }
}

/// Inputs to the state machine
#[derive(Debug)]
pub enum Event {
    /// A form field's full new value
    Edit { field: Field, value: String },
    /// User picked a tone
    SelectTone(Tone),
    /// User asked to generate
    Submit,
    /// The outbound call for `request_id` settled
    GenerationFinished {
        request_id: RequestId,
        result: Result<Vec<String>, GenerationError>,
    },
    /// Copy one caption (0-based position)
    CopyCaption { index: usize, now: Instant },
    /// Copy the whole batch as a thread
    CopyThread { now: Instant },
    /// Clock tick; expires copy acknowledgments
    Tick(Instant),
}

/// Work the runtime performs on behalf of the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the generation call and report back with `GenerationFinished`
    Generate {
        request_id: RequestId,
        input: ValidatedInput,
        tone: Tone,
    },
    /// Fire-and-forget clipboard write
    CopyToClipboard { target: CopyTarget, text: String },
}

/// Complete state of one UI session
#[derive(Debug, Clone)]
pub struct Session {
    pub form: FormInput,
    pub tone: Tone,
    pub status: GenerationStatus,
    pub errors: ValidationErrors,
    /// Banner under the form (validation or failure message)
    pub message: Option<&'static str>,
    pub acks: CopyAcks,
    next_request: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tone::default())
    }
}

impl Session {
    pub fn new(tone: Tone) -> Self {
        Self {
            form: FormInput::default(),
            tone,
            status: GenerationStatus::Idle,
            errors: ValidationErrors::default(),
            message: None,
            acks: CopyAcks::new(),
            next_request: 1,
        }
    }

    /// Captions of the current batch (empty unless Success)
    pub fn captions(&self) -> &[String] {
        match &self.status {
            GenerationStatus::Success { captions, .. } => captions,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, GenerationStatus::Loading { .. })
    }

    /// Submit is only accepted outside Loading
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Thread copy needs a successful, non-empty batch
    pub fn thread_available(&self) -> bool {
        !self.captions().is_empty()
    }

    /// Apply one event, returning the next snapshot and effects to run
    pub fn update(mut self, event: Event) -> (Self, Vec<Effect>) {
        let effects = match event {
            Event::Edit { field, value } => {
                self.edit(field, value);
                Vec::new()
            }
            Event::SelectTone(tone) => {
                self.tone = tone;
                Vec::new()
            }
            Event::Submit => self.submit(),
            Event::GenerationFinished { request_id, result } => {
                self.finish(request_id, result);
                Vec::new()
            }
            Event::CopyCaption { index, now } => self.copy_caption(index, now),
            Event::CopyThread { now } => self.copy_thread(now),
            Event::Tick(now) => {
                self.acks.expire(now);
                Vec::new()
            }
        };
        (self, effects)
    }

    fn edit(&mut self, field: Field, value: String) {
        self.errors.clear_if_filled(field, &value);
        match field {
            Field::ProductName => self.form.product_name = value,
            Field::Features => self.form.features = value,
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.can_submit() {
            tracing::debug!("Submit ignored: a request is already in flight");
            return Vec::new();
        }

        let input = match validate(&self.form) {
            Ok(input) => input,
            Err(errors) => {
                tracing::info!(
                    name_invalid = errors.name_invalid,
                    features_invalid = errors.features_invalid,
                    "Submit rejected by validation"
                );
                self.errors = errors;
                self.message = Some(VALIDATION_MESSAGE);
                return Vec::new();
            }
        };

        let request_id = RequestId(self.next_request);
        self.next_request += 1;

        self.errors = ValidationErrors::default();
        self.message = None;
        self.acks.clear();
        self.status = GenerationStatus::Loading {
            request_id,
            tone: self.tone,
        };

        tracing::info!("Generation {} started (tone: {})", request_id, self.tone);

        vec![Effect::Generate {
            request_id,
            input,
            tone: self.tone,
        }]
    }

    fn finish(&mut self, request_id: RequestId, result: Result<Vec<String>, GenerationError>) {
        let tone = match self.status {
            GenerationStatus::Loading {
                request_id: outstanding,
                tone,
            } if outstanding == request_id => tone,
            _ => {
                tracing::debug!(
                    "Ignoring completion for stale request {} (status: {})",
                    request_id,
                    self.status.name()
                );
                return;
            }
        };

        match result {
            Ok(captions) => {
                tracing::info!(
                    "Generation {} succeeded with {} caption(s)",
                    request_id,
                    captions.len()
                );
                self.status = GenerationStatus::Success { captions, tone };
            }
            Err(err) => {
                tracing::error!(
                    kind = ?err.kind(),
                    "Generation {} failed: {}",
                    request_id,
                    err
                );
                self.status = GenerationStatus::Error { kind: err.kind() };
                self.message = Some(FAILURE_MESSAGE);
            }
        }
    }

    fn copy_caption(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        let Some(text) = self.captions().get(index).cloned() else {
            return Vec::new();
        };
        let target = CopyTarget::Caption(index);
        self.acks.acknowledge(target, now);
        vec![Effect::CopyToClipboard { target, text }]
    }

    fn copy_thread(&mut self, now: Instant) -> Vec<Effect> {
        let Some(text) = format_thread(self.captions()) else {
            return Vec::new();
        };
        self.acks.acknowledge(CopyTarget::Thread, now);
        vec![Effect::CopyToClipboard {
            target: CopyTarget::Thread,
            text,
        }]
    }
}
