//! Caption generation
//!
//! Wraps the single outbound call of the app: product name, features and
//! tone go in, an ordered list of captions (or one error) comes out.
//!
//! ```text
//! ApiKeySource ──resolve──▶ GeminiClient::generate ──▶ Vec<String>
//!                                 │
//!                                 └──▶ GenerationError { MissingApiKey | Network | Api | Format }
//! ```

mod credentials;
mod error;
mod gemini;
mod prompt;

pub use credentials::{ApiKeySource, API_KEY_ENV_VARS};
pub use error::{ErrorKind, GenerationError};
pub use gemini::{GeminiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
