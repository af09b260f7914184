//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    ///
    /// The API key is never written out; users add it by hand if they want
    /// it in the file instead of the environment.
    pub fn to_toml(&self) -> String {
        let api_key_line = match &self.api_key {
            Some(_) => "# api_key is set (not shown); env vars HYPE_API_KEY / GEMINI_API_KEY / API_KEY take precedence".to_string(),
            None => "# api_key = \"your-gemini-api-key\"   # or export HYPE_API_KEY / GEMINI_API_KEY / API_KEY".to_string(),
        };

        format!(
            r#"# Hype Machine configuration
#
# Precedence: environment variables > this file > built-in defaults

# Generative Language API
api_base = "{api_base}"
model = "{model}"
{api_key_line}

# Tone selected when the form opens: Sassy, Chill, Extra, Witty
default_tone = "{tone}"

# Theme: "hype" (true color) or "auto" (terminal palette)
theme = "{theme}"

[logging]
level = "{level}"                  # trace, debug, info, warn, error (RUST_LOG overrides)
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{rotation}"        # hourly, daily, never
file_prefix = "{prefix}"
"#,
            api_base = self.api_base,
            model = self.model,
            api_key_line = api_key_line,
            tone = self.default_tone,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            rotation = self.logging.file_rotation.as_str(),
            prefix = self.logging.file_prefix,
        )
    }
}
