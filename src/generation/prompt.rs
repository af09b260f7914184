//! Generation instruction
//!
//! The wording is tuning, not contract: what matters is that name, features
//! and tone are embedded and that a `captions` list is requested.

use crate::session::Tone;
use serde_json::{json, Value};

/// Number of captions requested per batch
pub const CAPTION_COUNT: usize = 5;

/// Build the instruction sent to the model
pub fn build_prompt(product_name: &str, features: &str, tone: Tone) -> String {
    format!(
        r#"You are a chaotic, high-energy Gen-Z social media manager.
Create {count} distinct, viral-worthy Instagram ad captions for a product named "{name}".

Key features to highlight: {features}.
The selected specific tone is: {tone}.

The captions MUST be:
- Over-the-top enthusiastic.
- Full of Gen-Z slang (e.g., no cap, slay, main character energy, it's giving, era, ate and left no crumbs, bet, vibe check).
- Reflect the "{tone}" vibe specifically.
- Heavy use of emojis.
- Short, punchy sentences tailored for short attention spans.
- Include hashtags.

Return the result strictly as a JSON object with a 'captions' property containing an array of strings."#,
        count = CAPTION_COUNT,
        name = product_name,
        features = features,
        tone = tone,
    )
}

/// Structured-output schema: `{ captions: [string] }`
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "captions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["captions"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_all_inputs() {
        let prompt = build_prompt("Spicy Cheetos Lip Balm", "tastes fiery, neon tint", Tone::Sassy);
        assert!(prompt.contains("\"Spicy Cheetos Lip Balm\""));
        assert!(prompt.contains("tastes fiery, neon tint"));
        assert!(prompt.contains("\"Sassy\" vibe"));
        assert!(prompt.contains("Create 5 distinct"));
        assert!(prompt.contains("'captions'"));
    }

    #[test]
    fn schema_requests_string_array() {
        let schema = response_schema();
        assert_eq!(schema["properties"]["captions"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["captions"]["items"]["type"], "STRING");
    }
}
