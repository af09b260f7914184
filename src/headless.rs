// Headless generation - `hype generate`
//
// Drives the same session state machine as the TUI, once: fill the form,
// submit, run the single generation effect, then print. Returns whether the
// run succeeded so main can set the exit code.

use crate::cli::GenerateArgs;
use crate::generation::GeminiClient;
use crate::session::{
    format_thread, Effect, Event, Field, GenerationStatus, Session, Tone, FAILURE_MESSAGE,
};
use crate::tui::clipboard::ClipboardSink;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;

pub async fn run_generate(
    client: &GeminiClient,
    args: &GenerateArgs,
    default_tone: Tone,
    out: &mut impl Write,
    clipboard: &mut dyn ClipboardSink,
) -> Result<bool> {
    let mut session = Session::new(args.tone.unwrap_or(default_tone));
    for (field, value) in [
        (Field::ProductName, &args.name),
        (Field::Features, &args.features),
    ] {
        session = session
            .update(Event::Edit {
                field,
                value: value.clone(),
            })
            .0;
    }

    let (next, effects) = session.update(Event::Submit);
    session = next;

    let Some(Effect::Generate {
        request_id,
        input,
        tone,
    }) = effects.into_iter().next()
    else {
        let mut missing = Vec::new();
        if session.errors.name_invalid {
            missing.push("--name");
        }
        if session.errors.features_invalid {
            missing.push("--features");
        }
        eprintln!(
            "{} (missing: {})",
            session.message.unwrap_or_default(),
            missing.join(", ")
        );
        return Ok(false);
    };

    let result = client
        .generate(&input.product_name, &input.features, tone)
        .await;
    session = session
        .update(Event::GenerationFinished { request_id, result })
        .0;

    let captions = match &session.status {
        GenerationStatus::Success { captions, .. } => captions.clone(),
        _ => {
            eprintln!("{}", session.message.unwrap_or(FAILURE_MESSAGE));
            return Ok(false);
        }
    };

    if captions.is_empty() {
        writeln!(out, "No captions came back. Try another vibe?")?;
        return Ok(true);
    }

    if args.thread {
        if let Some(thread) = format_thread(&captions) {
            writeln!(out, "{}", thread)?;
        }
    } else {
        for (i, caption) in captions.iter().enumerate() {
            writeln!(out, "Option {}\n{}\n", i + 1, caption)?;
        }
    }
    out.flush().context("Failed to write captions")?;

    if args.copy {
        let (_, effects) = session.update(Event::CopyThread {
            now: Instant::now(),
        });
        for effect in effects {
            if let Effect::CopyToClipboard { text, .. } = effect {
                match clipboard.write_text(&text) {
                    Ok(()) => eprintln!("Copied thread to clipboard ✅"),
                    Err(e) => tracing::warn!("Clipboard write failed: {:#}", e),
                }
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{ApiKeySource, DEFAULT_MODEL};
    use crate::tui::clipboard::RecordingClipboard;
    use axum::{http::StatusCode, Json, Router};
    use serde_json::json;

    fn args(name: &str, features: &str) -> GenerateArgs {
        GenerateArgs {
            name: name.into(),
            features: features.into(),
            tone: None,
            thread: false,
            copy: false,
        }
    }

    /// Serve a fixed generateContent reply with three captions
    async fn stub_base() -> String {
        let reply = json!({
            "candidates": [{
                "content": { "parts": [{ "text": r#"{"captions":["X","Y","Z"]}"# }] }
            }]
        });
        let app = Router::new().fallback(move || {
            let reply = reply.clone();
            async move { (StatusCode::OK, Json(reply)) }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1beta", addr)
    }

    fn client(base: &str, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(base, DEFAULT_MODEL, ApiKeySource::fixed(key)).unwrap()
    }

    #[tokio::test]
    async fn blank_input_fails_without_output() {
        let mut out = Vec::new();
        let mut clipboard = RecordingClipboard::default();
        let ok = run_generate(
            &client("http://127.0.0.1:9", Some("k")),
            &args("  ", "neon"),
            Tone::Extra,
            &mut out,
            &mut clipboard,
        )
        .await
        .unwrap();

        assert!(!ok);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn missing_key_fails() {
        let mut out = Vec::new();
        let mut clipboard = RecordingClipboard::default();
        let ok = run_generate(
            &client("http://127.0.0.1:9", None),
            &args("Balm", "neon"),
            Tone::Extra,
            &mut out,
            &mut clipboard,
        )
        .await
        .unwrap();

        assert!(!ok);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn prints_numbered_options() {
        let base = stub_base().await;
        let mut out = Vec::new();
        let mut clipboard = RecordingClipboard::default();
        let ok = run_generate(
            &client(&base, Some("k")),
            &args("Balm", "neon"),
            Tone::Sassy,
            &mut out,
            &mut clipboard,
        )
        .await
        .unwrap();

        assert!(ok);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Option 1\nX\n"));
        assert!(text.contains("Option 3\nZ\n"));
        assert!(clipboard.writes.borrow().is_empty());
    }

    #[tokio::test]
    async fn thread_output_and_copy() {
        let base = stub_base().await;
        let mut out = Vec::new();
        let mut clipboard = RecordingClipboard::default();
        let thread_args = GenerateArgs {
            thread: true,
            copy: true,
            ..args("Balm", "neon")
        };

        let ok = run_generate(
            &client(&base, Some("k")),
            &thread_args,
            Tone::Extra,
            &mut out,
            &mut clipboard,
        )
        .await
        .unwrap();

        assert!(ok);
        let payload = "1/3 X\n\n👇\n\n2/3 Y\n\n👇\n\n3/3 Z";
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", payload));
        assert_eq!(*clipboard.writes.borrow(), vec![payload.to_string()]);
    }
}
