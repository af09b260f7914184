// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, generation completions)
// - Spawning generation calls off the UI task

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::generation::{GeminiClient, GenerationError};
use crate::logging::LogBuffer;
use crate::session::{Event, RequestId};
use anyhow::{Context, Result};
use app::{App, GenerationJob};
use crossterm::{
    event::{self, Event as TermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A settled generation call, reported back to the event loop
struct Completion {
    request_id: RequestId,
    result: Result<Vec<String>, GenerationError>,
}

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let client = GeminiClient::new(&config.api_base, &config.model, config.credentials())
        .context("Failed to create generation client")?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    tracing::info!("Using model {} (theme: {})", client.model(), app.theme.name);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (form editing, submit, copy)
/// 2. Timer ticks (spinner animation, copy acknowledgment expiry)
/// 3. Generation completions from spawned tasks
///
/// Completions for requests the session no longer waits on are dropped by
/// the session itself.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &GeminiClient,
) -> Result<()> {
    let (done_tx, mut done_rx) = mpsc::channel::<Completion>(16);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        let jobs = tokio::select! {
            jobs = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(TermEvent::Key(key_event)) => app.handle_key(key_event),
                        _ => Vec::new(),
                    }
                } else {
                    Vec::new()
                }
            } => jobs,

            _ = tick_interval.tick() => {
                app.on_tick(Instant::now());
                Vec::new()
            }

            Some(done) = done_rx.recv() => {
                app.dispatch(Event::GenerationFinished {
                    request_id: done.request_id,
                    result: done.result,
                })
            }
        };

        for job in jobs {
            spawn_generation(client.clone(), job, done_tx.clone());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_generation(client: GeminiClient, job: GenerationJob, done: mpsc::Sender<Completion>) {
    tokio::spawn(async move {
        tracing::info!(
            "Generating {} captions for {:?} (request {})",
            job.tone,
            job.input.product_name,
            job.request_id
        );
        let result = client
            .generate(&job.input.product_name, &job.input.features, job.tone)
            .await;

        // Receiver is gone only when the UI has quit
        let _ = done
            .send(Completion {
                request_id: job.request_id,
                result,
            })
            .await;
    });
}
