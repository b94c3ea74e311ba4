//! Applicant intake - terminal form for job-interview applicants
//!
//! Collects first name, last name and email, validates them locally and
//! inserts the record into the hosted `interview_applicants` table.

mod app;
mod config;
mod controller;
mod error;
mod logging;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::{ConfigSource, EnvConfig};
use controller::FormController;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sink::ClientAccessor;
use std::io;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init();

    // Check configuration up front; the form still opens so the problem
    // shows up as a banner on submit
    if let Err(err) = EnvConfig.load() {
        tracing::warn!("{err}; submissions will fail until it is provided");
    }
    let controller = FormController::new(ClientAccessor::new(EnvConfig));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up finished inserts before drawing
        app.poll_submissions();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while an insert is in flight so its outcome shows promptly
        let poll_duration = if app.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Let spawned inserts make progress between polls
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
