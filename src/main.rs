use booth_cart::config::{load_config, CliArgs};
use booth_cart::{actions, app, event, logging, ui, view};

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use tracing::{error, info};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init_logging(config.log_file.as_deref())?;

    // Create application state
    let mut app = AppState::from_config(config)?;
    info!(booths = app.floor.len(), "floor loaded");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if app.config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(res, &app, &mut io::stdout())
}

/// Prints the exit summary, then hands back the run loop's result so a
/// failed session still exits non-zero.
fn finish<W: Write>(res: Result<()>, app: &AppState, out: &mut W) -> Result<()> {
    if let Err(err) = &res {
        error!(%err, "main loop failed");
    }

    if app.config.print_summary {
        writeln!(out, "{}", view::render_plain(app.controller.view()))?;
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app)? {
            actions::execute_action(action, app);
        }
    }

    info!(
        items = app.controller.cart().len(),
        total = app.controller.cart().total(),
        "exiting"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booth_cart::cart::Control;
    use booth_cart::config::AppConfig;
    use booth_cart::model::BoothId;
    use booth_cart::FloorPlan;

    fn create_test_app() -> AppState {
        let mut app = AppState::new(AppConfig::default(), FloorPlan::demo());
        app.controller
            .dispatch(&mut app.floor, &Control::AddBooth(BoothId::from("A1")));
        app
    }

    #[test]
    fn test_finish_returns_loop_error_after_summary() {
        let app = create_test_app();
        let mut out = Vec::new();

        let result = finish(Err(anyhow::anyhow!("terminal went away")), &app, &mut out);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Booth A1"));
    }

    #[test]
    fn test_finish_ok_run_prints_summary() {
        let app = create_test_app();
        let mut out = Vec::new();

        assert!(finish(Ok(()), &app, &mut out).is_ok());
        assert!(!out.is_empty());
    }

    #[test]
    fn test_finish_without_summary_prints_nothing() {
        let mut app = create_test_app();
        app.config.print_summary = false;
        let mut out = Vec::new();

        assert!(finish(Err(anyhow::anyhow!("boom")), &app, &mut out).is_err());
        assert!(out.is_empty());
    }
}
