use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Set up the terminal, run the event loop and restore the terminal
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, logger);
    let mut event_handler = EventHandler::new(config.animation.frame_interval());
    log::info!("App: started");

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    log::info!(
        "App: exiting with {} tasks ({} completed)",
        app.state().tasks.len(),
        app.state().tasks.completed_count()
    );
    app.logger().flush();

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        // Render when needed
        if app.take_needs_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Tick => app.tick(event_handler.take_elapsed()),
            other => {
                // Keep animation time continuous across input events
                app.tick(event_handler.take_elapsed());
                app.handle_event(other);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
