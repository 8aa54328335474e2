use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use folio_core::{EngineConfig, PageModel, Preferences};
use folio_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{ContactWidget, NavbarWidget, PageWidget, StatusBarWidget},
};

pub fn run(config: EngineConfig, page_path: Option<PathBuf>) -> Result<()> {
    let page = load_page(page_path)?;
    let prefs_path = Preferences::default_path();
    let prefs = Preferences::load_from(&prefs_path)?;
    info!(theme = prefs.theme.as_str(), "starting viewer");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Folio"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config, page, prefs, prefs_path);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        app.on_tick(Instant::now());

        terminal.draw(|frame| {
            let size = frame.area();

            // Navbar, page viewport, status bar
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            app.viewport_height = layout[1].height;

            PageWidget::render(frame, layout[1], app);
            NavbarWidget::render(frame, layout[0], app);
            StatusBarWidget::render(frame, layout[2], app);

            if app.form_focus.is_some() {
                ContactWidget::render(frame, app);
            }
        })?;

        match events.next()? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.apply(action, Instant::now());
            }
            // Viewport height is refreshed on the next draw
            Some(AppEvent::Resize(_, _)) => {}
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn load_page(page_path: Option<PathBuf>) -> Result<PageModel> {
    match page_path {
        Some(path) => Ok(PageModel::load(&path)?),
        None => {
            let default = EngineConfig::page_path();
            if default.exists() {
                Ok(PageModel::load(&default)?)
            } else {
                info!("no page file found, showing the built-in sample");
                Ok(PageModel::sample())
            }
        }
    }
}
