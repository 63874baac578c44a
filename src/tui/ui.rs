//! Main UI loop and frame layout.

use super::action::Action;
use super::app::App;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, current_theme_name, render_footer_hints, FooterHints, Styles};
use super::views;
use super::widgets::{
    check_terminal_size, render_no_results_state, render_size_warning, MIN_HEIGHT, MIN_WIDTH,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};

/// Run the TUI application until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, &EventHandler::new(tick_rate_ms));

    // Restore terminal, also when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if app.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw one frame and rebuild the click regions.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hits.clear();
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Length(3),  // Search box
            Constraint::Min(10),    // Card grid
            Constraint::Length(1),  // Pagination
            Constraint::Length(1),  // Status bar
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_search_box(frame, chunks[1], app);

    if app.view.is_empty() {
        render_no_results_state(frame, chunks[2], app.view.search_term());
    } else {
        views::render_grid(frame, chunks[2], &app.catalog, &app.view, &mut app.hits);
    }

    views::render_pagination(frame, chunks[3], &app.view.controls(), &mut app.hits);
    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5], app);

    if let Some(product) = app.overlay.product(&app.catalog) {
        views::render_detail(frame, area, product, &mut app.hits);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_line = Line::from(vec![
        Span::styled(
            env!("CARGO_PKG_NAME"),
            Style::default().fg(colors().primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(app.title.clone(), Styles::header_title()),
    ]);
    frame.render_widget(Paragraph::new(header_line), area);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &mut App) {
    let active = app.search.active;
    let mut spans = vec![Span::styled("🔍 ", Styles::text_muted())];
    if app.search.is_empty() && !active {
        spans.push(Span::styled(
            "Search products...",
            Style::default().fg(colors().muted).italic(),
        ));
    } else {
        spans.push(Span::styled(app.search.query.clone(), Styles::text()));
    }
    if active {
        spans.push(Span::styled("▏", Style::default().fg(colors().accent)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active {
            Styles::border_focused()
        } else {
            Styles::border()
        })
        .title(" Search ");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    app.hits.register(area, Action::StartSearch);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(msg) = app.status.peek() {
        Line::from(vec![
            Span::styled(" ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.to_string(), Style::default().fg(colors().accent).bold()),
        ])
    } else {
        let matches = app.view.filtered().len();
        let label = if app.view.search_term().is_empty() {
            format!(" {matches} products")
        } else {
            format!(" {matches} of {} products", app.catalog.len())
        };
        let mut spans = vec![Span::styled(label, Style::default().fg(colors().text))];
        if matches > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
            spans.push(Span::styled(
                format!(
                    "Page {} of {}",
                    app.view.current_page(),
                    app.view.page_count()
                ),
                Style::default().fg(colors().primary).bold(),
            ));
        }
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(
            format!("theme: {}", current_theme_name()),
            Styles::text_muted(),
        ));
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.overlay.is_visible() {
        FooterHints::for_detail()
    } else {
        FooterHints::for_grid(app.search.active)
    };
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}
