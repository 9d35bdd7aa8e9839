//! Ratatui-based terminal UI.
//!
//! Browse a program's waters on the left, with the selected water's full
//! calendar on the right. Fetch failures show up in the status line instead
//! of closing the UI.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::pipeline;
use crate::cli::{GlobalArgs, TuiArgs};
use crate::clock::{Clock, SystemClock, regional_now};
use crate::data::RangeFetcher;
use crate::domain::{Calendar, Fish, Program, SortKey, StockingData};
use crate::error::AppError;
use crate::report::{format_calendar, short_label};

/// Start the TUI.
pub fn run(args: TuiArgs, global: &GlobalArgs) -> Result<(), AppError> {
    let client = pipeline::sheets_client(global)?;
    let clock = SystemClock;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(&client, &clock, args.program, args.sort);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App<'a> {
    fetcher: &'a dyn RangeFetcher,
    clock: &'a dyn Clock,
    program: Program,
    sort: SortKey,
    show_empty: bool,
    selected: usize,
    data: Option<StockingData>,
    status: String,
}

impl<'a> App<'a> {
    fn new(fetcher: &'a dyn RangeFetcher, clock: &'a dyn Clock, program: Program, sort: SortKey) -> Self {
        let mut app = Self {
            fetcher,
            clock,
            program,
            sort,
            show_empty: false,
            selected: 0,
            data: None,
            status: String::new(),
        };
        app.refresh();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the UI should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.water_count() {
                    self.selected += 1;
                }
            }
            KeyCode::Left => {
                self.program = self.program.prev();
                self.selected = 0;
                self.refresh();
            }
            KeyCode::Right => {
                self.program = self.program.next();
                self.selected = 0;
                self.refresh();
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.cycle();
                self.resort();
                self.status = format!("sort: {}", self.sort.as_str());
            }
            KeyCode::Char('a') => {
                self.show_empty = !self.show_empty;
                self.status = if self.show_empty {
                    "showing every week".to_string()
                } else {
                    "hiding empty weeks".to_string()
                };
            }
            KeyCode::Char('r') => self.refresh(),
            _ => {}
        }
        false
    }

    fn water_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    fn selected_calendar(&self) -> Option<&Calendar> {
        self.data.as_ref().and_then(|d| d.get(self.selected))
    }

    fn refresh(&mut self) {
        match pipeline::load_schedule(self.fetcher, self.clock, self.program, &[], self.sort) {
            Ok(data) => {
                self.status = format!("{}: {} waters", self.program.display_name(), data.len());
                self.selected = self.selected.min(data.len().saturating_sub(1));
                self.data = Some(data);
            }
            Err(err) => {
                self.status = err.to_string();
                self.data = None;
                self.selected = 0;
            }
        }
    }

    /// Re-sort in place, keeping the same water selected.
    fn resort(&mut self) {
        let Some(data) = self.data.as_mut() else {
            return;
        };
        let current = data.get(self.selected).map(|c| c.water_name.clone());
        data.sort(self.sort, self.clock);
        if let Some(name) = current {
            self.selected = data.iter().position(|c| c.water_name == name).unwrap_or(0);
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("stocker", Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                "  program: {} | sort: {} | {} waters",
                self.program.display_name(),
                self.sort.as_str(),
                self.water_count()
            )),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.draw_waters(frame, chunks[0]);
        self.draw_detail(frame, chunks[1]);
    }

    fn draw_waters(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Waters").borders(Borders::ALL);
        let Some(data) = &self.data else {
            let msg = Paragraph::new("No data.")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let now = regional_now(self.clock);
        let items: Vec<ListItem> = data
            .iter()
            .map(|cal| {
                ListItem::new(Text::from(vec![
                    Line::from(Span::styled(
                        cal.water_name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!(
                            "  last: {}  next: {}",
                            short_label(&cal.last_before(now), now),
                            short_label(&cal.next_after(now), now)
                        ),
                        Style::default().fg(Color::Gray),
                    )),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select((!data.is_empty()).then_some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_detail(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(cal) = self.selected_calendar() else {
            frame.render_widget(Block::default().title("Calendar").borders(Borders::ALL), area);
            return;
        };

        let lines: Vec<Line> = format_calendar(cal, !self.show_empty)
            .lines()
            .zip(cal.data.iter().filter(|w| self.show_empty || w.stock != Fish::None))
            .map(|(text, week)| Line::from(Span::styled(text.to_string(), fish_style(week.stock))))
            .collect();

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title(cal.water_name.as_str()).borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ program  s sort  a all weeks  r refresh  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn fish_style(stock: Fish) -> Style {
    match stock {
        Fish::Trout => Style::default().fg(Color::Cyan),
        Fish::Catfish => Style::default().fg(Color::Green),
        Fish::Unknown => Style::default().fg(Color::Magenta),
        Fish::None => Style::default().fg(Color::DarkGray),
    }
}
