//! Application event loop.
//!
//! - `App` owns the `Board`, the station directory, and the schedule
//!   source.
//! - A `tokio::mpsc` channel carries `AppMessage` events in from
//!   background tasks: terminal input from a blocking reader task,
//!   fetch completions from spawned fetch tasks.
//! - The loop draws a frame, then `select!`s over the message channel
//!   and the refresh interval. The interval's first tick fires
//!   immediately, which is what issues the initial fetch.
//! - Every fetch goes through `Board`, so completions arriving out of
//!   order are filtered by the board's generation tag, not by this
//!   loop.

use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tokio::sync::mpsc;
use tracing::info;

use crate::board::{Board, FetchRequest};
use crate::directory::StationDirectory;
use crate::domain::{Snapshot, StationId};
use crate::schedule::{ScheduleError, ScheduleSource};
use crate::ui::render;

/// How often the board re-fetches the selected station.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(20);

enum AppMessage {
    Input(Event),
    FetchCompleted(FetchRequest, Result<Snapshot, ScheduleError>),
}

/// The departure board application.
pub struct App<S: ScheduleSource> {
    board: Board,
    directory: StationDirectory,
    source: S,
    /// Dropdown cursor within the current search matches.
    cursor: usize,
    should_quit: bool,
}

impl<S: ScheduleSource> App<S> {
    pub fn new(directory: StationDirectory, source: S, initial: StationId) -> Self {
        Self {
            board: Board::new(initial),
            directory,
            source,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Run until the user quits. Restores the terminal on exit.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let (tx, mut rx) = mpsc::channel::<AppMessage>(64);

        // Blocking terminal input reader
        let input_tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if input_tx.blocking_send(AppMessage::Input(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        // The first tick fires immediately and issues the initial fetch.
        let mut refresh = tokio::time::interval(REFRESH_PERIOD);
        refresh.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            terminal.draw(|f| render::draw(f, &self.board, &self.directory, self.cursor))?;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    self.handle_message(msg, &tx);
                }
                _ = refresh.tick() => {
                    let request = self.board.tick();
                    self.spawn_fetch(&tx, request);
                }
            }
        }

        // The interval, the channel, and the board all drop with this
        // loop; late fetch completions go nowhere.
        Ok(())
    }

    fn spawn_fetch(&self, tx: &mpsc::Sender<AppMessage>, request: FetchRequest) {
        let source = self.source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(request.station).await;
            let _ = tx.send(AppMessage::FetchCompleted(request, result)).await;
        });
    }

    fn handle_message(&mut self, msg: AppMessage, tx: &mpsc::Sender<AppMessage>) {
        match msg {
            AppMessage::Input(Event::Key(key)) => {
                if key.kind != KeyEventKind::Release {
                    self.handle_key(key, tx);
                }
            }
            AppMessage::Input(_) => {}
            AppMessage::FetchCompleted(request, result) => {
                self.board.apply_fetch_result(request, result);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppMessage>) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') if self.board.query().is_empty() => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.board.set_query("");
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                let mut query = self.board.query().to_string();
                query.pop();
                self.board.set_query(query);
                self.cursor = 0;
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let matches = self.directory.search(self.board.query()).len();
                if matches > 0 {
                    self.cursor = (self.cursor + 1).min(matches - 1);
                }
            }
            KeyCode::Enter => {
                self.select_highlighted(tx);
            }
            KeyCode::Char(c) => {
                let mut query = self.board.query().to_string();
                query.push(c);
                self.board.set_query(query);
                self.cursor = 0;
            }
            _ => {}
        }
    }

    /// Selecting a dropdown entry clears the search and re-fetches.
    fn select_highlighted(&mut self, tx: &mpsc::Sender<AppMessage>) {
        if self.board.query().is_empty() {
            return;
        }

        let matches = self.directory.search(self.board.query());
        let Some(station) = matches.get(self.cursor.min(matches.len().saturating_sub(1)))
        else {
            return;
        };

        let id = station.id;
        info!(station = %id, "station selected");
        self.cursor = 0;
        let request = self.board.select_station(id);
        self.spawn_fetch(tx, request);
    }
}
