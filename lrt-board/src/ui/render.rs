//! Rendering of the departure board.
//!
//! Layout: a search input on top, the station's per-platform cards in
//! the middle, a status footer at the bottom. While the search query
//! is non-empty a dropdown of matching stations replaces the cards.
//!
//! The string-building helpers are kept separate from the widget code
//! so the display rules (arriving / stopped / coupled markers, the
//! no-data message) are testable without a terminal.

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::board::{Board, Phase};
use crate::directory::StationDirectory;
use crate::domain::RouteEntry;

/// Message shown whenever there is no usable schedule.
pub const NO_DATA: &str = "no data available";

/// Placeholder for a search with no matching station.
pub const NO_STATION_FOUND: &str = "no station found";

/// Bilingual station title, e.g. "Yuen Long 元朗 (600)".
pub fn station_title(directory: &StationDirectory, board: &Board) -> String {
    match directory.lookup(board.selected()) {
        Some(station) => format!(
            "{} {} ({})",
            station.name_en,
            station.name_ch,
            station.id
        ),
        None => format!("Station {}", board.selected()),
    }
}

/// One line of text for a route entry.
pub fn route_line(entry: &RouteEntry) -> String {
    let time = if entry.is_arriving() {
        "arriving".to_string()
    } else {
        format!("{} {}", entry.time_en, entry.time_ch)
    };

    let mut line = format!(
        "{:<5} {} {}  {}  [{}]",
        entry.route_no, entry.dest_en, entry.dest_ch, time, entry.consist_label()
    );

    if entry.is_stopped() {
        line.push_str("  · stopped");
    }

    line
}

/// Footer text for the current board phase.
pub fn status_line(board: &Board) -> String {
    match board.phase() {
        Phase::Idle => "starting...".to_string(),
        Phase::Loading => match board.snapshot() {
            Some(snapshot) => format!("refreshing · last updated {}", updated_label(&snapshot.system_time)),
            None => "loading...".to_string(),
        },
        Phase::Displaying => match board.snapshot() {
            Some(snapshot) => format!("updated {}", updated_label(&snapshot.system_time)),
            None => NO_DATA.to_string(),
        },
        Phase::Failed => NO_DATA.to_string(),
    }
}

/// Render the server timestamp as a local wall-clock time.
///
/// The feed sends "YYYY-MM-DD HH:MM:SS" in the network's local time;
/// an unparsable value is shown verbatim rather than dropped.
pub fn updated_label(system_time: &str) -> String {
    match NaiveDateTime::parse_from_str(system_time, "%Y-%m-%d %H:%M:%S") {
        Ok(t) => t.format("%H:%M:%S").to_string(),
        Err(_) => system_time.to_string(),
    }
}

/// Draw one frame.
pub fn draw(frame: &mut Frame, board: &Board, directory: &StationDirectory, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_search(frame, chunks[0], board);

    if board.query().is_empty() {
        draw_platforms(frame, chunks[1], board, directory);
    } else {
        draw_matches(frame, chunks[1], board, directory, cursor);
    }

    draw_footer(frame, chunks[2], board);
}

fn draw_search(frame: &mut Frame, area: Rect, board: &Board) {
    let input = Paragraph::new(board.query())
        .block(Block::default().borders(Borders::ALL).title("Search station"));
    frame.render_widget(input, area);
}

fn draw_matches(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    directory: &StationDirectory,
    cursor: usize,
) {
    let matches = directory.search(board.query());

    let block = Block::default().borders(Borders::ALL).title("Stations");

    if matches.is_empty() {
        let placeholder = Paragraph::new(NO_STATION_FOUND)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = matches
        .iter()
        .map(|s| ListItem::new(format!("{} {} ({})", s.name_en, s.name_ch, s.id)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(cursor.min(matches.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_platforms(frame: &mut Frame, area: Rect, board: &Board, directory: &StationDirectory) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(station_title(directory, board));

    let Some(snapshot) = board.snapshot() else {
        let placeholder = Paragraph::new(NO_DATA)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    for platform in &snapshot.platforms {
        lines.push(Line::from(Span::styled(
            format!("Platform {}", platform.id),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        if platform.routes.is_empty() {
            lines.push(Line::from(Span::styled(
                "  no scheduled departures",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for route in &platform.routes {
            let style = if route.is_arriving() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", route_line(route)),
                style,
            )));
        }

        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_DATA,
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, board: &Board) {
    let footer = Paragraph::new(format!(
        " {} · type to search · Enter select · q quit",
        status_line(board)
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::board::Phase;
    use crate::domain::{Direction, Platform, STATUS_OK, Snapshot, StationId};
    use crate::schedule::ScheduleError;

    fn entry(time_en: &str, stop: bool, length: u8) -> RouteEntry {
        RouteEntry {
            route_no: "505".to_string(),
            dest_en: "Sam Shing".to_string(),
            dest_ch: "三聖".to_string(),
            time_en: time_en.to_string(),
            time_ch: format!("{time_en} (ch)"),
            train_length: length,
            direction: Direction::Departure,
            stopped: stop,
        }
    }

    #[test]
    fn arriving_entry_is_marked() {
        let line = route_line(&entry("-", false, 1));
        assert!(line.contains("arriving"));
        assert!(!line.contains('-'));
    }

    #[test]
    fn stopped_entry_is_marked() {
        let line = route_line(&entry("3 min", true, 1));
        assert!(line.contains("stopped"));
        assert!(!route_line(&entry("3 min", false, 1)).contains("stopped"));
    }

    #[test]
    fn consist_labels() {
        assert!(route_line(&entry("3 min", false, 2)).contains("[coupled]"));
        assert!(route_line(&entry("3 min", false, 1)).contains("[single]"));
    }

    #[test]
    fn bilingual_time_shown_when_not_arriving() {
        let line = route_line(&entry("3 min", false, 1));
        assert!(line.contains("3 min"));
        assert!(line.contains("3 min (ch)"));
    }

    #[test]
    fn updated_label_formats_time() {
        assert_eq!(updated_label("2026-08-29 14:03:10"), "14:03:10");
        // Unparsable values pass through
        assert_eq!(updated_label("garbage"), "garbage");
    }

    #[test]
    fn station_title_bilingual() {
        let directory = StationDirectory::new();
        let board = Board::new(StationId::parse("600").unwrap());
        assert_eq!(station_title(&directory, &board), "Yuen Long 元朗 (600)");
    }

    #[test]
    fn station_title_unknown_id() {
        let directory = StationDirectory::new();
        let board = Board::new(StationId::parse("999").unwrap());
        assert_eq!(station_title(&directory, &board), "Station 999");
    }

    #[test]
    fn failed_board_shows_no_data() {
        let mut board = Board::new(StationId::parse("600").unwrap());
        let request = board.tick();
        board.apply_fetch_result(
            request,
            Err(ScheduleError::Api {
                status: 0,
                message: "simulated network error".into(),
            }),
        );

        assert_eq!(board.phase(), Phase::Failed);
        assert_eq!(status_line(&board), NO_DATA);
    }

    #[test]
    fn displaying_board_shows_update_time() {
        let mut board = Board::new(StationId::parse("600").unwrap());
        let request = board.tick();
        board.apply_fetch_result(
            request,
            Ok(Snapshot {
                status: STATUS_OK,
                system_time: "2026-08-29 14:03:10".to_string(),
                platforms: vec![Platform { id: 1, routes: vec![] }],
            }),
        );

        assert_eq!(status_line(&board), "updated 14:03:10");
    }

    #[test]
    fn identical_snapshots_render_identically() {
        let snapshot = Snapshot {
            status: STATUS_OK,
            system_time: "2026-08-29 14:03:10".to_string(),
            platforms: vec![Platform {
                id: 1,
                routes: vec![entry("-", true, 2)],
            }],
        };

        let lines_a: Vec<String> = snapshot.platforms[0].routes.iter().map(route_line).collect();
        let lines_b: Vec<String> = snapshot
            .clone()
            .platforms[0]
            .routes
            .iter()
            .map(route_line)
            .collect();
        assert_eq!(lines_a, lines_b);
    }
}
