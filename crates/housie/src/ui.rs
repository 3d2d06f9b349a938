//! Board and controls rendering.
//!
//! The screen is a pure function of the [`App`]: a clickable title, a row of
//! controls, the "Last Called" readout, the 9x10 number grid, and a key help
//! footer. [`ScreenLayout`] computes every press target's rectangle from the
//! frame area alone, so the same arithmetic serves both rendering and mouse
//! hit-testing.

use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use housie_core::POOL_SIZE;

use crate::app::{App, Press};

/// Grid geometry: 10 numbers per row, 9 rows, 4 columns of text per cell.
pub const GRID_COLUMNS: u16 = 10;
pub const GRID_ROWS: u16 = 9;
const CELL_WIDTH: u16 = 4;

const TITLE: &str = "Housie Number Caller";

const START_LABEL: &str = "[ Start ]";
const RESET_LABEL: &str = "[ Reset ]";
const AUTO_ON_LABEL: &str = "Auto [on ]";
const AUTO_OFF_LABEL: &str = "Auto [off]";
const NEXT_LABEL: &str = "[ Next ]";

/// Press-target rectangles for one frame size.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub title: Rect,
    pub start: Rect,
    pub reset: Rect,
    pub auto_switch: Rect,
    pub next: Rect,
    pub last_called: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [title, controls, last_called, grid_region, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        // Controls sit centered in their band: four fixed-width buttons with
        // two-space gaps.
        let controls_width = (START_LABEL.len()
            + RESET_LABEL.len()
            + AUTO_ON_LABEL.len()
            + NEXT_LABEL.len()) as u16
            + 3 * 2;
        let [_, controls_row, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(controls_width),
            Constraint::Fill(1),
        ])
        .areas(Rect { height: 1, ..controls });
        let [start, _, reset, _, auto_switch, _, next] = Layout::horizontal([
            Constraint::Length(START_LABEL.len() as u16),
            Constraint::Length(2),
            Constraint::Length(RESET_LABEL.len() as u16),
            Constraint::Length(2),
            Constraint::Length(AUTO_ON_LABEL.len() as u16),
            Constraint::Length(2),
            Constraint::Length(NEXT_LABEL.len() as u16),
        ])
        .areas(controls_row);

        // The grid is centered in whatever space is left.
        let grid_width = GRID_COLUMNS * CELL_WIDTH;
        let grid = Rect {
            x: grid_region.x + grid_region.width.saturating_sub(grid_width) / 2,
            y: grid_region.y + grid_region.height.saturating_sub(GRID_ROWS) / 2,
            width: grid_width.min(grid_region.width),
            height: GRID_ROWS.min(grid_region.height),
        };

        Self {
            title,
            start,
            reset,
            auto_switch,
            next,
            last_called: Rect { height: 1, ..last_called },
            grid,
            footer,
        }
    }

    /// The number whose cell covers the given terminal position, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<u8> {
        if !self.grid.contains(Position::new(column, row)) {
            return None;
        }
        let col = (column - self.grid.x) / CELL_WIDTH;
        let number = (row - self.grid.y) * GRID_COLUMNS + col + 1;
        (number <= POOL_SIZE as u16).then_some(number as u8)
    }

    /// Resolve a click to a press intent.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Press> {
        let position = Position::new(column, row);
        if self.title.contains(position) {
            return Some(Press::Title);
        }
        if self.start.contains(position) {
            return Some(Press::Start);
        }
        if self.reset.contains(position) {
            return Some(Press::Reset);
        }
        if self.auto_switch.contains(position) {
            return Some(Press::AutoSwitch);
        }
        if self.next.contains(position) {
            return Some(Press::NextNumber);
        }
        self.cell_at(column, row).map(Press::Cell)
    }
}

/// Render the whole screen.
pub fn view(app: &App, frame: &mut Frame) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.game();

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, title_style(app))).alignment(Alignment::Center),
        layout.title,
    );

    render_controls(app, frame, &layout);

    if let Some(current) = game.current() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Last Called: "),
                Span::styled(
                    current.to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .alignment(Alignment::Center),
            layout.last_called,
        );
    }

    render_grid(app, frame, &layout);

    let key_style = Style::default().fg(Color::Cyan);
    let footer = Line::from(vec![
        Span::styled("s", key_style),
        Span::raw(" start  "),
        Span::styled("r", key_style),
        Span::raw(" reset  "),
        Span::styled("a", key_style),
        Span::raw(" auto  "),
        Span::styled("n", key_style),
        Span::raw(" next  "),
        Span::styled("↑↓←→", key_style),
        Span::raw(" move  "),
        Span::styled("enter", key_style),
        Span::raw(" press  "),
        Span::styled("q", key_style),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(footer)
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center),
        layout.footer,
    );
}

// The title doubles as the mode indicator: plain while normal, inverted
// while secret mode is on, and yellow while a key attempt is pending.
fn title_style(app: &App) -> Style {
    let secret = app.game().secret();
    if secret.awaiting_key() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if secret.enabled() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

fn render_controls(app: &App, frame: &mut Frame, layout: &ScreenLayout) {
    let game = app.game();
    let auto_label = if game.auto_mode() {
        AUTO_ON_LABEL
    } else {
        AUTO_OFF_LABEL
    };

    let buttons = [
        (layout.start, START_LABEL, !game.is_active()),
        (layout.reset, RESET_LABEL, true),
        (layout.auto_switch, auto_label, game.is_active()),
        (
            layout.next,
            NEXT_LABEL,
            game.is_active() && !game.auto_mode(),
        ),
    ];
    for (area, label, enabled) in buttons {
        let style = if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), area);
    }
}

fn render_grid(app: &App, frame: &mut Frame, layout: &ScreenLayout) {
    let game = app.game();
    let editing_picks = game.secret().enabled() && !game.is_active();

    for row in 0..layout.grid.height.min(GRID_ROWS) {
        let mut spans = Vec::with_capacity(GRID_COLUMNS as usize);
        for col in 0..GRID_COLUMNS {
            let number = (row * GRID_COLUMNS + col + 1) as u8;
            let mut style = if game.called().contains(number) {
                Style::default().fg(Color::Black).bg(Color::LightBlue)
            } else if editing_picks && game.secret().is_picked(number) {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            if number == app.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{number:^width$}", width = CELL_WIDTH as usize), style));
        }
        let area = Rect {
            x: layout.grid.x,
            y: layout.grid.y + row,
            width: layout.grid.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
