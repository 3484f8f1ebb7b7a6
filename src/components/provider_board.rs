use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ProviderTable, ProviderTableProps};
use crate::action::Action;
use crate::providers::{LATITUDE, LONGITUDE};
use crate::state::AppState;

/// Trigger label while a fetch cycle is in flight
pub const LOADING_LABEL: &str = "Loading...";
/// Trigger label when idle
pub const FETCH_LABEL: &str = "Fetch Weather Data (r)";

/// Props for ProviderBoard - read-only view of state
pub struct ProviderBoardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main view: trigger banner, results table, help bar
#[derive(Default)]
pub struct ProviderBoard;

impl Component<Action> for ProviderBoard {
    type Props<'a> = ProviderBoardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::ProvidersFetch),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::RowNext),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::RowPrev),
                // The cursor addresses the displayed (sorted) table
                KeyCode::Char('p') | KeyCode::Char(' ') | KeyCode::Enter => props
                    .state
                    .display_rows()
                    .get(props.state.selected)
                    .map(|row| Action::PinToggle(row.provider)),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ProviderBoardProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Trigger banner
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(vec![
            Span::styled(
                "Weather Providers",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {LATITUDE}, {LONGITUDE}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let banner = if props.state.is_loading {
            Line::from(Span::styled(
                LOADING_LABEL,
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(FETCH_LABEL, Style::default().fg(Color::Cyan)))
        };
        frame.render_widget(Paragraph::new(banner), chunks[1]);

        let rows = props.state.display_rows();
        let mut table = ProviderTable;
        table.render(
            frame,
            chunks[3],
            ProviderTableProps {
                rows: &rows,
                selected: props.state.selected,
                is_focused: props.is_focused,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("r", "fetch"),
                    StatusBarHint::new("↑/↓", "select"),
                    StatusBarHint::new("p", "pin/unpin"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
