use ratatui::layout::Constraint;
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

use super::Component;
use crate::action::Action;
use crate::state::DisplayRow;

/// The merged results table: Provider | City | Temperature | Weather | Action
pub struct ProviderTable;

pub struct ProviderTableProps<'a> {
    pub rows: &'a [DisplayRow],
    pub selected: usize,
    pub is_focused: bool,
}

impl Component<Action> for ProviderTable {
    type Props<'a> = ProviderTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let header = Row::new(["Provider", "City", "Temperature", "Weather", "Action"])
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows = props.rows.iter().enumerate().map(|(index, row)| {
            let base = if row.pinned {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let style = if props.is_focused && index == props.selected {
                base.add_modifier(Modifier::REVERSED)
            } else {
                base
            };
            Row::new(vec![
                Cell::from(row.provider.label()),
                Cell::from(row.city.clone()),
                Cell::from(row.temperature.clone()),
                Cell::from(row.conditions.clone()),
                Cell::from(row.action_label()),
            ])
            .style(style)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Min(12),
                Constraint::Length(6),
            ],
        )
        .header(header);

        frame.render_widget(table, area);
    }
}
