use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::state::{AppState, Lookup};

const HELP_TEXT: &str = "\
↑/↓: move in the list
Enter: look up the selection
Tab: switch country/year lookup
q: quit";

pub fn draw(f: &mut Frame<'_>, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(22),
                Constraint::Percentage(44),
                Constraint::Percentage(34),
            ]
            .as_ref(),
        )
        .split(f.area());

    // Left panel: selection list
    let title = match state.lookup {
        Lookup::Countries => "Country Wins Lookup",
        Lookup::Years => "Yearly Final Lookup",
    };
    let items: Vec<ListItem> = state.list_items().into_iter().map(ListItem::new).collect();
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_symbol(">> ")
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    // Center: win totals, best first
    let rows: Vec<Row> = state
        .service()
        .win_counts()
        .into_iter()
        .map(|(country, wins)| Row::new(vec![country.to_string(), wins.to_string()]))
        .collect();
    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(6)])
        .header(Row::new(vec!["Country", "Wins"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("World Cup Wins by Country"),
        );
    f.render_widget(table, chunks[1]);

    // Right panel: lookup result + keys
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(chunks[2]);

    let detail = Paragraph::new(state.detail.clone())
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, right[0]);

    let help = Paragraph::new(HELP_TEXT)
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .wrap(Wrap { trim: true });
    f.render_widget(help, right[1]);
}
