use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use cd2n::compose;
use cd2n::navigation::Screen;

use crate::tui::{app::App, theme::THEME};

fn pane_block(title: &str, active: bool) -> Block<'_> {
    let border_style = if active {
        Style::default()
            .fg(THEME.active_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(THEME.inactive_border)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn selectable(text: String, selected: bool) -> ListItem<'static> {
    if selected {
        ListItem::new(format!("▶ {text}")).style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        ListItem::new(format!("  {text}"))
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new("CD2N Main Menu   |   q quit")
        .style(Style::default().fg(THEME.header_fg).bg(THEME.header_bg))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, root[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Min(40)])
        .split(root[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(8)])
        .split(body[1]);

    let footer_text = match app.navigator.screen() {
        Screen::MainMenu => {
            let items: Vec<ListItem> = app
                .menu_entries()
                .into_iter()
                .enumerate()
                .map(|(index, entry)| selectable(entry.title(), index == app.menu_selected))
                .collect();
            let menu = List::new(items)
                .style(Style::default().fg(THEME.text_fg))
                .block(pane_block("Services", true));
            frame.render_widget(menu, body[0]);

            let hint = app
                .selected_entry()
                .map(|entry| entry.keybind_hint())
                .unwrap_or_default();
            format!("keys: j/k select, {hint}, r write now, q quit")
        }
        Screen::EditingService { kind, scratch } => {
            let items: Vec<ListItem> = scratch
                .fields()
                .into_iter()
                .enumerate()
                .map(|(index, (field, value))| {
                    selectable(
                        format!("{}: {value}", field.label()),
                        index == app.field_selected,
                    )
                })
                .collect();
            let title = format!("Configuration for: {kind}");
            let form = List::new(items)
                .style(Style::default().fg(THEME.text_fg))
                .block(pane_block(&title, true));
            frame.render_widget(form, body[0]);

            "keys: Tab/↑↓ field, type to edit, Enter or Ctrl+S save and return, Esc cancel"
                .to_string()
        }
    };

    let preview = compose::render_to_string(&app.preview_model())
        .unwrap_or_else(|error| format!("preview unavailable: {error}"));
    let preview_title = format!("{} (preview)", app.navigator.compose_path().display());
    let preview_panel = Paragraph::new(preview)
        .style(Style::default().fg(THEME.text_fg))
        .block(pane_block(&preview_title, false));
    frame.render_widget(preview_panel, right[0]);

    let last = app.command_log.len().saturating_sub(1);
    let log_items: Vec<ListItem> = app
        .command_log
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let item = ListItem::new(entry.as_str());
            if app.last_failed && index == last {
                item.style(Style::default().fg(THEME.error_fg))
            } else {
                item
            }
        })
        .collect();
    let log = List::new(log_items).block(pane_block("Actions", false));
    frame.render_widget(log, right[1]);

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(THEME.footer_fg))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, root[2]);
}
