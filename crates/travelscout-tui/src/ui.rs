// UI rendering logic
use crate::{App, ContactField, InputMode, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

const ABOUT_TEXT: &str = "We help travellers find their next destination. \
Search for a city, temple or beach by name, or browse a whole category by typing \
\"beach\", \"temple\" or \"country\".";

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(5),    // View content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_navigation(frame, app, chunks[0]);

    match app.view {
        View::Home => render_home(frame, app, chunks[1]),
        View::About => render_about(frame, chunks[1]),
        View::Contact => render_contact(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_navigation(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();
    let selected = View::ALL.iter().position(|v| *v == app.view).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" TravelScout "))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn render_home(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let input_style = if app.input_mode == InputMode::Searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(app.search_input.as_str())
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter a destination or keyword "),
        );
    frame.render_widget(input, chunks[0]);

    if !app.results_visible {
        return;
    }

    // Errors replace cards, they never sit next to them
    if let Some(message) = &app.error_message {
        let error = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Results "));
        frame.render_widget(error, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .records
        .iter()
        .map(|record| {
            let mut lines = vec![
                Line::from(Span::styled(
                    record.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(record.description.clone()),
                Line::from(Span::styled(
                    format!("Image: {}", image_label(&record.image_url, &record.fallback_image_url)),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            if let Some(time) = app.time_slots.display_text(&record.id) {
                lines.push(Line::from(Span::styled(time, Style::default().fg(Color::Green))));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Results ({}) ", app.records.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[1], &mut app.list_state);
}

/// Terminals cannot tell whether an image loads, so a blank URL is the only
/// failure we can see here
fn image_label<'a>(image_url: &'a str, fallback: &'a str) -> &'a str {
    if image_url.trim().is_empty() {
        fallback
    } else {
        image_url
    }
}

fn render_about(frame: &mut Frame, area: Rect) {
    let about = Paragraph::new(ABOUT_TEXT)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" About Us "));
    frame.render_widget(about, area);
}

fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    let field_line = |label: &str, value: &str, field: ContactField| {
        let active = app.input_mode == InputMode::EditingContact && app.contact_field == field;
        let style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{:<9}", label), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(value.to_string(), style),
        ])
    };

    let mut lines = vec![
        field_line("Name:", &app.contact.name, ContactField::Name),
        field_line("Email:", &app.contact.email, ContactField::Email),
        field_line("Message:", &app.contact.message, ContactField::Message),
        Line::from(""),
    ];
    if let Some(notice) = &app.contact_notice {
        lines.push(Line::from(Span::styled(notice.clone(), Style::default().fg(Color::Cyan))));
    }

    let form = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Contact Us "));
    frame.render_widget(form, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match app.input_mode {
        InputMode::Searching => "Enter: search | Esc: stop typing",
        InputMode::EditingContact => "Tab: next field | Enter: submit | Esc: stop typing",
        InputMode::Normal => match app.view {
            View::Home => "/: type | Enter: search | x: clear | j/k: move | 1-3: views | q: quit",
            View::Contact => "Enter: edit form | 1-3: views | q: quit",
            View::About => "1-3: views | q: quit",
        },
    };

    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
