use super::state::{AppState, FormField, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn draw(f: &mut Frame, state: &AppState, spinner_frame: u8) {
    let error_height = if state.store.error.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, state, chunks[0], spinner_frame);
    if let Some(message) = &state.store.error {
        draw_error_banner(f, message, chunks[1]);
    }
    match state.view {
        View::Form => draw_form(f, state, chunks[2]),
        View::Result => draw_result(f, state, chunks[2]),
        View::Saved => draw_saved(f, state, chunks[2]),
    }
    draw_footer(f, state, chunks[3]);
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect, spinner_frame: u8) {
    let activity = if state.store.loading {
        let ch = SPINNER_FRAMES[(spinner_frame as usize) % SPINNER_FRAMES.len()];
        Span::styled(
            format!("  {ch} generating..."),
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::raw("")
    };

    let title = Line::from(vec![
        Span::styled(
            " AI Recipe Generator ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— turn your ingredients into a meal",
            Style::default().fg(Color::DarkGray),
        ),
        activity,
    ]);

    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_error_banner(f: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(banner, area);
}

fn draw_form(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    draw_input(
        f,
        chunks[0],
        "Ingredients (comma separated)",
        &state.ingredients,
        state.focus == FormField::Ingredients,
    );
    draw_input(
        f,
        chunks[1],
        "Dietary preferences (optional)",
        &state.dietary_preferences,
        state.focus == FormField::DietaryPreferences,
    );
    draw_input(
        f,
        chunks[2],
        "Meal type (←/→ to change)",
        &format!("< {} >", state.meal_type()),
        state.focus == FormField::MealType,
    );

    let hint = if state.store.loading {
        "Request in flight — hang tight."
    } else if state.can_submit() {
        "Press Enter to generate a recipe."
    } else {
        "Enter at least one ingredient to get started."
    };
    let hint = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[3]);
}

fn draw_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if focused {
        format!("{value}█")
    } else {
        value.to_string()
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label),
    );
    f.render_widget(input, area);
}

fn draw_result(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(recipe) = &state.store.current else {
        let empty = Paragraph::new("No recipe yet. Press Esc to go back to the form.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        recipe.title.clone(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));

    let mut meta: Vec<String> = Vec::new();
    if let Some(time) = &recipe.cooking_time {
        meta.push(format!("Cooking time: {time}"));
    }
    if let Some(servings) = recipe.servings {
        meta.push(format!("Servings: {servings}"));
    }
    if let Some(cuisine) = &recipe.cuisine {
        meta.push(format!("Cuisine: {cuisine}"));
    }
    if !meta.is_empty() {
        lines.push(Line::from(Span::styled(
            meta.join("  |  "),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Ingredients",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for ingredient in &recipe.ingredients {
        lines.push(Line::raw(format!("  • {ingredient}")));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Instructions",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, step) in recipe.instructions.iter().enumerate() {
        lines.push(Line::raw(format!("  {}. {step}", i + 1)));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Recipe"));
    f.render_widget(body, area);
}

fn draw_saved(f: &mut Frame, state: &AppState, area: Rect) {
    let saved = state.store.saved();
    if saved.is_empty() {
        let empty = Paragraph::new("No saved recipes yet. Generate one and press 's' to keep it.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Saved recipes"));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = saved
        .iter()
        .map(|recipe| {
            let time = recipe.cooking_time.as_deref().unwrap_or("-");
            ListItem::new(Line::from(vec![
                Span::raw(recipe.title.clone()),
                Span::styled(format!("  ({time})"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Saved recipes"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.saved_index));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let keys = match state.view {
        View::Form => "[Tab] field  [←/→] meal type  [Enter] generate  [F2] saved  [Esc] quit",
        View::Result => "[s] save  [n] new recipe  [F2] saved  [Esc] back",
        View::Saved => "[↑/↓] select  [Enter] open  [d] delete  [Esc] back",
    };
    let footer = Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
