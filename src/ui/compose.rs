use crate::app::App;
use crate::models::{Expertise, Focus, Style as PromptStyle};
use crate::session::{GenerationStatus, MAX_INPUT_CHARS};
use crate::ui::utils::{body_area, border_color, centered_column, hex_to_rgb};
use crate::utils::strings;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let column = centered_column(body_area(f), 90);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(column);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(halves[0]);

    let radios = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(left[1]);

    draw_input(f, app, left[0]);

    let style_options: Vec<(&str, bool)> = PromptStyle::ALL
        .iter()
        .map(|s| (s.label(), *s == app.session.style()))
        .collect();
    draw_radio(f, app, radios[0], " Output Style ", &style_options, app.focus == Focus::Style);

    let expertise_options: Vec<(&str, bool)> = Expertise::ALL
        .iter()
        .map(|e| (e.label(), *e == app.session.expertise()))
        .collect();
    draw_radio(
        f,
        app,
        radios[2],
        " Field of Expertise ",
        &expertise_options,
        app.focus == Focus::Expertise,
    );

    draw_output(f, app, halves[2]);
}

fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    textwrap::wrap(text, width.max(1) as usize)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let block = Block::default()
        .title(" Craft Your Prompt ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(app, focused)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let text_area = rows[0];

    let text_style = Style::default().fg(hex_to_rgb(&app.theme.text));
    let caret = Span::styled(" ", Style::default().bg(hex_to_rgb(&app.theme.caret)));

    let input = app.session.input();
    let mut lines: Vec<Line> = if input.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(caret);
        }
        spans.push(Span::styled(
            "Enter your prompt idea (up to 1,200 characters)...",
            Style::default().fg(hex_to_rgb(&app.theme.sub)),
        ));
        vec![Line::from(spans)]
    } else {
        let mut lines: Vec<Line> = wrap_lines(input, text_area.width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect();
        if focused {
            if let Some(last) = lines.last_mut() {
                last.spans.push(caret);
            }
        }
        lines
    };

    // keep the end of the text, where the caret is, in view
    let visible = text_area.height as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }
    f.render_widget(Paragraph::new(lines), text_area);

    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(17)])
        .split(rows[1]);

    let mut counter = format!(
        "{}/{} characters",
        strings::format_count(strings::char_count(input)),
        strings::format_count(MAX_INPUT_CHARS)
    );
    if app.show_word_count() {
        counter.push_str(&format!(" | {} words", strings::word_count(input)));
    }
    f.render_widget(
        Paragraph::new(counter).style(Style::default().fg(hex_to_rgb(&app.theme.sub))),
        footer[0],
    );

    let (label, color) = match app.session.status() {
        GenerationStatus::Generating => ("[ Generating... ]", hex_to_rgb(&app.theme.main)),
        GenerationStatus::Idle if app.session.can_generate() => {
            ("[ Generate ]", hex_to_rgb(&app.theme.main))
        }
        GenerationStatus::Idle => ("[ Generate ]", hex_to_rgb(&app.theme.sub)),
    };
    f.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Right)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        footer[1],
    );
}

fn draw_radio(
    f: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    options: &[(&str, bool)],
    focused: bool,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(app, focused)));

    let lines: Vec<Line> = options
        .iter()
        .map(|(label, selected)| {
            if *selected {
                Line::from(vec![
                    Span::styled("(●) ", Style::default().fg(hex_to_rgb(&app.theme.main))),
                    Span::styled(
                        label.to_string(),
                        Style::default()
                            .fg(hex_to_rgb(&app.theme.text))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled("( ) ", Style::default().fg(hex_to_rgb(&app.theme.sub_alt))),
                    Span::styled(label.to_string(), Style::default().fg(hex_to_rgb(&app.theme.sub))),
                ])
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_output(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Output;
    let block = Block::default()
        .title(" Generated Prompt ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(app, focused)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let output = app.session.output();
    let lines: Vec<Line> = if output.is_empty() {
        wrap_lines("Your generated prompt will appear here...", rows[0].width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(hex_to_rgb(&app.theme.sub)))))
            .collect()
    } else {
        wrap_lines(output, rows[0].width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(hex_to_rgb(&app.theme.text)))))
            .collect()
    };
    f.render_widget(Paragraph::new(lines), rows[0]);

    if !output.is_empty() {
        let hint = if focused {
            "enter/c: copy to clipboard"
        } else {
            "ctrl+y: copy to clipboard"
        };
        f.render_widget(
            Paragraph::new(hint)
                .alignment(Alignment::Center)
                .style(Style::default().fg(hex_to_rgb(&app.theme.sub))),
            rows[1],
        );
    }
}
