use crate::app::App;
use crate::ui::utils::{body_area, centered_column, hex_to_rgb};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = centered_column(body_area(f), 70);
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_to_rgb(&app.theme.main)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sub = Style::default().fg(hex_to_rgb(&app.theme.sub));
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;
    let mut flat_idx = 0;

    for (category, settings) in app.catalog.by_category() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            category.heading().to_uppercase(),
            Style::default()
                .fg(hex_to_rgb(&app.theme.sub))
                .add_modifier(Modifier::BOLD),
        )));

        for setting in settings {
            let selected = flat_idx == app.settings_cursor;
            if selected {
                cursor_line = lines.len();
            }

            let enabled = app.settings.is_enabled(&setting.id);
            let switch = if enabled {
                Span::styled("[ on]", Style::default().fg(hex_to_rgb(&app.theme.on)))
            } else {
                Span::styled("[off]", sub)
            };
            let marker = if selected { "› " } else { "  " };
            let mut label_style = Style::default().fg(hex_to_rgb(&app.theme.text));
            if selected {
                label_style = label_style
                    .fg(hex_to_rgb(&app.theme.main))
                    .add_modifier(Modifier::BOLD);
            }

            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                switch,
                Span::raw(" "),
                Span::styled(setting.label.clone(), label_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("        {}", setting.description),
                sub,
            )));
            flat_idx += 1;
        }
    }

    // scroll so the selected row and its description stay visible
    let height = inner.height as usize;
    let offset = (cursor_line + 2).saturating_sub(height);

    f.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), inner);
}
