use ratatui::style::{Color, Modifier};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use chrono::Datelike;
use crate::app::App;
use crate::models::Screen;

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

/// Middle column of `area`, `percent` wide.
pub fn centered_column(area: Rect, percent: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(percent),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

/// Area between the header rows and the footer rows.
pub fn body_area(f: &Frame) -> Rect {
    let area = f.area();
    let top = 5.min(area.height);
    let bottom = 4.min(area.height - top);
    Rect::new(area.x, area.y + top, area.width, area.height - top - bottom)
}

pub fn border_color(app: &App, focused: bool) -> Color {
    if focused {
        hex_to_rgb(&app.theme.main)
    } else {
        hex_to_rgb(&app.theme.sub_alt)
    }
}

pub fn render_header(f: &mut Frame, app: &App) {
    let area = f.area();
    if area.height < 4 {
        return;
    }

    let title = Line::from(Span::styled(
        "Prompt Professor",
        Style::default()
            .fg(hex_to_rgb(&app.theme.main))
            .add_modifier(Modifier::BOLD),
    ));
    let sub = Style::default().fg(hex_to_rgb(&app.theme.sub));
    let tagline = [
        Line::from(Span::styled(
            "Transform your ideas into meticulously crafted, contextually rich",
            sub,
        )),
        Line::from(Span::styled(
            "prompts engineered for optimal AI responses.",
            sub,
        )),
    ];

    let mut lines = vec![title];
    lines.extend(tagline);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(0, 1, area.width, 3),
    );
}

pub fn render_footer(f: &mut Frame, app: &App) {
    let area = f.area();
    if area.height < 8 {
        return;
    }

    if let Some(status) = &app.status {
        let color = if status.is_error {
            hex_to_rgb(&app.theme.error)
        } else {
            hex_to_rgb(&app.theme.main)
        };
        f.render_widget(
            Paragraph::new(status.text.as_str())
                .style(Style::default().fg(color))
                .alignment(Alignment::Center),
            Rect::new(0, area.height - 3, area.width, 1),
        );
    }

    if app.show_hotkeys() {
        let hotkeys = match app.screen {
            Screen::Compose => {
                "tab: focus | ctrl+g: generate | ctrl+y: copy | f2: settings | esc: quit"
            }
            Screen::Settings => "up/down: move | space: toggle | f2: back | esc: quit",
        };
        f.render_widget(
            Paragraph::new(hotkeys)
                .style(Style::default().fg(hex_to_rgb(&app.theme.sub)))
                .alignment(Alignment::Center),
            Rect::new(0, area.height - 2, area.width, 1),
        );
    }

    let year = chrono::Local::now().year();
    f.render_widget(
        Paragraph::new(format!("© {} Prompt Professor. Engineered for precision.", year))
            .style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)))
            .alignment(Alignment::Center),
        Rect::new(0, area.height - 1, area.width, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(hex_to_rgb("#c084fc"), Color::Rgb(0xc0, 0x84, 0xfc));
        assert_eq!(hex_to_rgb("22c55e"), Color::Rgb(0x22, 0xc5, 0x5e));
        assert_eq!(hex_to_rgb("#fff"), Color::White);
    }

    #[test]
    fn non_ascii_colors_fall_back_to_white() {
        // six bytes, but not six hex digits
        assert_eq!("a€bc".len(), 6);
        assert_eq!(hex_to_rgb("#a€bc"), Color::White);
        assert_eq!(hex_to_rgb("ééé"), Color::White);
    }
}
