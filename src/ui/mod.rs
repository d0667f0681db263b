pub mod compose;
pub mod toggles;
pub mod utils;

use crate::app::App;
use crate::models::Screen;
use crate::ui::utils::{hex_to_rgb, render_footer, render_header};
use ratatui::{
    style::Style,
    widgets::Block,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    render_header(f, app);
    match app.screen {
        Screen::Compose => compose::draw(f, app),
        Screen::Settings => toggles::draw(f, app),
    }
    render_footer(f, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn compose_screen_shows_panels_and_placeholder() {
        let mut app = test_app();
        app.session.set_input("Write a blog post").unwrap();
        let text = screen_text(&app, 120, 40);

        assert!(text.contains("Prompt Professor"));
        assert!(text.contains("Craft Your Prompt"));
        assert!(text.contains("Write a blog post"));
        assert!(text.contains("17/1,200 characters"));
        assert!(text.contains("Output Style"));
        assert!(text.contains("Field of Expertise"));
        assert!(text.contains("Your generated prompt will appear here..."));
        assert!(text.contains("Engineered for precision."));
    }

    #[test]
    fn settings_screen_lists_every_group() {
        let mut app = test_app();
        app.toggle_screen();
        let text = screen_text(&app, 120, 60);

        assert!(text.contains("PROMPT SETTINGS"));
        assert!(text.contains("AI SETTINGS"));
        assert!(text.contains("Dark Mode"));
        assert!(text.contains("Enable dark theme interface"));
    }

    #[test]
    fn hotkeys_hide_with_their_setting() {
        let mut app = test_app();
        assert!(screen_text(&app, 120, 40).contains("ctrl+g: generate"));
        app.settings.toggle(crate::app::SHOW_HOTKEYS).unwrap();
        assert!(!screen_text(&app, 120, 40).contains("ctrl+g: generate"));
    }

    #[test]
    fn header_carries_the_full_tagline() {
        let app = test_app();
        let text = screen_text(&app, 120, 40);
        assert!(text.contains("Transform your ideas into meticulously crafted, contextually rich"));
        assert!(text.contains("prompts engineered for optimal AI responses."));
    }

    #[test]
    fn malformed_theme_colors_still_draw() {
        let mut app = test_app();
        app.theme.main = "#a€bc".to_string();
        app.theme.bg = "not a colour".to_string();
        let text = screen_text(&app, 120, 40);
        assert!(text.contains("Prompt Professor"));
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        let app = test_app();
        screen_text(&app, 10, 3);
        screen_text(&app, 1, 1);
    }
}
