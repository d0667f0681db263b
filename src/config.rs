use crate::generator::DEFAULT_DELAY;
use crate::models::{Expertise, Style};
use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub bg: String,      // background
    pub main: String,    // accent (brand, selected radio, focused border)
    pub caret: String,   // input cursor block
    pub text: String,    // body text
    pub sub: String,     // hints, placeholders, counters
    #[serde(alias = "subAlt")]
    pub sub_alt: String, // unfocused borders
    pub error: String,   // status line errors
    pub on: String,      // enabled toggle
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#121212".to_string(),
            main: "#c084fc".to_string(),
            caret: "#a855f7".to_string(),
            text: "#d1d5db".to_string(),
            sub: "#6b7280".to_string(),
            sub_alt: "#374151".to_string(),
            error: "#ef4444".to_string(),
            on: "#22c55e".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PromptDefaults {
    pub style: Style,
    pub expertise: Expertise,
    pub delay_ms: u64,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            style: Style::default(),
            expertise: Expertise::default(),
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

impl PromptDefaults {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub theme: Theme,
    pub prompt: PromptDefaults,
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "prompt-professor")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(config_path().as_deref())
    }

    /// Defaults overlaid with `path`, if it exists.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let theme = Theme::default();
        let prompt = PromptDefaults::default();

        let mut builder = Config::builder()
            .set_default("theme.bg", theme.bg)?
            .set_default("theme.main", theme.main)?
            .set_default("theme.caret", theme.caret)?
            .set_default("theme.text", theme.text)?
            .set_default("theme.sub", theme.sub)?
            .set_default("theme.subAlt", theme.sub_alt)?
            .set_default("theme.error", theme.error)?
            .set_default("theme.on", theme.on)?
            .set_default("prompt.style", prompt.style.id())?
            .set_default("prompt.expertise", prompt.expertise.id())?
            .set_default("prompt.delay_ms", prompt.delay_ms as i64)?;

        if let Some(path) = path {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                builder = builder.add_source(File::from(path.to_path_buf()));
            }
        }

        let cfg = builder.build()?;
        let app_config: AppConfig = cfg.try_deserialize()?;

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(cfg, AppConfig::default());

        let cfg = AppConfig::load_from(None).unwrap();
        assert_eq!(cfg.prompt.delay(), DEFAULT_DELAY);
    }

    #[test]
    fn file_overrides_defaults() {
        let (_dir, path) = write_config(
            r##"
[theme]
main = "#ff00ff"
subAlt = "#101010"

[prompt]
style = "narrative"
expertise = "teaching"
delay_ms = 250
"##,
        );

        let cfg = AppConfig::load_from(Some(&path)).unwrap();
        assert_eq!(cfg.theme.main, "#ff00ff");
        assert_eq!(cfg.theme.sub_alt, "#101010");
        assert_eq!(cfg.theme.bg, Theme::default().bg);
        assert_eq!(cfg.prompt.style, Style::Narrative);
        assert_eq!(cfg.prompt.expertise, Expertise::Teaching);
        assert_eq!(cfg.prompt.delay(), Duration::from_millis(250));
    }

    #[test]
    fn unknown_enum_id_is_an_error() {
        let (_dir, path) = write_config("[prompt]\nexpertise = \"technical\"\n");
        assert!(AppConfig::load_from(Some(&path)).is_err());
    }
}
