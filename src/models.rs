use crate::error::PromptError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Persuasive,
    Informative,
    Narrative,
    #[default]
    Technical,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Persuasive,
        Style::Informative,
        Style::Narrative,
        Style::Technical,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Style::Persuasive => "persuasive",
            Style::Informative => "informative",
            Style::Narrative => "narrative",
            Style::Technical => "technical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Persuasive => "Persuasive",
            Style::Informative => "Informative",
            Style::Narrative => "Narrative",
            Style::Technical => "Technical",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Style {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| PromptError::invalid_enum("style", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Expertise {
    Marketing,
    Teaching,
    #[default]
    CreativeWriting,
    Engineering,
}

impl Expertise {
    pub const ALL: [Expertise; 4] = [
        Expertise::Marketing,
        Expertise::Teaching,
        Expertise::CreativeWriting,
        Expertise::Engineering,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Expertise::Marketing => "marketing",
            Expertise::Teaching => "teaching",
            Expertise::CreativeWriting => "creative-writing",
            Expertise::Engineering => "engineering",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Expertise::Marketing => "Marketing",
            Expertise::Teaching => "Teaching",
            Expertise::CreativeWriting => "Creative Writing",
            Expertise::Engineering => "Engineering",
        }
    }
}

impl fmt::Display for Expertise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Expertise {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expertise::ALL
            .into_iter()
            .find(|expertise| expertise.id() == s)
            .ok_or_else(|| PromptError::invalid_enum("expertise", s))
    }
}

/// Settings group. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prompt,
    Ai,
    Interface,
    Advanced,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 4] = [
        Category::Prompt,
        Category::Ai,
        Category::Interface,
        Category::Advanced,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Category::Prompt => "Prompt Settings",
            Category::Ai => "AI Settings",
            Category::Interface => "Interface Settings",
            Category::Advanced => "Advanced Settings",
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    pub label: String,
    pub description: String,
    pub category: Category,
    pub default_value: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogData {
    pub settings: Vec<Setting>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Compose,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Style,
    Expertise,
    Output,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Input, Focus::Style, Focus::Expertise, Focus::Output];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for style in Style::ALL {
            assert_eq!(style.id().parse::<Style>(), Ok(style));
        }
        for expertise in Expertise::ALL {
            assert_eq!(expertise.id().parse::<Expertise>(), Ok(expertise));
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(
            "Technical".parse::<Style>(),
            Err(PromptError::invalid_enum("style", "Technical"))
        );
        // the alternate set used by an older selector is not accepted
        assert!("writing".parse::<Expertise>().is_err());
        assert!("technical".parse::<Expertise>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(Style::default(), Style::Technical);
        assert_eq!(Expertise::default(), Expertise::CreativeWriting);
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::Input;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Input);
        assert_eq!(Focus::Input.prev(), Focus::Output);
        assert_eq!(Focus::Output.next(), Focus::Input);
    }

    #[test]
    fn category_order_matches_display_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }
}
