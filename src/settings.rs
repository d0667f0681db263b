use crate::error::PromptError;
use crate::models::{CatalogData, Category, Setting};
use anyhow::{bail, Context, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

const CATALOG_FILE: &str = "settings.json";

/// The fixed, ordered list of toggles. Loaded once at startup and never
/// changed afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    settings: Vec<Setting>,
}

impl Catalog {
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(CATALOG_FILE).context(format!(
            "Could not find embedded settings file: {}",
            CATALOG_FILE
        ))?;
        let raw = std::str::from_utf8(file.data.as_ref())?;
        Self::from_json(raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let data: CatalogData =
            serde_json::from_str(raw).context("settings catalog is not valid JSON")?;

        let mut seen = HashSet::new();
        for setting in &data.settings {
            if !seen.insert(setting.id.as_str()) {
                bail!("duplicate setting id in catalog: {}", setting.id);
            }
        }

        Ok(Self {
            settings: data.settings,
        })
    }

    #[cfg(test)]
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.id == id)
    }

    /// Fresh state with every entry at its default.
    pub fn initialize(&self) -> SettingsState {
        let values = self
            .settings
            .iter()
            .map(|s| (s.id.clone(), s.default_value))
            .collect();
        SettingsState { values }
    }

    /// Groups entries by category, keeping declaration order inside each
    /// group. Categories with no entries are left out.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&Setting>> {
        let mut groups: BTreeMap<Category, Vec<&Setting>> = BTreeMap::new();
        for setting in &self.settings {
            groups.entry(setting.category).or_default().push(setting);
        }
        groups
    }
}

/// Current toggle values. The key set is fixed by [`Catalog::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    values: HashMap<String, bool>,
}

impl SettingsState {
    pub fn get(&self, id: &str) -> Option<bool> {
        self.values.get(id).copied()
    }

    /// Like [`get`](Self::get), treating unknown ids as off.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).unwrap_or(false)
    }

    /// Flips `id` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, PromptError> {
        let value = self
            .values
            .get_mut(id)
            .ok_or_else(|| PromptError::UnknownSettingId(id.to_string()))?;
        *value = !*value;
        tracing::debug!(setting = id, value = *value, "setting toggled");
        Ok(*value)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog loads")
    }

    #[test]
    fn embedded_catalog_has_every_entry() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.settings()[0].id, "autoExpand");
        assert_eq!(catalog.settings()[15].id, "debugMode");

        let dark = catalog.get("darkMode").unwrap();
        assert_eq!(dark.label, "Dark Mode");
        assert_eq!(dark.category, Category::Interface);
        assert!(dark.default_value);
    }

    #[test]
    fn initialize_seeds_defaults_for_exactly_the_catalog() {
        let catalog = catalog();
        let state = catalog.initialize();

        let mut state_ids: Vec<&str> = state.ids().collect();
        let mut catalog_ids: Vec<&str> = catalog.settings().iter().map(|s| s.id.as_str()).collect();
        state_ids.sort();
        catalog_ids.sort();
        assert_eq!(state_ids, catalog_ids);

        for setting in catalog.settings() {
            assert_eq!(state.get(&setting.id), Some(setting.default_value), "{}", setting.id);
        }
    }

    #[test]
    fn toggle_twice_restores_value() {
        let catalog = catalog();
        let mut state = catalog.initialize();
        let before = state.get("addExamples");

        assert_eq!(state.toggle("addExamples"), Ok(true));
        assert_eq!(state.toggle("addExamples"), Ok(false));
        assert_eq!(state.get("addExamples"), before);
    }

    #[test]
    fn dark_mode_round_trip_matches_initial_state() {
        let catalog = catalog();
        let initial = catalog.initialize();
        let mut state = initial.clone();

        assert_eq!(state.toggle("darkMode"), Ok(false));
        assert_ne!(state, initial);
        assert_eq!(state.toggle("darkMode"), Ok(true));
        assert_eq!(state, initial);
    }

    #[test]
    fn unknown_id_is_rejected_without_adding_a_key() {
        let catalog = catalog();
        let mut state = catalog.initialize();
        let before = state.clone();

        assert_eq!(
            state.toggle("turboMode"),
            Err(PromptError::UnknownSettingId("turboMode".to_string()))
        );
        assert_eq!(state, before);
        assert_eq!(state.len(), catalog.len());
        assert!(!state.is_enabled("turboMode"));
    }

    #[test]
    fn grouping_preserves_declaration_order() {
        let catalog = catalog();
        let groups = catalog.by_category();

        let order: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(order, Category::ALL.to_vec());

        let ai: Vec<&str> = groups[&Category::Ai].iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ai, ["useGPT4", "useClaude", "streamResponse", "enhanceCreativity"]);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), catalog.len());
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let raw = r#"{"settings": [
            {"id": "a", "label": "A", "description": "", "category": "ai", "defaultValue": true},
            {"id": "a", "label": "A2", "description": "", "category": "prompt", "defaultValue": false}
        ]}"#;
        assert!(Catalog::from_json(raw).is_err());
    }

    #[test]
    fn unknown_category_fails_to_load() {
        let raw = r#"{"settings": [
            {"id": "a", "label": "A", "description": "", "category": "misc", "defaultValue": true}
        ]}"#;
        assert!(Catalog::from_json(raw).is_err());
    }
}
