//! Bilingual content records and the JSON export loader.
//!
//! The back office exports dishes ("recipes") and kitchen prep components
//! ("preps") as one JSON document. Each record carries a language-agnostic
//! primary name plus optional per-language fields. In practice the kitchen
//! authors everything in German, fills `*_de` consistently, and fills `*_en`
//! only for dishes someone bothered to translate by hand.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A dish as exported from the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,

    /// Language-agnostic primary name. Authored in German in practice.
    pub name: String,

    #[serde(default)]
    pub name_de: Option<String>,

    #[serde(default)]
    pub name_en: Option<String>,

    #[serde(default)]
    pub description_de: Option<String>,

    #[serde(default)]
    pub description_en: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// The authored name for `language`, if the record carries a usable one.
    ///
    /// Blank fields count as absent, since the back office stores empty
    /// strings for untranslated columns.
    pub fn name_in(&self, language: Language) -> Option<&str> {
        bilingual_field(language, &self.name_de, &self.name_en)
    }

    /// The authored description for `language`, if any.
    pub fn description_in(&self, language: Language) -> Option<&str> {
        bilingual_field(language, &self.description_de, &self.description_en)
    }
}

/// A kitchen prep component as exported from the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prep {
    pub id: String,

    /// Language-agnostic primary name. Authored in German in practice.
    pub name: String,

    #[serde(default)]
    pub name_de: Option<String>,

    #[serde(default)]
    pub name_en: Option<String>,

    #[serde(default)]
    pub instructions_de: Option<String>,

    #[serde(default)]
    pub instructions_en: Option<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Prep {
    /// The authored name for `language`, if the record carries a usable one.
    pub fn name_in(&self, language: Language) -> Option<&str> {
        bilingual_field(language, &self.name_de, &self.name_en)
    }

    /// The authored instructions for `language`, if any.
    pub fn instructions_in(&self, language: Language) -> Option<&str> {
        bilingual_field(language, &self.instructions_de, &self.instructions_en)
    }
}

/// Select the per-language column for `language`, treating blank values as
/// absent. Languages without a column (future registry additions) resolve to
/// `None` and fall back to machine translation.
fn bilingual_field<'a>(
    language: Language,
    de: &'a Option<String>,
    en: &'a Option<String>,
) -> Option<&'a str> {
    let field = if language == Language::GERMAN {
        de
    } else if language == Language::ENGLISH {
        en
    } else {
        return None;
    };

    field.as_deref().filter(|value| !value.trim().is_empty())
}

/// The full content export: every dish and prep the site can show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuExport {
    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub preps: Vec<Prep>,
}

impl MenuExport {
    /// Load an export document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content export at {}", path.display()))?;
        let export: MenuExport =
            serde_json::from_str(&raw).context("Failed to parse content export JSON")?;
        Ok(export)
    }

    /// Whether the export contains no records at all.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.preps.is_empty()
    }
}

/// A resolved display string plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub text: String,

    /// True when the text came from the translation service rather than an
    /// authored field.
    pub machine_translated: bool,
}

impl LocalizedText {
    /// Text taken from an authored field (or the primary column).
    pub fn authored(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            machine_translated: false,
        }
    }

    /// Text produced by the translation service.
    pub fn machine(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            machine_translated: true,
        }
    }
}

/// A dish resolved for one display language.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedRecipe {
    pub id: String,
    pub name: LocalizedText,
    pub description: Option<LocalizedText>,
    pub category: Option<String>,
}

impl LocalizedRecipe {
    /// Whether any visible field came from the translation service.
    pub fn is_machine_translated(&self) -> bool {
        self.name.machine_translated
            || self
                .description
                .as_ref()
                .is_some_and(|text| text.machine_translated)
    }
}

/// A prep component resolved for one display language.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedPrep {
    pub id: String,
    pub name: LocalizedText,
    pub instructions: Option<LocalizedText>,
}

impl LocalizedPrep {
    /// Whether any visible field came from the translation service.
    pub fn is_machine_translated(&self) -> bool {
        self.name.machine_translated
            || self
                .instructions
                .as_ref()
                .is_some_and(|text| text.machine_translated)
    }
}

/// The whole menu resolved for one display language.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedMenu {
    pub language: Language,
    pub recipes: Vec<LocalizedRecipe>,
    pub preps: Vec<LocalizedPrep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            id: "r1".to_string(),
            name: name.to_string(),
            name_de: None,
            name_en: None,
            description_de: None,
            description_en: None,
            category: None,
            updated_at: None,
        }
    }

    // ==================== Field Selection Tests ====================

    #[test]
    fn test_name_in_returns_german_field() {
        let mut record = recipe("Gulasch");
        record.name_de = Some("Rindergulasch".to_string());

        assert_eq!(record.name_in(Language::GERMAN), Some("Rindergulasch"));
        assert_eq!(record.name_in(Language::ENGLISH), None);
    }

    #[test]
    fn test_name_in_returns_english_field() {
        let mut record = recipe("Gulasch");
        record.name_en = Some("Beef goulash".to_string());

        assert_eq!(record.name_in(Language::ENGLISH), Some("Beef goulash"));
        assert_eq!(record.name_in(Language::GERMAN), None);
    }

    #[test]
    fn test_blank_field_counts_as_absent() {
        let mut record = recipe("Gulasch");
        record.name_de = Some("   ".to_string());
        record.name_en = Some("".to_string());

        assert_eq!(record.name_in(Language::GERMAN), None);
        assert_eq!(record.name_in(Language::ENGLISH), None);
    }

    #[test]
    fn test_description_in_selects_per_language() {
        let mut record = recipe("Gulasch");
        record.description_de = Some("Mit Spätzle und Salat".to_string());

        assert_eq!(
            record.description_in(Language::GERMAN),
            Some("Mit Spätzle und Salat")
        );
        assert_eq!(record.description_in(Language::ENGLISH), None);
    }

    #[test]
    fn test_prep_instructions_in_selects_per_language() {
        let prep = Prep {
            id: "p1".to_string(),
            name: "Spätzleteig".to_string(),
            name_de: None,
            name_en: None,
            instructions_de: Some("Mehl und Eier verrühren".to_string()),
            instructions_en: None,
            updated_at: None,
        };

        assert_eq!(
            prep.instructions_in(Language::GERMAN),
            Some("Mehl und Eier verrühren")
        );
        assert_eq!(prep.instructions_in(Language::ENGLISH), None);
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_recipe_deserializes_with_missing_optional_fields() {
        let json = r#"{"id": "r42", "name": "Tagessuppe"}"#;
        let record: Recipe = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(record.id, "r42");
        assert_eq!(record.name, "Tagessuppe");
        assert!(record.name_de.is_none());
        assert!(record.name_en.is_none());
        assert!(record.category.is_none());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_recipe_roundtrip() {
        let json = r#"{
            "id": "r7",
            "name": "Käsespätzle",
            "name_de": "Käsespätzle",
            "name_en": "Cheese spaetzle",
            "description_de": "Mit Röstzwiebeln (G)",
            "category": "Hauptgerichte",
            "updated_at": "2025-03-01T12:00:00Z"
        }"#;

        let record: Recipe = serde_json::from_str(json).expect("Should deserialize");
        let serialized = serde_json::to_string(&record).expect("Should serialize");
        let again: Recipe = serde_json::from_str(&serialized).expect("Should deserialize again");

        assert_eq!(again.name_en.as_deref(), Some("Cheese spaetzle"));
        assert_eq!(again.category.as_deref(), Some("Hauptgerichte"));
        assert!(again.updated_at.is_some());
    }

    #[test]
    fn test_export_deserializes_with_missing_sections() {
        let export: MenuExport = serde_json::from_str("{}").expect("Should deserialize");
        assert!(export.is_empty());
    }

    // ==================== Loader Tests ====================

    #[test]
    fn test_from_file_reads_export() {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        write!(
            file,
            r#"{{
                "recipes": [{{"id": "r1", "name": "Gulasch"}}],
                "preps": [{{"id": "p1", "name": "Spätzleteig"}}]
            }}"#
        )
        .expect("Should write");

        let export = MenuExport::from_file(file.path()).expect("Should load");
        assert_eq!(export.recipes.len(), 1);
        assert_eq!(export.preps.len(), 1);
        assert!(!export.is_empty());
    }

    #[test]
    fn test_from_file_missing_file_mentions_path() {
        let result = MenuExport::from_file("/nonexistent/menu.json");
        let error = result.unwrap_err().to_string();
        assert!(error.contains("/nonexistent/menu.json"));
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        write!(file, "not json").expect("Should write");

        let result = MenuExport::from_file(file.path());
        assert!(result.is_err());
    }

    // ==================== Localized Type Tests ====================

    #[test]
    fn test_localized_text_constructors() {
        let authored = LocalizedText::authored("Gulasch");
        assert!(!authored.machine_translated);

        let machine = LocalizedText::machine("Goulash");
        assert!(machine.machine_translated);
    }

    #[test]
    fn test_localized_recipe_machine_flag_covers_description() {
        let localized = LocalizedRecipe {
            id: "r1".to_string(),
            name: LocalizedText::authored("Goulash"),
            description: Some(LocalizedText::machine("With spaetzle and salad")),
            category: None,
        };

        assert!(localized.is_machine_translated());
    }

    #[test]
    fn test_localized_menu_serializes_language_code() {
        let menu = LocalizedMenu {
            language: Language::ENGLISH,
            recipes: Vec::new(),
            preps: Vec::new(),
        };

        let json = serde_json::to_value(&menu).expect("Should serialize");
        assert_eq!(json["language"], "en");
    }
}
