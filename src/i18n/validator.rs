//! Translation quality validation module.
//!
//! This module provides validation for translated menu content to ensure that
//! important elements are preserved during translation (e.g., prices,
//! quantities, allergen codes).

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static ALLERGEN_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a translation preserves important elements from the original.
    ///
    /// This function checks that:
    /// - the translation is not empty when the original isn't
    /// - numbers (prices, quantities) are preserved
    /// - allergen code groups like "(A, G)" are preserved
    ///
    /// Number comparison ignores the decimal separator, since a correct
    /// translation may turn "12,50" into "12.50".
    ///
    /// # Arguments
    /// * `original` - The original text (before translation)
    /// * `translated` - The translated text
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        // An empty result for a non-empty source is never a usable translation
        if translated.trim().is_empty() && !original.trim().is_empty() {
            report.errors.push("Translation is empty".to_string());
            return report;
        }

        // Check numbers (prices, quantities)
        let orig_numbers = Self::extract_numbers(original);
        let trans_numbers = Self::extract_numbers(translated);
        if orig_numbers != trans_numbers {
            report.warnings.push(format!(
                "Number mismatch: original has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ));
        }

        // Check allergen codes
        let orig_allergens = Self::extract_allergen_codes(original);
        let trans_allergens = Self::extract_allergen_codes(translated);
        if orig_allergens != trans_allergens {
            report.warnings.push(format!(
                "Allergen code mismatch: original has {:?}, translation has {:?}",
                orig_allergens, trans_allergens
            ));
        }

        report
    }

    /// Extract all numbers from text, normalized to their digit sequence.
    ///
    /// "12,50" and "12.50" both normalize to "12 50" so separator changes
    /// don't trip the comparison. The result is sorted, since translations
    /// may legitimately reorder phrases.
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)*").unwrap());

        let mut numbers: Vec<String> = regex
            .find_iter(text)
            .map(|m| {
                m.as_str()
                    .split(|c| c == '.' || c == ',')
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        numbers.sort();
        numbers
    }

    /// Extract all allergen code groups from text, e.g. "(A, G)" or "(C)".
    ///
    /// Groups are normalized to their comma-joined letters with whitespace
    /// stripped, then sorted.
    fn extract_allergen_codes(text: &str) -> Vec<String> {
        let regex = ALLERGEN_REGEX
            .get_or_init(|| Regex::new(r"\(([A-Z](?:\s*,\s*[A-Z])*)\)").unwrap());

        let mut codes: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        codes.sort();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Number Extraction Tests ====================

    #[test]
    fn test_extract_numbers_single() {
        let text = "Tagessuppe 4,50 €";
        let numbers = TranslationValidator::extract_numbers(text);
        assert_eq!(numbers, vec!["4 50"]);
    }

    #[test]
    fn test_extract_numbers_multiple() {
        let text = "Schnitzel 14,90 € (Beilage +3,50 €)";
        let numbers = TranslationValidator::extract_numbers(text);
        assert_eq!(numbers, vec!["14 90", "3 50"]);
    }

    #[test]
    fn test_extract_numbers_none() {
        let text = "Hausgemachte Spätzle";
        let numbers = TranslationValidator::extract_numbers(text);
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_extract_numbers_separator_normalized() {
        let german = TranslationValidator::extract_numbers("12,50");
        let english = TranslationValidator::extract_numbers("12.50");
        assert_eq!(german, english);
    }

    // ==================== Allergen Extraction Tests ====================

    #[test]
    fn test_extract_allergens_single() {
        let text = "Käsespätzle (G)";
        let codes = TranslationValidator::extract_allergen_codes(text);
        assert_eq!(codes, vec!["G"]);
    }

    #[test]
    fn test_extract_allergens_group() {
        let text = "Wiener Schnitzel (A, C, G)";
        let codes = TranslationValidator::extract_allergen_codes(text);
        assert_eq!(codes, vec!["A,C,G"]);
    }

    #[test]
    fn test_extract_allergens_whitespace_normalized() {
        let tight = TranslationValidator::extract_allergen_codes("(A,G)");
        let spaced = TranslationValidator::extract_allergen_codes("(A, G)");
        assert_eq!(tight, spaced);
    }

    #[test]
    fn test_extract_allergens_ignores_words_in_parens() {
        let text = "Gulasch (hausgemacht)";
        let codes = TranslationValidator::extract_allergen_codes(text);
        assert!(codes.is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_perfect_translation() {
        let original = "Rindergulasch mit Spätzle (A, G) 15,90 €";
        let translated = "Beef goulash with spaetzle (A, G) 15.90 €";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_price() {
        let original = "Tagessuppe 4,50 €";
        let translated = "Soup of the day";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Number mismatch"));
    }

    #[test]
    fn test_validate_changed_price() {
        let original = "Schnitzel 14,90 €";
        let translated = "Schnitzel 14.00 €";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validate_missing_allergens() {
        let original = "Käsespätzle (G, C)";
        let translated = "Cheese spaetzle";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Allergen code mismatch"));
    }

    #[test]
    fn test_validate_empty_translation_is_error() {
        let report = TranslationValidator::validate("Bratkartoffeln", "   ");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("empty"));
    }

    #[test]
    fn test_validate_empty_original_and_translation_is_clean() {
        let report = TranslationValidator::validate("", "");
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_reordered_numbers_still_clean() {
        let original = "2 Knödel, 150 g Fleisch";
        let translated = "150 g of meat with 2 dumplings";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
