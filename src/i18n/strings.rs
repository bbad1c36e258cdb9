/// All localized user-facing strings for a language
///
/// Strings are stored in their raw, unescaped form. They are plain text and
/// safe to print to a terminal or embed in a rendered page as-is.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Section Headers ====================
    /// Header shown above the dish list (e.g., "Speisekarte")
    pub menu_header: &'static str,

    /// Header shown above the prep component list (e.g., "Vorbereitungen")
    pub preps_header: &'static str,

    // ==================== Translation Notices ====================
    /// Badge appended to text that came from the translation service
    /// rather than from an authored field
    pub machine_translated_badge: &'static str,

    /// Notice shown when translation fails and falling back to German.
    /// Empty string means no notice is needed (e.g., for German itself)
    pub translation_failure_notice: &'static str,
}

// ==================== German Strings ====================

/// German language strings (canonical)
pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    // Section headers
    menu_header: "Speisekarte",
    preps_header: "Vorbereitungen",

    // Translation notices
    machine_translated_badge: "(maschinell übersetzt)",
    translation_failure_notice: "", // No notice needed for German
};

// ==================== English Strings ====================

/// English language strings
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Section headers
    menu_header: "Menu",
    preps_header: "Preparations",

    // Translation notices
    machine_translated_badge: "(machine translated)",
    translation_failure_notice: "[Note: translation unavailable. Showing German.]",
};
