//! Content localization: merging authored fields with machine translations.
//!
//! `ContentLocalizer` resolves each bilingual record into display text for
//! one language. The rules, in order:
//!
//! 1. An authored field in the requested language wins and is shown as-is.
//! 2. Otherwise the canonical (German) field is the source text, falling back
//!    to the primary column when the German field is blank too.
//! 3. If the requested language IS canonical, the source text is shown as-is.
//!    Otherwise it goes through the translation cache and the result is
//!    marked `machine_translated`.
//!
//! `MenuView` layers language switching on top: it re-resolves the menu when
//! the active language changes and discards any resolution that was overtaken
//! by a newer switch, so the published rendering always matches the most
//! recently selected language.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::cache::TranslationCache;
use crate::content::{
    LocalizedMenu, LocalizedPrep, LocalizedRecipe, LocalizedText, MenuExport, Prep, Recipe,
};
use crate::i18n::Language;
use crate::translate::TranslateError;

/// Resolves bilingual records into display text for one language.
#[derive(Clone)]
pub struct ContentLocalizer {
    cache: Arc<TranslationCache>,
}

impl ContentLocalizer {
    pub fn new(cache: Arc<TranslationCache>) -> Self {
        Self { cache }
    }

    /// Resolve a dish for the given display language.
    ///
    /// # Errors
    /// Returns the first translation failure. Nothing is partially published;
    /// callers fall back to [`fallback_recipe`] for the whole record.
    pub async fn localize_recipe(
        &self,
        recipe: &Recipe,
        language: Language,
    ) -> Result<LocalizedRecipe, TranslateError> {
        let canonical = Language::canonical();

        let name_source = recipe.name_in(canonical).or(non_blank(&recipe.name));
        let name = self
            .resolve_field(recipe.name_in(language), name_source, language)
            .await?
            // Nothing authored anywhere: show the primary column untranslated
            .unwrap_or_else(|| LocalizedText::authored(recipe.name.clone()));

        let description = self
            .resolve_field(
                recipe.description_in(language),
                recipe.description_in(canonical),
                language,
            )
            .await?;

        Ok(LocalizedRecipe {
            id: recipe.id.clone(),
            name,
            description,
            category: recipe.category.clone(),
        })
    }

    /// Resolve a prep component for the given display language.
    pub async fn localize_prep(
        &self,
        prep: &Prep,
        language: Language,
    ) -> Result<LocalizedPrep, TranslateError> {
        let canonical = Language::canonical();

        let name_source = prep.name_in(canonical).or(non_blank(&prep.name));
        let name = self
            .resolve_field(prep.name_in(language), name_source, language)
            .await?
            .unwrap_or_else(|| LocalizedText::authored(prep.name.clone()));

        let instructions = self
            .resolve_field(
                prep.instructions_in(language),
                prep.instructions_in(canonical),
                language,
            )
            .await?;

        Ok(LocalizedPrep {
            id: prep.id.clone(),
            name,
            instructions,
        })
    }

    /// Resolve the whole export for the given display language.
    ///
    /// Records are resolved sequentially; the cache coalesces any repeated
    /// text, so duplicate names across records still cost one service call.
    pub async fn localize_menu(
        &self,
        menu: &MenuExport,
        language: Language,
    ) -> Result<LocalizedMenu, TranslateError> {
        let mut recipes = Vec::with_capacity(menu.recipes.len());
        for recipe in &menu.recipes {
            recipes.push(self.localize_recipe(recipe, language).await?);
        }

        let mut preps = Vec::with_capacity(menu.preps.len());
        for prep in &menu.preps {
            preps.push(self.localize_prep(prep, language).await?);
        }

        Ok(LocalizedMenu {
            language,
            recipes,
            preps,
        })
    }

    /// Resolve one bilingual field.
    ///
    /// `authored` is the field in the requested language, `source` the best
    /// available source text (canonical field, or primary column for names).
    async fn resolve_field(
        &self,
        authored: Option<&str>,
        source: Option<&str>,
        language: Language,
    ) -> Result<Option<LocalizedText>, TranslateError> {
        if let Some(text) = authored {
            return Ok(Some(LocalizedText::authored(text)));
        }

        let Some(source_text) = source else {
            return Ok(None);
        };

        if language == Language::canonical() {
            return Ok(Some(LocalizedText::authored(source_text)));
        }

        let translated = self
            .cache
            .translate(source_text, Language::canonical(), language)
            .await?;
        Ok(Some(LocalizedText::machine(translated)))
    }
}

fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Render a dish from its canonical fields only, for when translation fails.
pub fn fallback_recipe(recipe: &Recipe) -> LocalizedRecipe {
    let canonical = Language::canonical();
    LocalizedRecipe {
        id: recipe.id.clone(),
        name: LocalizedText::authored(recipe.name_in(canonical).unwrap_or(&recipe.name)),
        description: recipe
            .description_in(canonical)
            .map(LocalizedText::authored),
        category: recipe.category.clone(),
    }
}

/// Render a prep from its canonical fields only, for when translation fails.
pub fn fallback_prep(prep: &Prep) -> LocalizedPrep {
    let canonical = Language::canonical();
    LocalizedPrep {
        id: prep.id.clone(),
        name: LocalizedText::authored(prep.name_in(canonical).unwrap_or(&prep.name)),
        instructions: prep.instructions_in(canonical).map(LocalizedText::authored),
    }
}

/// Shared handle to the currently selected display language.
///
/// Cloning the handle shares the same underlying channel. Views subscribe
/// through [`MenuView`] and are woken on every actual change; selecting the
/// language that is already active is a no-op.
#[derive(Debug, Clone)]
pub struct ActiveLanguage {
    sender: Arc<watch::Sender<Language>>,
}

impl ActiveLanguage {
    pub fn new(initial: Language) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        *self.sender.borrow()
    }

    /// Select a language. Re-selecting the current one does not wake views.
    pub fn set(&self, language: Language) {
        self.sender.send_if_modified(|current| {
            if *current == language {
                false
            } else {
                debug!("Switching display language {} -> {}", current, language);
                *current = language;
                true
            }
        });
    }

    fn subscribe(&self) -> watch::Receiver<Language> {
        self.sender.subscribe()
    }
}

/// A menu rendering that follows the active language.
///
/// Drive it with a loop of [`MenuView::changed`] and [`MenuView::refresh`].
pub struct MenuView {
    localizer: ContentLocalizer,
    menu: MenuExport,
    language: watch::Receiver<Language>,
    current: Option<LocalizedMenu>,
}

impl MenuView {
    pub fn new(localizer: ContentLocalizer, menu: MenuExport, language: &ActiveLanguage) -> Self {
        Self {
            localizer,
            menu,
            language: language.subscribe(),
            current: None,
        }
    }

    /// The last successfully published rendering, if any.
    pub fn current(&self) -> Option<&LocalizedMenu> {
        self.current.as_ref()
    }

    /// Wait until the active language changes.
    ///
    /// Returns `false` when the [`ActiveLanguage`] handle is gone and no
    /// further changes can arrive.
    pub async fn changed(&mut self) -> bool {
        self.language.changed().await.is_ok()
    }

    /// Resolve the menu for the most recently selected language.
    ///
    /// If the language is switched while a resolution is in flight, that
    /// resolution is discarded and the loop restarts with the new language,
    /// so a slow translation pass can never publish over a newer selection.
    ///
    /// # Errors
    /// Returns the first translation failure for the language being resolved;
    /// the previously published rendering stays in place.
    pub async fn refresh(&mut self) -> Result<&LocalizedMenu, TranslateError> {
        loop {
            let language = *self.language.borrow_and_update();
            let localized = self.localizer.localize_menu(&self.menu, language).await?;

            if self.language.has_changed().unwrap_or(false) {
                debug!(
                    "Discarding menu resolved for {} after a language switch",
                    language
                );
                continue;
            }

            return Ok(self.current.insert(localized));
        }
    }
}
