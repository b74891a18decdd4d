use std::collections::HashMap;

use fluent_bundle::{FluentBundle, FluentResource};
use leptos::prelude::*;
use reactive_graph::owner::LocalStorage;
use unic_langid::LanguageIdentifier;

const FR_FTL: &str = include_str!("locales/fr.ftl");
const EN_FTL: &str = include_str!("locales/en.ftl");

/// Supported locales. French first: it is the product's default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    Fr,
    En,
}

impl Locale {
    pub fn lang_id(&self) -> LanguageIdentifier {
        match self {
            Locale::Fr => "fr".parse().expect("valid language id"),
            Locale::En => "en".parse().expect("valid language id"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::Fr => "FR",
            Locale::En => "EN",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::Fr, Locale::En]
    }

    fn ftl_source(&self) -> &'static str {
        match self {
            Locale::Fr => FR_FTL,
            Locale::En => EN_FTL,
        }
    }
}

/// Translation store holding one Fluent bundle per locale.
pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl I18n {
    pub fn new() -> Self {
        let mut bundles = HashMap::new();
        for loc in Locale::all() {
            let resource = FluentResource::try_new(loc.ftl_source().to_string())
                .expect("Failed to parse FTL resource");
            let mut bundle = FluentBundle::new(vec![loc.lang_id()]);
            bundle
                .add_resource(resource)
                .expect("Failed to add FTL resource to bundle");
            bundles.insert(*loc, bundle);
        }
        Self { bundles }
    }

    /// Translate `key` in `locale`; unknown keys come back verbatim.
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        let Some(bundle) = self.bundles.get(&locale) else {
            return key.to_string();
        };
        let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) else {
            return key.to_string();
        };
        let mut errors = vec![];
        bundle.format_pattern(pattern, None, &mut errors).to_string()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

/// FluentBundle holds RefCells, so the store lives in local (non-Send)
/// storage. Safe: WASM is single-threaded.
type I18nStore = StoredValue<I18n, LocalStorage>;

/// Provide the i18n context. Call once at the top of `App`.
pub fn provide_i18n() {
    let (locale, set_locale) = signal(Locale::Fr);
    let store: I18nStore = StoredValue::new_local(I18n::new());
    provide_context(locale);
    provide_context(set_locale);
    provide_context(store);
}

/// Translated string for `key` in the current locale. Reads the locale
/// signal, so callers in reactive positions re-render on locale change.
pub fn t(key: &str) -> String {
    let locale: ReadSignal<Locale> = expect_context();
    let store: I18nStore = expect_context();
    let current = locale.get();
    store.with_value(|i18n| i18n.translate(current, key))
}
