//! Internationalization (i18n) support for `heatplan-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/heatplan-ui.ftl   (fallback/reference)
//!   es-ES/heatplan-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("app-title");
//! let tooltip = t!("heatmap-cell-title", date = label, count = 3);
//! ```
//!
//! To add a new locale, copy `en-US/heatplan-ui.ftl` into
//! `i18n/<lang-id>/heatplan-ui.ftl`, translate the values (keep IDs and
//! placeholders), then register it in `tests/i18n_missing_keys.rs`.
//!
//! Desktop builds ask the OS for preferred languages; web builds read
//! `navigator.languages`. Assets are always embedded on WASM.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("app-title")
///     t!("heatmap-cell-title", date = label, count = 2)
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "heatplan-ui";

/// Tag of the fallback locale.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select(&requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Load bundles for `requested` into the shared loader.
///
/// Tooltips and titles are plain attribute text, so bidi isolation marks around
/// arguments would leak into them. Isolation is a per-bundle setting and has to
/// be switched off again after every load.
fn select(requested: &[LanguageIdentifier]) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Switch language at runtime. Tags that fail to parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    select(&[lang])
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
