//! Name comparison used to order schema collections.
//!
//! Without any locale or collation option names are compared by code point,
//! which is stable across platforms. Supplying either switches to the
//! [Unicode Collation Algorithm][0] as tailored for the requested locale.
//!
//! [0]: https://unicode.org/reports/tr10/

use std::{cmp::Ordering, fmt};

use derive_more::with_trait::{Display, Error};
use icu_collator::{
    AlternateHandling, CaseFirst, CaseLevel, Collator, CollatorOptions, Numeric, Strength,
};
use icu_locid::{LanguageIdentifier, Locale};
use icu_locid_transform::{LocaleExpander, TransformResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Configuration of the name comparison.
///
/// Mirrors the shape of `Intl.Collator` arguments, so the same settings can be
/// loaded from JSON or TOML:
///
/// ```json
/// { "locales": "fr", "options": { "sensitivity": "accent", "numeric": true } }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    /// [BCP 47] language tags, in order of preference.
    ///
    /// Deserializes from either a single string or a list of strings.
    ///
    /// [BCP 47]: https://www.rfc-editor.org/info/bcp47
    #[serde(deserialize_with = "one_or_many")]
    pub locales: Vec<String>,

    /// Collation tuning.
    pub options: CollationOptions,
}

/// Collation tuning flags.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollationOptions {
    /// Which differences between letters make names compare unequal.
    pub sensitivity: Option<Sensitivity>,
    /// Whether digit sequences are compared by their numeric value, so that
    /// `item2` sorts before `item10`.
    pub numeric: Option<bool>,
    /// Whether upper or lower case sorts first.
    pub case_first: Option<CaseOrder>,
    /// Whether punctuation and whitespace are ignored.
    pub ignore_punctuation: Option<bool>,
}

/// Which differences between letters are significant.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Sensitivity {
    /// Only base letters differ: `a ≠ b`, `a = á`, `a = A`.
    Base,
    /// Base letters and accents differ: `a ≠ á`, `a = A`.
    Accent,
    /// Base letters and case differ: `a = á`, `a ≠ A`.
    Case,
    /// Everything differs: `a ≠ á`, `a ≠ A`.
    Variant,
}

/// Ordering of upper and lower case letters.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseOrder {
    /// Upper case letters first.
    Upper,
    /// Lower case letters first.
    Lower,
    /// The locale's default.
    False,
}

/// Error constructing a [`Comparator`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum CompareError {
    /// A locale is not a well-formed BCP 47 language tag.
    #[display("Incorrect locale information provided: \"{_0}\"")]
    InvalidLocale(#[error(not(source))] String),

    /// No collator could be built for the requested locale.
    #[display("Cannot collate names for locale \"{locale}\": {reason}")]
    Collator {
        /// Requested locale.
        #[error(not(source))]
        locale: String,
        /// What went wrong.
        #[error(not(source))]
        reason: String,
    },
}

/// Compares names according to some [`CompareOptions`].
pub struct Comparator {
    collator: Option<(Locale, Collator)>,
}

impl Comparator {
    /// Builds a [`Comparator`] ordering names by code point.
    pub fn code_point() -> Self {
        Self { collator: None }
    }

    /// Builds a [`Comparator`] out of the provided `options`.
    ///
    /// The first of the `locales` whose language is known is used, the same
    /// way `Intl.Collator` picks the first supported one. The root collation
    /// applies when none is known or only collation options are given.
    pub fn new(options: &CompareOptions) -> Result<Self, CompareError> {
        let locales = options
            .locales
            .iter()
            .map(|tag| {
                tag.parse::<Locale>()
                    .map_err(|_| CompareError::InvalidLocale(tag.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if locales.is_empty() && options.options == CollationOptions::default() {
            return Ok(Self::code_point());
        }

        let locale = negotiate_locale(locales);
        __lexsort_trace_debug!(locale = %locale, "building collator");
        let collator = Collator::try_new(&(&locale).into(), collator_options(options.options))
            .map_err(|e| CompareError::Collator {
                locale: locale.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            collator: Some((locale, collator)),
        })
    }

    /// Compares two names.
    ///
    /// Names the collator considers equal are ordered by code point, so the
    /// result is only [`Ordering::Equal`] for identical names.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some((_, collator)) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }

    /// Sorts `items` in place by the name `key` extracts.
    pub fn sort_by_name<T>(&self, items: &mut [T], key: impl Fn(&T) -> &str) {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::code_point()
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("locale", &self.collator.as_ref().map(|(l, _)| l))
            .finish_non_exhaustive()
    }
}

/// Picks the first of the `locales` having a known language.
fn negotiate_locale(mut locales: Vec<Locale>) -> Locale {
    if locales.is_empty() {
        return Locale::UND;
    }

    let expander = LocaleExpander::new_extended();
    match locales
        .iter()
        .position(|locale| is_known_language(&expander, locale))
    {
        Some(i) => locales.swap_remove(i),
        None => {
            __lexsort_trace_warn!(
                requested = locales.len(),
                "none of the requested locales is supported, using root collation"
            );
            Locale::UND
        }
    }
}

/// Checks whether the language of the `locale` has likely subtags, which is
/// the case for every language CLDR has data for.
fn is_known_language(expander: &LocaleExpander, locale: &Locale) -> bool {
    let mut language = LanguageIdentifier::from(locale.id.language);
    matches!(expander.maximize(&mut language), TransformResult::Modified)
}

fn collator_options(options: CollationOptions) -> CollatorOptions {
    let mut out = CollatorOptions::new();
    match options.sensitivity {
        Some(Sensitivity::Base) => out.strength = Some(Strength::Primary),
        Some(Sensitivity::Accent) => out.strength = Some(Strength::Secondary),
        Some(Sensitivity::Case) => {
            out.strength = Some(Strength::Primary);
            out.case_level = Some(CaseLevel::On);
        }
        Some(Sensitivity::Variant) => out.strength = Some(Strength::Tertiary),
        None => {}
    }
    if let Some(numeric) = options.numeric {
        out.numeric = Some(if numeric { Numeric::On } else { Numeric::Off });
    }
    if let Some(case_first) = options.case_first {
        out.case_first = Some(match case_first {
            CaseOrder::Upper => CaseFirst::UpperFirst,
            CaseOrder::Lower => CaseFirst::LowerFirst,
            CaseOrder::False => CaseFirst::Off,
        });
    }
    if options.ignore_punctuation == Some(true) {
        out.alternate_handling = Some(AlternateHandling::Shifted);
    }
    out
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(locale) => vec![locale],
        OneOrMany::Many(locales) => locales,
    })
}
