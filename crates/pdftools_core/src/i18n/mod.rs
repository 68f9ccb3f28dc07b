//! Static English/Chinese string tables with `{{name}}` interpolation.
//!
//! Lookups fall back to English, then to the key itself. Placeholders without
//! a matching argument are left in place. Counts are substituted verbatim;
//! there is no plural handling.

mod en;
mod zh;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Accepts `en`, `zh` and region-qualified forms such as `zh-CN`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|locale| locale.code() == primary)
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => en::ENTRIES,
            Locale::Zh => zh::ENTRIES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw template for `key`, with English fallback.
pub fn template(locale: Locale, key: &str) -> Option<&'static str> {
    find(locale, key).or_else(|| find(Locale::En, key))
}

fn find(locale: Locale, key: &str) -> Option<&'static str> {
    locale
        .entries()
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// Looks up `key` and substitutes `{{name}}` placeholders from `args`.
pub fn translate(locale: Locale, key: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    match template(locale, key) {
        Some(template) => interpolate(template, args),
        None => key.to_string(),
    }
}

pub fn interpolate(template: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = after_open[..close].trim();
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }
    out.push_str(rest);
    out
}

/// Translator bound to the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.locale, key, &[])
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
        translate(self.locale, key, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chinese_key_exists_in_english() {
        for (key, _) in zh::ENTRIES {
            assert!(find(Locale::En, key).is_some(), "missing en key {key}");
        }
        for (key, _) in en::ENTRIES {
            assert!(find(Locale::Zh, key).is_some(), "missing zh key {key}");
        }
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        assert_eq!(interpolate("a {{b", &[("b", &1)]), "a {{b");
    }
}
