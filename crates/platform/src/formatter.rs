// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Formatter
//!
//! What a node needs to know to render itself as SQL for the active
//! platform: identifier quoting, string literal escaping, type spelling and
//! optional `=` signs. Whitespace and layout are left to the caller.

use crate::charset::Charset;
use crate::collation::Collation;
use crate::platform::Platform;
use crate::settings::PlatformSettings;
use crate::sql_mode::{ModeFlag, SqlMode};
use unified_sql_ir::BaseType;

/// Values that render themselves through a [`Formatter`]
pub trait SqlSerialize {
    fn serialize(&self, formatter: &Formatter<'_>) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    settings: &'a PlatformSettings,
}

impl<'a> Formatter<'a> {
    pub fn new(settings: &'a PlatformSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &'a PlatformSettings {
        self.settings
    }

    pub fn platform(&self) -> &'a Platform {
        self.settings.platform()
    }

    /// The active mode; flags are tested with group expansion applied
    pub fn mode(&self) -> SqlMode {
        self.settings.mode()
    }

    pub fn quote_char(&self) -> char {
        if self.mode().contains(ModeFlag::AnsiQuotes) {
            '"'
        } else {
            self.platform().naming_strategy().quote_char()
        }
    }

    /// Render an identifier, quoting it when needed or always
    pub fn format_name(&self, name: &str) -> String {
        let needs_quotes = self.settings.quote_all_names()
            || self.platform().is_reserved(name)
            || !is_plain_identifier(name);
        if !needs_quotes {
            return name.to_string();
        }

        let quote = self.quote_char();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(quote);
        for c in name.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
        out
    }

    /// Render a single-quoted string literal
    pub fn format_string(&self, value: &str) -> String {
        let escape_backslash = !self.mode().contains(ModeFlag::NoBackslashEscapes);
        let mut out = String::with_capacity(value.len() + 2);
        out.push('\'');
        for c in value.chars() {
            match c {
                '\'' => out.push_str("''"),
                '\\' if escape_backslash => out.push_str("\\\\"),
                c => out.push(c),
            }
        }
        out.push('\'');
        out
    }

    /// Type spelling, canonical when `canonicalize_types` is set
    pub fn format_type(&self, base_type: BaseType) -> &'static str {
        if self.settings.canonicalize_types() {
            base_type
                .canonical(self.mode().contains(ModeFlag::RealAsFloat))
                .as_str()
        } else {
            base_type.as_str()
        }
    }

    /// Separator between an option name and its value
    pub fn format_equals(&self) -> &'static str {
        if self.settings.optional_equals() {
            " = "
        } else {
            " "
        }
    }

    pub fn serialize<T: SqlSerialize + ?Sized>(&self, value: &T) -> String {
        value.serialize(self)
    }
}

/// Letters, digits, `_` and `$`, not all digits
fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !name.chars().all(|c| c.is_ascii_digit())
}

impl SqlSerialize for Charset {
    fn serialize(&self, _formatter: &Formatter<'_>) -> String {
        self.name().to_string()
    }
}

impl SqlSerialize for Collation {
    fn serialize(&self, _formatter: &Formatter<'_>) -> String {
        self.name.to_string()
    }
}

impl SqlSerialize for SqlMode {
    fn serialize(&self, formatter: &Formatter<'_>) -> String {
        formatter.format_string(&self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PlatformRegistry;

    fn settings(family: &str, version: &str) -> PlatformSettings {
        let registry = PlatformRegistry::new();
        PlatformSettings::new(registry.get(family, version).unwrap())
    }

    #[test]
    fn test_format_name() {
        let settings = settings("mysql", "8.0").with_quote_all_names(false);
        let f = Formatter::new(&settings);
        assert_eq!(f.format_name("orders"), "orders");
        assert_eq!(f.format_name("select"), "`select`");
        assert_eq!(f.format_name("my table"), "`my table`");
        assert_eq!(f.format_name("a`b"), "`a``b`");
        assert_eq!(f.format_name("123"), "`123`");

        let settings = settings.with_quote_all_names(true);
        assert_eq!(Formatter::new(&settings).format_name("orders"), "`orders`");
    }

    #[test]
    fn test_ansi_quotes() {
        let settings = settings("mysql", "8.0").with_mode(SqlMode::from(ModeFlag::Ansi));
        let f = Formatter::new(&settings);
        assert_eq!(f.quote_char(), '"');
        assert_eq!(f.format_name("orders"), "\"orders\"");
    }

    #[test]
    fn test_format_string() {
        let settings = settings("mysql", "8.0");
        let f = Formatter::new(&settings);
        assert_eq!(f.format_string("it's"), "'it''s'");
        assert_eq!(f.format_string("a\\b"), "'a\\\\b'");

        let settings = settings.with_mode(SqlMode::from(ModeFlag::NoBackslashEscapes));
        let f = Formatter::new(&settings);
        assert_eq!(f.format_string("a\\b"), "'a\\b'");
    }

    #[test]
    fn test_format_type_and_equals() {
        let settings = settings("mysql", "8.0");
        let f = Formatter::new(&settings);
        assert_eq!(f.format_type(BaseType::Integer), BaseType::Int.as_str());
        assert_eq!(f.format_type(BaseType::Real), BaseType::Double.as_str());
        assert_eq!(f.format_equals(), " = ");

        let settings = settings
            .with_canonicalize_types(false)
            .with_optional_equals(false);
        let f = Formatter::new(&settings);
        assert_eq!(f.format_type(BaseType::Integer), BaseType::Integer.as_str());
        assert_eq!(f.format_equals(), " ");

        let settings = settings.with_canonicalize_types(true).with_mode(SqlMode::from(ModeFlag::Ansi));
        let f = Formatter::new(&settings);
        assert_eq!(f.format_type(BaseType::Real), BaseType::Float.as_str());
    }

    #[test]
    fn test_serialize_values() {
        let settings = settings("mysql", "5.6");
        let f = Formatter::new(&settings);
        assert_eq!(f.serialize(&Charset::Latin1), "latin1");
        assert_eq!(f.serialize(&Collation::BINARY), "binary");
        assert_eq!(f.serialize(&settings.mode()), "'NO_ENGINE_SUBSTITUTION'");
    }
}
