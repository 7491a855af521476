// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Platform settings
//!
//! Serialization preferences of one formatting session, bound to a shared
//! [`Platform`]. A settings value has a single owner and is changed between
//! uses; it is never shared across concurrent formatting.

use crate::charset::Charset;
use crate::error::PlatformResult;
use crate::platform::Platform;
use crate::sql_mode::SqlMode;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PlatformSettings {
    platform: Arc<Platform>,
    delimiter: String,
    charset: Option<Charset>,
    mode: SqlMode,
    quote_all_names: bool,
    canonicalize_types: bool,
    verbose_output: bool,
    optional_equals: bool,
}

impl PlatformSettings {
    /// Settings with the defaults: `;` delimiter, no charset, the platform's
    /// default mode, every name quoted, canonical types, terse output and
    /// optional `=` signs written
    pub fn new(platform: Arc<Platform>) -> Self {
        let mode = platform.default_mode();
        Self {
            platform,
            delimiter: ";".to_string(),
            charset: None,
            mode,
            quote_all_names: true,
            canonicalize_types: true,
            verbose_output: false,
            optional_equals: true,
        }
    }

    pub fn platform(&self) -> &Arc<Platform> {
        &self.platform
    }

    /// Statement delimiter
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Connection charset
    pub fn charset(&self) -> Option<Charset> {
        self.charset
    }

    pub fn mode(&self) -> SqlMode {
        self.mode
    }

    pub fn quote_all_names(&self) -> bool {
        self.quote_all_names
    }

    pub fn canonicalize_types(&self) -> bool {
        self.canonicalize_types
    }

    pub fn verbose_output(&self) -> bool {
        self.verbose_output
    }

    pub fn optional_equals(&self) -> bool {
        self.optional_equals
    }

    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.delimiter = delimiter.into();
    }

    pub fn set_charset(&mut self, charset: Option<Charset>) {
        self.charset = charset;
    }

    pub fn set_mode(&mut self, mode: SqlMode) {
        self.mode = mode;
    }

    /// Set the mode from its text form; `DEFAULT` is the platform default
    pub fn set_mode_text(&mut self, text: &str) -> PlatformResult<()> {
        self.mode = SqlMode::from_string(text, &self.platform)?;
        Ok(())
    }

    pub fn set_quote_all_names(&mut self, quote_all_names: bool) {
        self.quote_all_names = quote_all_names;
    }

    pub fn set_canonicalize_types(&mut self, canonicalize_types: bool) {
        self.canonicalize_types = canonicalize_types;
    }

    pub fn set_verbose_output(&mut self, verbose_output: bool) {
        self.verbose_output = verbose_output;
    }

    pub fn set_optional_equals(&mut self, optional_equals: bool) {
        self.optional_equals = optional_equals;
    }

    /// Builder method: set delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.set_delimiter(delimiter);
        self
    }

    /// Builder method: set charset
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    /// Builder method: set mode
    pub fn with_mode(mut self, mode: SqlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: set quote_all_names
    pub fn with_quote_all_names(mut self, quote_all_names: bool) -> Self {
        self.quote_all_names = quote_all_names;
        self
    }

    /// Builder method: set canonicalize_types
    pub fn with_canonicalize_types(mut self, canonicalize_types: bool) -> Self {
        self.canonicalize_types = canonicalize_types;
        self
    }

    /// Builder method: set verbose_output
    pub fn with_verbose_output(mut self, verbose_output: bool) -> Self {
        self.verbose_output = verbose_output;
        self
    }

    /// Builder method: set optional_equals
    pub fn with_optional_equals(mut self, optional_equals: bool) -> Self {
        self.optional_equals = optional_equals;
        self
    }
}
