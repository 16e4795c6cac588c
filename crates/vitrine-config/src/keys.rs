/*
 * keys.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The closed set of recognized configuration keys.

use std::str::FromStr;

use thiserror::Error;

/// A recognized site-configuration key.
///
/// Records are stored and fetched independently per key; no ordering or
/// co-transactionality across keys is guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Store,
    Theme,
    Hero,
    Features,
    Seo,
    Contact,
    Social,
}

impl SettingKey {
    /// The key as it appears in stored records.
    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::Store => "store",
            SettingKey::Theme => "theme",
            SettingKey::Hero => "hero",
            SettingKey::Features => "features",
            SettingKey::Seo => "seo",
            SettingKey::Contact => "contact",
            SettingKey::Social => "social",
        }
    }

    /// All recognized keys.
    pub fn all() -> &'static [SettingKey] {
        &[
            SettingKey::Store,
            SettingKey::Theme,
            SettingKey::Hero,
            SettingKey::Features,
            SettingKey::Seo,
            SettingKey::Contact,
            SettingKey::Social,
        ]
    }
}

impl FromStr for SettingKey {
    type Err = SettingKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "store" => Ok(SettingKey::Store),
            "theme" => Ok(SettingKey::Theme),
            "hero" => Ok(SettingKey::Hero),
            "features" => Ok(SettingKey::Features),
            "seo" => Ok(SettingKey::Seo),
            "contact" => Ok(SettingKey::Contact),
            "social" => Ok(SettingKey::Social),
            _ => Err(SettingKeyError::Unrecognized(s.to_string())),
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors produced when interpreting a setting key.
#[derive(Debug, Clone, Error)]
pub enum SettingKeyError {
    #[error("unrecognized setting key: {0}")]
    Unrecognized(String),
}
