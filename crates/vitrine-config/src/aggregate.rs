/*
 * aggregate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The record-to-configuration reducer.

use serde::de::DeserializeOwned;

use crate::keys::SettingKey;
use crate::types::{SettingRecord, SiteConfig};

/// Merge raw setting records into one complete [`SiteConfig`].
///
/// Records may arrive in any order, be incomplete, or contain duplicate
/// keys. The reducer starts from [`SiteConfig::default`] and overrides each
/// key with its successfully deserialized record in encounter order, so the
/// last well-formed record for a key wins. A record whose key is
/// unrecognized or whose value fails to deserialize is logged and skipped;
/// it never affects sibling keys.
///
/// Pure with respect to its inputs: the same record list always produces
/// the same aggregate.
pub fn aggregate(records: &[SettingRecord]) -> SiteConfig {
    let mut config = SiteConfig::default();

    for record in records {
        let key: SettingKey = match record.key.parse() {
            Ok(key) => key,
            Err(_) => {
                tracing::warn!(key = %record.key, "skipping unrecognized setting key");
                continue;
            }
        };

        match key {
            SettingKey::Store => merge_into(key, &record.value, &mut config.store),
            SettingKey::Theme => merge_into(key, &record.value, &mut config.theme),
            SettingKey::Hero => merge_into(key, &record.value, &mut config.hero),
            SettingKey::Features => merge_into(key, &record.value, &mut config.features),
            SettingKey::Seo => merge_into(key, &record.value, &mut config.seo),
            SettingKey::Contact => merge_into(key, &record.value, &mut config.contact),
            SettingKey::Social => merge_into(key, &record.value, &mut config.social),
        }
    }

    config
}

/// Replace `slot` with the parsed record value, keeping the prior value on
/// deserialization failure.
fn merge_into<T: DeserializeOwned>(key: SettingKey, raw: &str, slot: &mut T) {
    match serde_json::from_str(raw) {
        Ok(value) => *slot = value,
        Err(error) => {
            tracing::warn!(key = %key, %error, "failed to parse setting record, keeping default");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_records_yield_defaults() {
        let config = aggregate(&[]);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_every_key_present_for_any_subset() {
        let records = vec![SettingRecord::new(
            "theme",
            r##"{"primary_color": "#667eea"}"##,
        )];
        let config = aggregate(&records);

        // overridden key
        assert_eq!(config.theme.primary_color, "#667eea");
        // untouched keys hold their defaults
        assert_eq!(config.store, Default::default());
        assert_eq!(config.seo, Default::default());
        assert_eq!(config.contact, Default::default());
    }

    #[test]
    fn test_malformed_record_falls_back_without_affecting_siblings() {
        let records = vec![
            SettingRecord::new("theme", "{not json"),
            SettingRecord::new("store", r#"{"name": "Atelier"}"#),
        ];
        let config = aggregate(&records);

        assert_eq!(config.theme, Default::default());
        assert_eq!(config.store.name, "Atelier");
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let records = vec![
            SettingRecord::new("store", r#"{"name": "First"}"#),
            SettingRecord::new("store", r#"{"name": "Second"}"#),
        ];
        assert_eq!(aggregate(&records).store.name, "Second");
    }

    #[test]
    fn test_duplicate_with_malformed_keeps_earlier_value() {
        let records = vec![
            SettingRecord::new("store", r#"{"name": "Kept"}"#),
            SettingRecord::new("store", "oops"),
        ];
        assert_eq!(aggregate(&records).store.name, "Kept");
    }

    #[test]
    fn test_unrecognized_key_is_skipped() {
        let records = vec![
            SettingRecord::new("banner", r#"{"text": "hello"}"#),
            SettingRecord::new("contact", r#"{"email": "hi@example.com"}"#),
        ];
        let config = aggregate(&records);
        assert_eq!(config.contact.email, "hi@example.com");
    }

    #[test]
    fn test_deterministic() {
        let records = vec![
            SettingRecord::new("seo", r#"{"title": "Shop"}"#),
            SettingRecord::new("social", r#"{"facebook": "https://facebook.com/shop"}"#),
        ];
        assert_eq!(aggregate(&records), aggregate(&records));
    }
}
