/*
 * theme.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Theme synchronizer: theme config → style variables.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use vitrine_config::ThemeConfig;

use crate::sink::PresentationSink;

/// Font names served from the sans-serif stack.
///
/// Everything outside this set falls back to serif. A lookup against a
/// fixed small set, not a general taxonomy.
static SANS_FONTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["Inter", "Poppins", "Montserrat"]));

/// Build the `--font-main` stack for a font name: the quoted name plus its
/// generic fallback family.
pub fn font_stack(name: &str) -> String {
    if SANS_FONTS.contains(name) {
        format!("\"{name}\", sans-serif")
    } else {
        format!("\"{name}\", serif")
    }
}

/// Project the theme onto the sink's style variables.
///
/// Each present, non-empty field sets its variable; empty fields are left
/// at their prior value (no reset-to-blank). Idempotent: applying an
/// unchanged theme mutates nothing, because the sink diffs before writing.
pub fn apply_theme(theme: &ThemeConfig, sink: &mut dyn PresentationSink) {
    set_nonempty(sink, "--theme-primary", &theme.primary_color);
    set_nonempty(sink, "--theme-secondary", &theme.secondary_color);
    set_nonempty(sink, "--theme-accent", &theme.accent_color);
    set_nonempty(sink, "--theme-radius", &theme.border_radius);
    if !theme.font_family.is_empty() {
        sink.set_style_var("--font-main", &font_stack(&theme.font_family));
    }
}

fn set_nonempty(sink: &mut dyn PresentationSink, name: &str, value: &str) {
    if !value.is_empty() {
        sink.set_style_var(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::DocumentHead;
    use pretty_assertions::assert_eq;

    fn theme() -> ThemeConfig {
        ThemeConfig {
            primary_color: "#667eea".into(),
            secondary_color: "#16213e".into(),
            accent_color: "#e94560".into(),
            font_family: "Poppins".into(),
            border_radius: "0.25rem".into(),
        }
    }

    #[test]
    fn test_font_stack_classification() {
        assert_eq!(font_stack("Poppins"), "\"Poppins\", sans-serif");
        assert_eq!(font_stack("Inter"), "\"Inter\", sans-serif");
        assert_eq!(font_stack("Georgia"), "\"Georgia\", serif");
        assert_eq!(font_stack("Playfair Display"), "\"Playfair Display\", serif");
    }

    #[test]
    fn test_apply_sets_all_variables() {
        let mut head = DocumentHead::new();
        apply_theme(&theme(), &mut head);

        assert_eq!(head.style_var("--theme-primary"), Some("#667eea"));
        assert_eq!(head.style_var("--theme-secondary"), Some("#16213e"));
        assert_eq!(head.style_var("--theme-accent"), Some("#e94560"));
        assert_eq!(head.style_var("--theme-radius"), Some("0.25rem"));
        assert_eq!(head.style_var("--font-main"), Some("\"Poppins\", sans-serif"));
    }

    #[test]
    fn test_reapply_is_idempotent() {
        let mut head = DocumentHead::new();
        apply_theme(&theme(), &mut head);
        let after_first = head.mutations();

        apply_theme(&theme(), &mut head);
        apply_theme(&theme(), &mut head);
        assert_eq!(head.mutations(), after_first);
    }

    #[test]
    fn test_empty_field_keeps_prior_value() {
        let mut head = DocumentHead::new();
        apply_theme(&theme(), &mut head);

        let sparse = ThemeConfig {
            primary_color: String::new(),
            secondary_color: String::new(),
            accent_color: "#ff8800".into(),
            font_family: String::new(),
            border_radius: String::new(),
        };
        apply_theme(&sparse, &mut head);

        // updated field
        assert_eq!(head.style_var("--theme-accent"), Some("#ff8800"));
        // empty fields did not blank anything
        assert_eq!(head.style_var("--theme-primary"), Some("#667eea"));
        assert_eq!(head.style_var("--font-main"), Some("\"Poppins\", sans-serif"));
    }
}
