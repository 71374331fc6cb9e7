//! Channel name formatting for radios with short displays

use crate::core::diagnostics::Diagnostic;
use crate::types::NameFormatPolicy;

/// Words dropped from names to save display space
const DROPPED_WORDS: [&str; 2] = ["Cnty ", "County "];

/// Format a channel name under `policy`. Empty names stay empty.
///
/// A trailing lowercase letter marks a sub-channel (`K6SNYr`) and gets split off
/// with a space. Hyphens, then spaces, are removed while the name is too long.
pub fn normalize_name(
    name: &str,
    policy: NameFormatPolicy,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let mut answer = name.to_string();
    for word in DROPPED_WORDS {
        answer = answer.replace(word, "");
    }
    let mut answer = answer.trim().to_string();
    if answer.is_empty() {
        return answer;
    }

    // Must run before upper-casing
    split_sub_channel_suffix(&mut answer);

    let max_length = policy.max_length();
    if char_len(&answer) > max_length {
        answer.retain(|c| c != '-');
    }
    if char_len(&answer) > max_length {
        answer.retain(|c| c != ' ');
    }
    let mut too_long = char_len(&answer) > max_length;
    if too_long {
        warn_too_long(&answer, max_length, diagnostics);
    }

    if policy.force_upper_case() {
        answer = answer.to_uppercase();
        // Case folding can grow a name (ß -> SS)
        if !too_long && char_len(&answer) > max_length {
            too_long = true;
            warn_too_long(&answer, max_length, diagnostics);
        }
    }
    tracing::trace!(name = %answer, too_long, "normalized name");
    answer
}

fn warn_too_long(name: &str, max_length: usize, diagnostics: &mut Vec<Diagnostic>) {
    tracing::warn!(name, max_length, "channel name too long");
    diagnostics.push(Diagnostic::NameTooLong {
        name: name.to_string(),
        length: char_len(name),
        max_length,
    });
}

fn split_sub_channel_suffix(name: &mut String) {
    let mut chars = name.char_indices().rev();
    let split_at = match (chars.next(), chars.next()) {
        (Some((idx, last)), Some(_)) if last.is_lowercase() => Some(idx),
        _ => None,
    };
    if let Some(idx) = split_at {
        name.insert(idx, ' ');
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str, policy: NameFormatPolicy) -> String {
        normalize_name(text, policy, &mut Vec::new())
    }

    #[test]
    fn test_empty_name() {
        for policy in [
            NameFormatPolicy::Default,
            NameFormatPolicy::Loose,
            NameFormatPolicy::Strict,
        ] {
            assert_eq!(name("", policy), "");
            assert_eq!(name("   ", policy), "");
        }
    }

    #[test]
    fn test_hyphen_kept_when_it_fits() {
        assert_eq!(name("W1XSC-1", NameFormatPolicy::Default), "W1XSC-1");
        assert_eq!(name("W1XSC-1", NameFormatPolicy::Loose), "W1XSC-1");
    }

    #[test]
    fn test_hyphen_stripped_when_too_long() {
        assert_eq!(name("W1XSCC-1", NameFormatPolicy::Default), "W1XSCC1");
        assert_eq!(name("W1XSCC-1", NameFormatPolicy::Loose), "W1XSCC-1");
    }

    #[test]
    fn test_sub_channel_suffix() {
        assert_eq!(name("K6SNYr", NameFormatPolicy::Default), "K6SNY R");
        assert_eq!(name("K6SNYr", NameFormatPolicy::Loose), "K6SNY r");
        assert_eq!(name("K6SNYr", NameFormatPolicy::Strict), "K6SNYR");
        assert_eq!(name("LOSa", NameFormatPolicy::Default), "LOS A");
        assert_eq!(name("LOSa", NameFormatPolicy::Loose), "LOS a");
    }

    #[test]
    fn test_space_removed_when_suffix_overflows() {
        assert_eq!(name("KI6SNYr", NameFormatPolicy::Default), "KI6SNYR");
        assert_eq!(name("KI6SNYr", NameFormatPolicy::Loose), "KI6SNY r");
    }

    #[test]
    fn test_county_words_dropped() {
        assert_eq!(name("Marin County EOC", NameFormatPolicy::Default), "MARINEOC");
        assert_eq!(name("Cnty EOC", NameFormatPolicy::Default), "EOC");
        // Case-sensitive match
        assert_eq!(name("cnty EOC", NameFormatPolicy::Loose), "cnty EOC");
    }

    #[test]
    fn test_single_lowercase_letter_untouched() {
        assert_eq!(name("a", NameFormatPolicy::Loose), "a");
    }

    #[test]
    fn test_too_long_warns_but_keeps_name() {
        let mut diagnostics = Vec::new();
        let result = normalize_name("SARES-TAC 12", NameFormatPolicy::Strict, &mut diagnostics);
        assert_eq!(result, "SARESTAC12");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::NameTooLong {
                name: "SARESTAC12".to_string(),
                length: 10,
                max_length: 6,
            }]
        );
    }

    #[test]
    fn test_upper_casing_that_grows_name_warns() {
        let mut diagnostics = Vec::new();
        let result = normalize_name("Straße", NameFormatPolicy::Default, &mut diagnostics);
        assert_eq!(result, "STRASS E");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::NameTooLong {
                name: "STRASS E".to_string(),
                length: 8,
                max_length: 7,
            }]
        );
    }

    #[test]
    fn test_long_name_warned_once_after_upper_casing() {
        let mut diagnostics = Vec::new();
        normalize_name("Großstraße", NameFormatPolicy::Strict, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_mixed_case_word() {
        // Any trailing lowercase letter is split off, even in ordinary words
        assert_eq!(name("Simplex", NameFormatPolicy::Loose), "Simple x");
        assert_eq!(name("Simplex", NameFormatPolicy::Default), "SIMPLEX");
        assert_eq!(name("EOC", NameFormatPolicy::Loose), "EOC");
    }
}
