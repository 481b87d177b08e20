//! URL slug normalization and validation.
//!
//! Slugs double as routing keys for boards and videos, so normalization must
//! be deterministic: the same title always yields the same slug, whether it
//! is derived at creation time or re-derived later. Titles mix Hangul,
//! Latin, and digits, so the allowed alphabet is wider than ASCII.

use crate::error::CoreError;

/// Precomposed Hangul syllables (U+AC00..=U+D7A3).
fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Normalize free text into a URL-safe slug.
///
/// - Lowercases the input.
/// - Strips every character that is not a Hangul syllable, lowercase ASCII
///   letter, ASCII digit, whitespace, or hyphen.
/// - Trims surrounding whitespace.
/// - Collapses whitespace runs and hyphen runs into a single hyphen.
/// - Trims leading/trailing hyphens.
///
/// Total and deterministic: any input maps to a slug, possibly empty.
/// Distinct titles may normalize to the same slug; uniqueness is enforced by
/// the database, not here.
///
/// # Examples
///
/// ```
/// use vodboard_core::slug::slugify;
///
/// assert_eq!(slugify("New Drama  EP 01"), "new-drama-ep-01");
/// assert_eq!(slugify("한국 드라마"), "한국-드라마");
/// assert_eq!(slugify("Movie!! (2024)"), "movie-2024");
/// ```
pub fn slugify(input: &str) -> String {
    let filtered: String = input
        .to_lowercase()
        .chars()
        .filter(|&c| {
            is_hangul_syllable(c)
                || c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c.is_whitespace()
                || c == '-'
        })
        .collect();

    // Map whitespace to hyphens, collapsing runs as we go.
    let mut slug = String::with_capacity(filtered.len());
    let mut prev_hyphen = false;
    for c in filtered.trim().chars() {
        let mapped = if c.is_whitespace() { '-' } else { c };
        if mapped == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(mapped);
            prev_hyphen = false;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Normalize an explicitly supplied slug, or derive one from the fallback
/// text (typically the entity's title) when none is given. Either source is
/// run through [`slugify`]; inputs that normalize to nothing are rejected.
pub fn derive_slug(explicit: Option<&str>, fallback: &str) -> Result<String, CoreError> {
    let source = match explicit {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback,
    };
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(CoreError::Validation(format!(
            "'{source}' does not yield a usable slug"
        )));
    }
    Ok(slug)
}

/// Validate an explicitly supplied slug (non-empty, only Hangul syllables,
/// lowercase ASCII alphanumerics, and hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| is_hangul_syllable(c) || c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only Hangul syllables, lowercase alphanumeric characters, and hyphens".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn keeps_hangul_syllables() {
        assert_eq!(slugify("한국 드라마 모음"), "한국-드라마-모음");
    }

    #[test]
    fn mixed_hangul_latin_numeric() {
        assert_eq!(slugify("드라마 EP 12"), "드라마-ep-12");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Movie!! (2024) #1"), "movie-2024-1");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("a   b\t c"), "a-b-c");
    }

    #[test]
    fn collapses_hyphen_runs() {
        assert_eq!(slugify("foo---bar"), "foo-bar");
        assert_eq!(slugify("foo - - bar"), "foo-bar");
    }

    #[test]
    fn trims_boundary_hyphens() {
        assert_eq!(slugify("-abc-"), "abc");
        assert_eq!(slugify("  --hello--  "), "hello");
    }

    #[test]
    fn empty_and_unusable_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!@#$%"), "");
    }

    #[test]
    fn idempotent() {
        for input in ["New Drama  EP 01", "한국 드라마", "--x--", "Ω漢字 mix"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "slugify must be idempotent for {input:?}");
        }
    }

    #[test]
    fn output_alphabet_property() {
        for input in ["  Crazy!! Title 99 ", "드라마--시즌 2", "\t-a  b-\n"] {
            let out = slugify(input);
            assert!(
                out.chars().all(|c| is_hangul_syllable(c)
                    || c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || c == '-'),
                "unexpected character in {out:?}"
            );
            assert!(!out.starts_with('-') && !out.ends_with('-'));
            assert!(!out.contains("--"));
        }
    }

    #[test]
    fn derive_prefers_explicit_slug() {
        assert_eq!(
            derive_slug(Some("My Slug"), "Fallback Title").unwrap(),
            "my-slug"
        );
        assert_eq!(
            derive_slug(None, "Fallback Title").unwrap(),
            "fallback-title"
        );
        // Blank explicit slug falls through to the title.
        assert_eq!(
            derive_slug(Some("   "), "Fallback Title").unwrap(),
            "fallback-title"
        );
    }

    #[test]
    fn derive_rejects_unusable_input() {
        assert!(derive_slug(None, "!!!").is_err());
        assert!(derive_slug(Some("???"), "").is_err());
    }

    #[test]
    fn validate_accepts_normalized_slugs() {
        assert!(validate_slug("new-drama-ep-01").is_ok());
        assert!(validate_slug("한국-드라마").is_ok());
    }

    #[test]
    fn validate_rejects_bad_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Hello-World").is_err());
        assert!(validate_slug("with space").is_err());
    }
}
