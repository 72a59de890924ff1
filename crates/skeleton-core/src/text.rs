//! Pure string transforms and in-place token substitution

use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;

/// Slugify a string: spaces become dashes, everything outside
/// `[A-Za-z0-9-]` is stripped, runs of dashes collapse to one, leading and
/// trailing dashes are trimmed, and the result is lowercased.
///
/// Total over any input; idempotent.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_dash = false;

    for ch in text.chars() {
        let ch = if ch == ' ' { '-' } else { ch };
        if ch == '-' {
            if !prev_dash {
                out.push('-');
                prev_dash = true;
            }
        } else if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            prev_dash = false;
        }
        // anything else is stripped without touching dash state
    }

    out.trim_matches('-').to_string()
}

/// Convert a string to camelCase: every dash or underscore followed by a
/// character is deleted and that character uppercased. A trailing separator
/// is kept as-is. `ucfirst` additionally uppercases the first character.
pub fn camel_case(text: &str, ucfirst: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if matches!(ch, '-' | '_') {
            match chars.next() {
                Some(next) => out.extend(next.to_uppercase()),
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }

    if ucfirst {
        let mut rest = out.chars();
        match rest.next() {
            Some(first) => first.to_uppercase().collect::<String>() + rest.as_str(),
            None => out,
        }
    } else {
        out
    }
}

/// Convert a string to kebab-case by inserting a dash after every letter
/// that is immediately followed by an uppercase letter, then lowercasing.
///
/// Note the rule only looks at the *next* character: digits and already
/// lowercase runs never introduce a boundary, so `HTTPServer` becomes
/// `h-t-t-p-server`, not `http-server`.
pub fn kebab_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        out.extend(ch.to_lowercase());
        if ch.is_ascii_alphabetic() {
            if let Some(next) = chars.peek() {
                if next.is_ascii_uppercase() {
                    out.push('-');
                }
            }
        }
    }

    out
}

/// Replace every literal occurrence of each token with its positionally
/// paired replacement in the file at `path`.
///
/// The whole file is read into memory and written back; there is no
/// atomic-write guarantee if the process is interrupted mid-write.
pub async fn replace_in_file(
    tokens: &[&str],
    replacements: &[&str],
    path: &Path,
) -> Result<(), ScaffoldError> {
    let mut content = fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    for (token, replacement) in tokens.iter().zip(replacements.iter()) {
        content = content.replace(token, replacement);
    }

    fs::write(path, content)
        .await
        .map_err(|source| ScaffoldError::Unwritable {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Cool Package!"), "my-cool-package");
        assert_eq!(slugify("Already-Slugged"), "already-slugged");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_strips_and_collapses() {
        assert_eq!(slugify("a ! b"), "a-b");
        assert_eq!(slugify("--weird--input--"), "weird-input");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in ["My Cool Package!", "a ! b", "UPPER case", "---", ""] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("my-cool-package", true), "MyCoolPackage");
        assert_eq!(camel_case("my_cool_package", false), "myCoolPackage");
        assert_eq!(camel_case("plain", true), "Plain");
        assert_eq!(camel_case("", true), "");
    }

    #[test]
    fn test_camel_case_trailing_separator() {
        // A separator with nothing after it has no character to uppercase
        assert_eq!(camel_case("dangling-", false), "dangling-");
    }

    #[test]
    fn test_kebab_case_documented_rule() {
        assert_eq!(kebab_case("MyCoolPackage"), "my-cool-package");
        // Boundary detection only looks at the next character
        assert_eq!(kebab_case("HTTPServer"), "h-t-t-p-server");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }

    #[tokio::test]
    async fn test_replace_in_file_substitutes_all_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LICENSE");
        tokio::fs::write(&path, "Copyright (c) :year :fullName\n:fullName again")
            .await
            .unwrap();

        replace_in_file(&[":year", ":fullName"], &["2025", "Jane Doe"], &path)
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "Copyright (c) 2025 Jane Doe\nJane Doe again");

        // Idempotent once no token remains
        replace_in_file(&[":year", ":fullName"], &["2025", "Jane Doe"], &path)
            .await
            .unwrap();
        let again = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(again, content);
    }

    #[tokio::test]
    async fn test_replace_in_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = replace_in_file(&[":a"], &["b"], &path).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Unreadable { .. }));
    }
}
