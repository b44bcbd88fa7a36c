//! `SupportedLocales` source rendering.
//!
//! The generated module carries the tag list, the endonym map and the exonym
//! matrix as private data behind four accessors, plus a fixed "tag not found"
//! error. Kotlin output targets the Android app itself; Rust output is for
//! `build.rs` pipelines that `include!` the file.

use crate::error::{ConfigError, TAG_NOT_FOUND_MESSAGE};
use crate::generate::ExonymMatrix;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Name of the generated type.
pub const OUTPUT_CLASS_NAME: &str = "SupportedLocales";

/// Package the Kotlin class is generated into unless configured otherwise.
pub const DEFAULT_SOURCE_PACKAGE: &str = "com.mermake.locale_resources";

const GENERATED_HEADER: &str = "Generated by locale-resource-generator. Do not edit.";

/// Language of the generated module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceLanguage {
    #[default]
    Kotlin,
    Rust,
}

impl FromStr for SourceLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kotlin" | "kt" => Ok(SourceLanguage::Kotlin),
            "rust" | "rs" => Ok(SourceLanguage::Rust),
            _ => Err(ConfigError::InvalidValue {
                key: "GENERATED_SOURCE_LANGUAGE",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLanguage::Kotlin => f.write_str("kotlin"),
            SourceLanguage::Rust => f.write_str("rust"),
        }
    }
}

/// A rendered source file, relative to the variant's source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub relative_path: PathBuf,
    pub content: String,
}

/// Render `SupportedLocales` for the matrix.
///
/// `package` is the Kotlin package; Rust output ignores it.
pub fn render_supported_locales(
    matrix: &ExonymMatrix,
    language: SourceLanguage,
    package: &str,
) -> GeneratedSource {
    match language {
        SourceLanguage::Kotlin => {
            let mut relative_path: PathBuf = package.split('.').collect();
            relative_path.push(format!("{}.kt", OUTPUT_CLASS_NAME));
            GeneratedSource {
                relative_path,
                content: render_kotlin(matrix, package),
            }
        }
        SourceLanguage::Rust => GeneratedSource {
            relative_path: PathBuf::from("supported_locales.rs"),
            content: render_rust(matrix),
        },
    }
}

// ==================== Kotlin ====================

fn kotlin_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `call(` + one item per line + `)`, or `call()` when empty.
fn kotlin_call(call: &str, items: Vec<String>, indent: &str) -> String {
    if items.is_empty() {
        return format!("{}()", call);
    }
    let inner = format!("{}    ", indent);
    let lines: Vec<String> = items
        .into_iter()
        .map(|item| format!("{}{}", inner, item))
        .collect();
    format!("{}(\n{}\n{})", call, lines.join(",\n"), indent)
}

fn kotlin_pairs<'a, I>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{} to {}", kotlin_string(key), kotlin_string(value)))
        .collect()
}

fn render_kotlin(matrix: &ExonymMatrix, package: &str) -> String {
    let indent = "    ";

    let tags = kotlin_call(
        "listOf",
        matrix.tags().iter().map(|tag| kotlin_string(tag)).collect(),
        indent,
    );
    let endonyms = kotlin_call("mapOf", kotlin_pairs(matrix.endonyms()), indent);
    let rows: Vec<String> = matrix
        .rows()
        .iter()
        .map(|(tag, row)| {
            format!(
                "{} to {}",
                kotlin_string(tag),
                kotlin_call("mapOf", kotlin_pairs(row), "        ")
            )
        })
        .collect();
    let exonyms = kotlin_call("mapOf", rows, indent);

    format!(
        r#"// {header}
package {package}

import java.util.Locale
import kotlin.NoSuchElementException
import kotlin.String
import kotlin.collections.List
import kotlin.collections.Map

/**
 * Generated class containing the locales supported by your project in the form of list and maps.
 * Language tags and their corresponding names (endonyms and exonyms) are retrievable through public functions.
 */
public class {class} {{
    private val tags: List<String> = {tags}

    private val endonyms: Map<String, String> = {endonyms}

    private val exonyms: Map<String, Map<String, String>> = {exonyms}

    private val errorTagNotFound: NoSuchElementException =
        NoSuchElementException({message})

    /**
     * @returns List of language tags supported by your project.
     */
    public fun getTags(): List<String> = tags

    /**
     * @returns Map of language tags and their written endonyms.
     * (Endonyms are the preferred name of a language as written in that language.)
     */
    public fun getEndonyms(): Map<String, String> = endonyms

    /**
     * @param languageTag a Unicode-formatted language tag in [String] form such as "en-US".
     * @returns Map of language tags and their written exonyms according to the resolved languageTag.
     * (Exonyms are the name of a language written in another language.)
     */
    public fun getExonyms(languageTag: String): Map<String, String> =
        exonyms[languageTag] ?: throw errorTagNotFound

    /**
     * @param locale a Java [Locale] object.
     * @returns Map of language tags and their written exonyms according to the resolved locale.
     * (Exonyms are the name of a language written in another language.)
     */
    public fun getExonyms(locale: Locale): Map<String, String> =
        exonyms[locale.toLanguageTag()] ?: throw errorTagNotFound
}}
"#,
        header = GENERATED_HEADER,
        package = package,
        class = OUTPUT_CLASS_NAME,
        tags = tags,
        endonyms = endonyms,
        exonyms = exonyms,
        message = kotlin_string(TAG_NOT_FOUND_MESSAGE),
    )
}

// ==================== Rust ====================

/// Rust string literal; `Debug` output for `str` is valid Rust source.
fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_pairs<'a, I>(pairs: I, indent: &str) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}({}, {}),\n", indent, rust_string(key), rust_string(value)))
        .collect()
}

fn render_rust(matrix: &ExonymMatrix) -> String {
    let tags: String = matrix
        .tags()
        .iter()
        .map(|tag| format!("    {},\n", rust_string(tag)))
        .collect();
    let endonyms = rust_pairs(matrix.endonyms(), "    ");
    let exonyms: String = matrix
        .rows()
        .iter()
        .map(|(tag, row)| {
            format!(
                "    (\n        {},\n        &[\n{}        ],\n    ),\n",
                rust_string(tag),
                rust_pairs(row, "            ")
            )
        })
        .collect();

    format!(
        r#"// {header}
//
// Tags are sorted, so lookups binary-search.

/// Returned when a language tag is not one of the supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagNotFound;

impl TagNotFound {{
    pub const MESSAGE: &'static str = {message};
}}

impl ::core::fmt::Display for TagNotFound {{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {{
        f.write_str(Self::MESSAGE)
    }}
}}

impl ::std::error::Error for TagNotFound {{}}

const TAGS: &[&str] = &[
{tags}];

const ENDONYMS: &[(&str, &str)] = &[
{endonyms}];

const EXONYMS: &[(&str, &[(&str, &str)])] = &[
{exonyms}];

/// The locales supported by this project, with their endonyms and exonyms.
pub struct {class};

impl {class} {{
    /// Language tags supported by this project.
    pub fn tags() -> &'static [&'static str] {{
        TAGS
    }}

    /// Language tags paired with their endonyms (the language's name in itself).
    pub fn endonyms() -> &'static [(&'static str, &'static str)] {{
        ENDONYMS
    }}

    /// Language tags paired with their names as written in `language_tag`'s language.
    pub fn exonyms(
        language_tag: &str,
    ) -> Result<&'static [(&'static str, &'static str)], TagNotFound> {{
        EXONYMS
            .binary_search_by(|(tag, _)| (*tag).cmp(language_tag))
            .map(|index| EXONYMS[index].1)
            .map_err(|_| TagNotFound)
    }}

    /// Same as [`exonyms`](Self::exonyms) for any locale that displays as a language tag.
    pub fn exonyms_for_locale<L: ::core::fmt::Display + ?Sized>(
        locale: &L,
    ) -> Result<&'static [(&'static str, &'static str)], TagNotFound> {{
        Self::exonyms(&locale.to_string())
    }}
}}
"#,
        header = GENERATED_HEADER,
        message = rust_string(TAG_NOT_FOUND_MESSAGE),
        class = OUTPUT_CLASS_NAME,
        tags = tags,
        endonyms = endonyms,
        exonyms = exonyms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{resolve_endonyms, sample_registry};

    fn matrix(tags: &[&str]) -> ExonymMatrix {
        let data = sample_registry();
        ExonymMatrix::build(&data, &resolve_endonyms(&data, tags))
    }

    // ==================== SourceLanguage Tests ====================

    #[test]
    fn test_source_language_from_str() {
        assert_eq!("kotlin".parse::<SourceLanguage>(), Ok(SourceLanguage::Kotlin));
        assert_eq!("Rust".parse::<SourceLanguage>(), Ok(SourceLanguage::Rust));
        assert!("java".parse::<SourceLanguage>().is_err());
    }

    #[test]
    fn test_source_language_default_is_kotlin() {
        assert_eq!(SourceLanguage::default(), SourceLanguage::Kotlin);
        assert_eq!(SourceLanguage::Kotlin.to_string(), "kotlin");
    }

    // ==================== Kotlin Tests ====================

    #[test]
    fn test_kotlin_path_follows_package() {
        let source = render_supported_locales(
            &matrix(&["en-US"]),
            SourceLanguage::Kotlin,
            DEFAULT_SOURCE_PACKAGE,
        );
        assert_eq!(
            source.relative_path,
            PathBuf::from("com/mermake/locale_resources/SupportedLocales.kt")
        );
        assert!(source
            .content
            .contains("package com.mermake.locale_resources\n"));
    }

    #[test]
    fn test_kotlin_contains_data_and_accessors() {
        let source = render_supported_locales(
            &matrix(&["en-US", "fr-FR"]),
            SourceLanguage::Kotlin,
            DEFAULT_SOURCE_PACKAGE,
        )
        .content;

        assert!(source.contains("public class SupportedLocales {"));
        assert!(source.contains("        \"en-US\",\n        \"fr-FR\"\n"));
        assert!(source.contains("\"fr-FR\" to \"français (France)\""));
        assert!(source.contains("\"fr-FR\" to \"French (France)\""));
        assert!(source.contains("\"en-US\" to \"anglais (États-Unis)\""));
        assert!(source.contains("public fun getTags(): List<String> = tags"));
        assert!(source.contains("public fun getEndonyms(): Map<String, String> = endonyms"));
        assert!(source.contains("exonyms[languageTag] ?: throw errorTagNotFound"));
        assert!(source.contains("exonyms[locale.toLanguageTag()] ?: throw errorTagNotFound"));
        assert!(source.contains(&kotlin_string(TAG_NOT_FOUND_MESSAGE)));
    }

    #[test]
    fn test_kotlin_empty_matrix() {
        let source = render_supported_locales(&matrix(&[]), SourceLanguage::Kotlin, "a.b").content;
        assert!(source.contains("private val tags: List<String> = listOf()"));
        assert!(source.contains("private val endonyms: Map<String, String> = mapOf()"));
        assert!(source.contains("private val exonyms: Map<String, Map<String, String>> = mapOf()"));
    }

    #[test]
    fn test_kotlin_string_escaping() {
        assert_eq!(kotlin_string(r#"a"b"#), r#""a\"b""#);
        assert_eq!(kotlin_string("$x"), r#""\$x""#);
        assert_eq!(kotlin_string("a\\b"), r#""a\\b""#);
    }

    // ==================== Rust Tests ====================

    #[test]
    fn test_rust_output() {
        let source =
            render_supported_locales(&matrix(&["fr-FR", "en-US"]), SourceLanguage::Rust, "ignored");

        assert_eq!(source.relative_path, PathBuf::from("supported_locales.rs"));
        let content = source.content;
        assert!(content.contains("const TAGS: &[&str] = &[\n    \"en-US\",\n    \"fr-FR\",\n];"));
        assert!(content.contains("(\"fr-FR\", \"français (France)\"),"));
        assert!(content.contains("pub struct SupportedLocales;"));
        assert!(content.contains("pub fn exonyms_for_locale"));
        assert!(content.contains(&rust_string(TAG_NOT_FOUND_MESSAGE)));
    }

    #[test]
    fn test_rust_rows_are_sorted_for_binary_search() {
        let content = render_supported_locales(
            &matrix(&["ja-JP", "de-DE", "en-US"]),
            SourceLanguage::Rust,
            "",
        )
        .content;
        let de = content.find("        \"de-DE\",\n        &[").unwrap();
        let en = content.find("        \"en-US\",\n        &[").unwrap();
        let ja = content.find("        \"ja-JP\",\n        &[").unwrap();
        assert!(de < en && en < ja);
    }

    #[test]
    fn test_rust_empty_matrix() {
        let content = render_supported_locales(&matrix(&[]), SourceLanguage::Rust, "").content;
        assert!(content.contains("const TAGS: &[&str] = &[\n];"));
        assert!(content.contains("const EXONYMS: &[(&str, &[(&str, &str)])] = &[\n];"));
    }

    #[test]
    fn test_rust_string_escaping() {
        assert_eq!(rust_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(rust_string("français"), "\"français\"");
    }
}
