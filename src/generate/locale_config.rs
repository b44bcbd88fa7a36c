//! `locale_config.xml` rendering.
//!
//! The document is referenced from the Android manifest
//! (`android:localeConfig="@xml/locale_config"`) to declare per-app language
//! support.

use crate::i18n::TaggedEndonym;

/// Namespace prefix for the `name` attribute.
pub const ANDROID_NAMESPACE_PREFIX: &str = "android";

/// Namespace URI bound to [`ANDROID_NAMESPACE_PREFIX`].
pub const ANDROID_NAMESPACE_URI: &str = "http://schemas.android.com/apk/res/android";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const ROOT_ELEMENT: &str = "locale-config";
const INDENT: &str = "\t";

/// Render the config document: one commented `<locale>` entry per tag, in
/// the set's (tag-sorted) order.
pub fn render_locale_config<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a TaggedEndonym>,
{
    let root_open = format!(
        r#"<{} xmlns:{}="{}""#,
        ROOT_ELEMENT,
        ANDROID_NAMESPACE_PREFIX,
        escape_attribute(ANDROID_NAMESPACE_URI)
    );

    let mut body = String::new();
    for entry in entries {
        body.push_str(&format!("{}<!--{}-->\n", INDENT, escape_comment(&entry.endonym)));
        body.push_str(&format!(
            "{}<locale {}:name=\"{}\"/>\n",
            INDENT,
            ANDROID_NAMESPACE_PREFIX,
            escape_attribute(&entry.tag)
        ));
    }

    if body.is_empty() {
        format!("{}\n{}/>\n", XML_DECLARATION, root_open)
    } else {
        format!(
            "{}\n{}>\n{}</{}>\n",
            XML_DECLARATION, root_open, body, ROOT_ELEMENT
        )
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `--` may not appear inside a comment, nor may one end with `-`.
fn escape_comment(text: &str) -> String {
    let mut escaped = text.replace("--", "- -");
    if escaped.ends_with('-') {
        escaped.push(' ');
    }
    escaped
}
