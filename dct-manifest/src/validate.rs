//! Validation of parsed configuration values.

use miette::SourceSpan;

use crate::{Config, Result, error::SourceContext};

/// C++ reserved keywords that cannot name a namespace or function
/// Source: https://en.cppreference.com/w/cpp/keyword
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

pub(crate) fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Validate a parsed configuration against its source text.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let layout = &config.layout;
    let source = &config.source;

    let values = [
        ("selftests", layout.selftests.as_str()),
        ("suffix", layout.suffix.as_str()),
        ("index", layout.index.as_str()),
        ("output", layout.output.as_str()),
        ("marker", source.marker.as_str()),
        ("header", source.header.as_str()),
        ("namespace", source.namespace.as_str()),
        ("function", source.function.as_str()),
    ];

    for (key, value) in values {
        if value.is_empty() {
            return Err(ctx.validation_error(
                format!("'{}' cannot be empty", key),
                find_key_span(ctx.src(), key),
            ));
        }
    }

    // These name a single entry inside the selftests directory
    for (key, value) in &values[..3] {
        if value.contains(['/', '\\']) {
            return Err(ctx.validation_error(
                format!("'{}' must be a plain name, not a path", key),
                find_key_span(ctx.src(), key),
            ));
        }
    }

    for segment in source.namespace.split("::") {
        validate_name(ctx, segment, "namespace")?;
    }
    validate_name(ctx, &source.function, "function")?;

    Ok(())
}

fn validate_name(ctx: &SourceContext, name: &str, key: &str) -> Result<()> {
    let span = find_key_span(ctx.src(), key);

    if is_cpp_keyword(name) {
        return Err(ctx.reserved_keyword_error(name, key, span));
    }

    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.invalid_identifier_error(name, key, reason, span));
    }

    Ok(())
}

/// Find the span of the value assigned to `key` in the TOML source
///
/// Matches lines like `key = "value"` (whitespace around `=` optional) and
/// labels the value part. Returns `None` when the key is not written out,
/// e.g. when the default was used.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        if let Some(rest) = line.trim_start().strip_prefix(key) {
            let after_key = rest.trim_start();
            if let Some(value) = after_key.strip_prefix('=') {
                let value_trimmed = value.trim_start();
                let value_start = offset + line.len() - value_trimmed.len();
                let value_len = value_trimmed.trim_end().len();
                return Some(SourceSpan::from((value_start, value_len)));
            }
        }

        offset += line.len();
    }

    None
}

/// Validate that a name is a valid C++ identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn validate(src: &str) -> Result<()> {
        let config: Config = toml::from_str(src).unwrap();
        validate_config(&config, &SourceContext::new(src, "dct.toml"))
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("AvoidTestsStriping").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("v2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("keep-tests").is_some());
        assert!(validate_identifier("keep tests").is_some());
    }

    #[test]
    fn test_cpp_keywords() {
        assert!(is_cpp_keyword("namespace"));
        assert!(is_cpp_keyword("return"));
        assert!(!is_cpp_keyword("DAVA"));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_nested_namespace_is_valid() {
        assert!(validate("[source]\nnamespace = \"DAVA::Testing\"\n").is_ok());
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = validate("[layout]\nsuffix = \"\"\n").unwrap_err();

        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "'suffix' cannot be empty");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_path_in_index_rejected() {
        let err = validate("[layout]\nindex = \"cache/index\"\n").unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_keyword_function_rejected() {
        let err = validate("[source]\nfunction = \"return\"\n").unwrap_err();

        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_namespace_segment_rejected() {
        let err = validate("[source]\nnamespace = \"DAVA::2x\"\n").unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, key, .. } => {
                assert_eq!(name, "2x");
                assert_eq!(key, "namespace");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_find_key_span_points_at_value() {
        let src = "[source]\nfunction = \"KeepTests\"\n";
        let span = find_key_span(src, "function").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"KeepTests\"");
    }

    #[test]
    fn test_find_key_span_missing_key() {
        assert!(find_key_span("[source]\n", "function").is_none());
    }
}
