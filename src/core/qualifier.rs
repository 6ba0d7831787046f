//! Qualifier parser: resource-root-relative path → (type, base name, qualifiers).
//!
//! The parser only reports raw facts about one path. Grouping files into
//! logical resources, identifier sanitization, and conflict detection all
//! happen downstream in the collector and validator.
//!
//! Recognized layout: `<type-prefix>[-token...]/<file>.<ext>`, where the
//! type prefix is one of the `ResourceType` directory prefixes and each
//! token is a theme (`light`/`dark`), a density (`ldpi`..`xxxhdpi`), a
//! region (`rUS`), or a language (`fr`, `fil`). Anything else is
//! unrecognized.

use std::fmt;

use crate::core::model::{Density, Dimension, Qualifier, QualifierSet, ResourceType, Theme};

/// Raw facts about one resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    pub rtype: ResourceType,
    /// File name minus the final extension, unsanitized.
    pub base: String,
    pub qualifiers: QualifierSet,
}

/// Why a path did not match the resource layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnrecognizedReason {
    /// File sits directly under the resource root, outside any type directory.
    NotInTypeDirectory,
    /// Top directory does not start with a known type prefix.
    UnknownTypePrefix(String),
    /// File is nested deeper than `<typedir>/<file>`.
    NestedPath,
    /// A qualifier token matched no known dimension.
    UnknownQualifier(String),
    /// Two qualifier tokens claimed the same dimension.
    RepeatedDimension(Dimension),
    /// A region qualifier appeared without a language qualifier.
    RegionWithoutLanguage,
}

impl fmt::Display for UnrecognizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnrecognizedReason::NotInTypeDirectory => {
                write!(f, "file is not inside a resource type directory")
            }
            UnrecognizedReason::UnknownTypePrefix(dir) => {
                write!(f, "directory '{}' does not match any resource type", dir)
            }
            UnrecognizedReason::NestedPath => {
                write!(f, "nested directories are not supported inside a type directory")
            }
            UnrecognizedReason::UnknownQualifier(token) => {
                write!(f, "unknown qualifier '{}'", token)
            }
            UnrecognizedReason::RepeatedDimension(dimension) => {
                write!(f, "more than one {} qualifier", dimension)
            }
            UnrecognizedReason::RegionWithoutLanguage => {
                write!(f, "region qualifier requires a language qualifier")
            }
        }
    }
}

/// Parse a path relative to a resource root.
///
/// Pure function; safe to call from a parallel iterator.
pub fn parse_resource_path(rel_path: &str) -> Result<ParsedFile, UnrecognizedReason> {
    let segments: Vec<&str> = rel_path.split('/').collect();
    let (dir, file) = match segments.as_slice() {
        [_] => return Err(UnrecognizedReason::NotInTypeDirectory),
        [dir, file] => (*dir, *file),
        _ => return Err(UnrecognizedReason::NestedPath),
    };

    let (rtype, suffix) = split_type_dir(dir)
        .ok_or_else(|| UnrecognizedReason::UnknownTypePrefix(dir.to_string()))?;

    let qualifiers = parse_qualifier_suffix(suffix)?;

    Ok(ParsedFile {
        rtype,
        base: strip_extension(file).to_string(),
        qualifiers,
    })
}

/// Split a type directory name into its resource type and qualifier
/// suffix (without the leading `-`, empty if unqualified).
fn split_type_dir(dir: &str) -> Option<(ResourceType, &str)> {
    if let Some(rtype) = ResourceType::from_dir_prefix(dir) {
        return Some((rtype, ""));
    }
    for rtype in ResourceType::ALL {
        if let Some(rest) = dir.strip_prefix(rtype.dir_prefix()) {
            if let Some(suffix) = rest.strip_prefix('-') {
                return Some((rtype, suffix));
            }
        }
    }
    None
}

fn parse_qualifier_suffix(suffix: &str) -> Result<QualifierSet, UnrecognizedReason> {
    let mut set = QualifierSet::new();
    if suffix.is_empty() {
        return Ok(set);
    }

    for token in suffix.split('-') {
        let qualifier = parse_token(token)?;
        let dimension = qualifier.dimension();
        if !set.try_insert(qualifier) {
            return Err(UnrecognizedReason::RepeatedDimension(dimension));
        }
    }

    if set.contains_dimension(Dimension::Region) && !set.contains_dimension(Dimension::Language) {
        return Err(UnrecognizedReason::RegionWithoutLanguage);
    }

    Ok(set)
}

/// Classify one qualifier token. Keyword dimensions (theme, density) win
/// over the positional language/region patterns, so `hdpi` is never read
/// as a language.
fn parse_token(token: &str) -> Result<Qualifier, UnrecognizedReason> {
    if let Some(theme) = Theme::from_token(token) {
        return Ok(Qualifier::Theme(theme));
    }
    if let Some(density) = Density::from_token(token) {
        return Ok(Qualifier::Density(density));
    }
    if is_region_token(token) {
        return Ok(Qualifier::Region(token[1..].to_string()));
    }
    if is_language_token(token) {
        return Ok(Qualifier::Language(token.to_string()));
    }
    Err(UnrecognizedReason::UnknownQualifier(token.to_string()))
}

/// Android-style region: `r` followed by exactly two uppercase letters.
fn is_region_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 3 && bytes[0] == b'r' && bytes[1..].iter().all(|b| b.is_ascii_uppercase())
}

/// ISO 639 language code: two or three lowercase letters.
fn is_language_token(token: &str) -> bool {
    (2..=3).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_lowercase())
}

/// Strip the final extension; a name without a dot is returned unchanged.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(0) | None => file,
        Some(idx) => &file[..idx],
    }
}
