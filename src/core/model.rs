//! Data model for the resource catalog.
//!
//! These types flow through the whole pipeline: the collector builds
//! `Resource`s out of parsed files, the validator checks the `Catalog`,
//! the partitioner slices it into `Group`s, and the emitter renders each
//! group. Everything is ordered (`BTreeMap`, sorted `Vec`s) so that one
//! input tree always produces one output, independent of filesystem
//! enumeration order.

use std::collections::BTreeMap;
use std::fmt;

/// The kind of a logical resource, derived from its directory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Drawable,
    String,
    Font,
    Raw,
    Plural,
}

impl ResourceType {
    /// All types, in the order groups are emitted.
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Drawable,
        ResourceType::String,
        ResourceType::Font,
        ResourceType::Raw,
        ResourceType::Plural,
    ];

    /// Directory prefix that classifies a file as this type
    /// (e.g. `drawable`, `drawable-dark`).
    pub fn dir_prefix(&self) -> &'static str {
        match self {
            ResourceType::Drawable => "drawable",
            ResourceType::String => "string",
            ResourceType::Font => "font",
            ResourceType::Raw => "raw",
            ResourceType::Plural => "plural",
        }
    }

    /// Capitalized name used for group container objects and file names
    /// (`Drawable1.kt`).
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceType::Drawable => "Drawable",
            ResourceType::String => "String",
            ResourceType::Font => "Font",
            ResourceType::Raw => "Raw",
            ResourceType::Plural => "Plural",
        }
    }

    /// Kotlin type of the generated resource reference.
    pub fn kotlin_type(&self) -> &'static str {
        match self {
            ResourceType::Drawable => "DrawableResource",
            ResourceType::String => "StringResource",
            ResourceType::Font => "FontResource",
            ResourceType::Raw => "RawResource",
            ResourceType::Plural => "PluralStringResource",
        }
    }

    /// Marker object under `Res` that accessors of this type extend.
    pub fn accessor_namespace(&self) -> &'static str {
        self.dir_prefix()
    }

    /// Whether the validator requires a default (unqualified) variant.
    /// String-like types are exempt: purely locale-specific catalogs
    /// are legitimate.
    pub fn requires_default_variant(&self) -> bool {
        !matches!(self, ResourceType::String | ResourceType::Plural)
    }

    pub fn from_dir_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.dir_prefix() == prefix)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_prefix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn token(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub fn token(&self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ldpi" => Some(Density::Ldpi),
            "mdpi" => Some(Density::Mdpi),
            "hdpi" => Some(Density::Hdpi),
            "xhdpi" => Some(Density::Xhdpi),
            "xxhdpi" => Some(Density::Xxhdpi),
            "xxxhdpi" => Some(Density::Xxxhdpi),
            _ => None,
        }
    }
}

/// The axis a qualifier token belongs to. At most one qualifier per
/// dimension may appear on a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Language,
    Region,
    Theme,
    Density,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Language => "language",
            Dimension::Region => "region",
            Dimension::Theme => "theme",
            Dimension::Density => "density",
        };
        write!(f, "{}", name)
    }
}

/// One (dimension, value) tag distinguishing a variant file.
///
/// Variant ordering doubles as the render order inside a qualifier set:
/// language, region, theme, density.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qualifier {
    Language(String),
    Region(String),
    Theme(Theme),
    Density(Density),
}

impl Qualifier {
    pub fn dimension(&self) -> Dimension {
        match self {
            Qualifier::Language(_) => Dimension::Language,
            Qualifier::Region(_) => Dimension::Region,
            Qualifier::Theme(_) => Dimension::Theme,
            Qualifier::Density(_) => Dimension::Density,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Language(lang) => write!(f, "{}", lang),
            Qualifier::Region(region) => write!(f, "r{}", region),
            Qualifier::Theme(theme) => write!(f, "{}", theme.token()),
            Qualifier::Density(density) => write!(f, "{}", density.token()),
        }
    }
}

/// A set of qualifiers with at most one entry per dimension.
///
/// Kept sorted so equal sets compare equal and render identically.
/// The empty set is the default variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifierSet {
    qualifiers: Vec<Qualifier>,
}

impl QualifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a qualifier; returns `false` if the dimension is already
    /// occupied (the set is left unchanged).
    pub fn try_insert(&mut self, qualifier: Qualifier) -> bool {
        if self
            .qualifiers
            .iter()
            .any(|q| q.dimension() == qualifier.dimension())
        {
            return false;
        }
        self.qualifiers.push(qualifier);
        self.qualifiers.sort();
        true
    }

    pub fn is_default(&self) -> bool {
        self.qualifiers.is_empty()
    }

    pub fn contains_dimension(&self, dimension: Dimension) -> bool {
        self.qualifiers.iter().any(|q| q.dimension() == dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Qualifier> {
        self.qualifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qualifiers.is_empty() {
            return write!(f, "default");
        }
        let tokens: Vec<String> = self.qualifiers.iter().map(|q| q.to_string()).collect();
        write!(f, "{}", tokens.join("-"))
    }
}

/// One physical file serving one qualifier combination of a resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResourceItem {
    pub qualifiers: QualifierSet,
    /// Path relative to the resource root, with forward slashes.
    pub path: String,
}

/// One logical, addressable resource with its qualifier variants.
#[derive(Debug, Clone)]
pub struct Resource {
    pub rtype: ResourceType,
    /// Sanitized identifier; unique catalog-wide per (type, id).
    pub id: String,
    /// Variant files, sorted by qualifier set (default first).
    pub items: Vec<ResourceItem>,
    /// Pre-sanitization base names that mapped to this identifier, each
    /// with an example path. More than one entry is an identifier
    /// collision.
    pub raw_bases: BTreeMap<String, String>,
}

impl Resource {
    pub fn new(rtype: ResourceType, id: impl Into<String>) -> Self {
        Self {
            rtype,
            id: id.into(),
            items: Vec::new(),
            raw_bases: BTreeMap::new(),
        }
    }

    /// Stable string key of the form `<type>:<identifier>`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.rtype, self.id)
    }

    pub fn has_default_variant(&self) -> bool {
        self.items.iter().any(|item| item.qualifiers.is_default())
    }
}

pub type ResourceKey = (ResourceType, String);

/// The complete resource set of one generation run.
///
/// Backed by a `BTreeMap` so iteration is identifier-sorted regardless of
/// discovery order.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<ResourceKey, Resource>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, rtype: ResourceType, id: &str) -> Option<&Resource> {
        self.entries.get(&(rtype, id.to_string()))
    }

    /// Look up or create the resource for `(rtype, id)`.
    pub fn entry(&mut self, rtype: ResourceType, id: &str) -> &mut Resource {
        self.entries
            .entry((rtype, id.to_string()))
            .or_insert_with(|| Resource::new(rtype, id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.entries.values()
    }

    pub fn into_resources(self) -> impl Iterator<Item = Resource> {
        self.entries.into_values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A bounded-size partition of the catalog; one group renders to one
/// output file.
#[derive(Debug, Clone)]
pub struct Group {
    pub rtype: ResourceType,
    /// 1-based, sequential per resource type.
    pub index: usize,
    /// Identifier-sorted, carried over from the catalog.
    pub resources: Vec<Resource>,
}

impl Group {
    /// Container/file name, e.g. `Drawable1`.
    pub fn name(&self) -> String {
        format!("{}{}", self.rtype.type_name(), self.index)
    }
}
