//! Emitter: one group → one Kotlin source file.
//!
//! Rendering is a pure function of the group's content. Field order
//! follows the partitioner's sorted order; the emitter never re-sorts.
//! Each group file declares a private container object with one field
//! per resource, plus one extension accessor per resource on the
//! matching `Res` marker object. A single `Res.kt` with the marker
//! objects is rendered once per run.

use crate::core::model::{Group, Qualifier, QualifierSet, Resource, ResourceType};

const GENERATED_HEADER: &str = "// Generated by resgen. Do not edit.";

/// Rendered text for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    pub file_name: String,
    pub text: String,
}

/// Render `Res.kt` plus one unit per group, in emission order.
pub fn render_units(package: &str, groups: &[Group]) -> Vec<OutputUnit> {
    let mut units = vec![OutputUnit {
        file_name: "Res.kt".to_string(),
        text: render_res(package),
    }];
    for group in groups {
        units.push(OutputUnit {
            file_name: format!("{}.kt", group.name()),
            text: render_group(package, group),
        });
    }
    units
}

/// The accessor root: `Res` with one marker object per resource type.
pub fn render_res(package: &str) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\npackage ");
    out.push_str(package);
    out.push_str("\n\nobject Res {\n");
    for rtype in ResourceType::ALL {
        out.push_str("  object ");
        out.push_str(rtype.accessor_namespace());
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// One group file: container object followed by the extension accessors.
pub fn render_group(package: &str, group: &Group) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\npackage ");
    out.push_str(package);
    out.push_str("\n\n");

    out.push_str(&format!("private object {} {{\n", group.name()));
    for (i, resource) in group.resources.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_field(&mut out, resource);
    }
    out.push_str("}\n");

    for resource in &group.resources {
        out.push('\n');
        render_accessor(&mut out, &group.name(), resource);
    }

    out
}

fn render_field(out: &mut String, resource: &Resource) {
    let kotlin_type = resource.rtype.kotlin_type();
    out.push_str(&format!(
        "  val {}: {} = {}(\n    \"{}\",\n    setOf(\n",
        resource.id,
        kotlin_type,
        kotlin_type,
        resource.key()
    ));
    for item in &resource.items {
        out.push_str(&format!(
            "      ResourceItem({}, \"{}\"),\n",
            render_qualifier_set(&item.qualifiers),
            item.path
        ));
    }
    out.push_str("    ),\n  )\n");
}

fn render_accessor(out: &mut String, container: &str, resource: &Resource) {
    out.push_str(&format!(
        "val Res.{}.{}: {}\n  get() = {}.{}\n",
        resource.rtype.accessor_namespace(),
        resource.id,
        resource.rtype.kotlin_type(),
        container,
        resource.id
    ));
}

fn render_qualifier_set(set: &QualifierSet) -> String {
    if set.is_empty() {
        return "setOf()".to_string();
    }
    let exprs: Vec<String> = set.iter().map(render_qualifier).collect();
    format!("setOf({})", exprs.join(", "))
}

fn render_qualifier(qualifier: &Qualifier) -> String {
    match qualifier {
        Qualifier::Language(lang) => format!("LanguageQualifier(\"{}\")", lang),
        Qualifier::Region(region) => format!("RegionQualifier(\"{}\")", region),
        Qualifier::Theme(theme) => {
            format!("ThemeQualifier.{}", theme.token().to_ascii_uppercase())
        }
        Qualifier::Density(density) => {
            format!("DensityQualifier.{}", density.token().to_ascii_uppercase())
        }
    }
}
