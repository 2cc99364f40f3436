//! # Inventory Line Classification
//!
//! Splits inventory text into sections. Each non-blank, non-comment line is
//! either a group header or a body line belonging to the most recent header:
//!
//! ```text
//! [web]              # Normal group
//! web[01:03] env=prod
//! [web:vars]         # Vars group
//! region=us
//! [frontend:children]
//! web tier=frontend
//! ```
//!
//! Body lines before the first header are discarded.

use indexmap::IndexMap;
use tracing::debug;

use hostmap_common::error::InventoryError;
use hostmap_common::group::GroupKind;

/// Raw body lines per group name, in first-appearance order.
pub type SectionLines = IndexMap<String, Vec<String>>;

/// Inventory text sorted into the three section kinds.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClassifiedInventory {
    pub normal: SectionLines,
    pub vars: SectionLines,
    pub children: SectionLines,
}

impl ClassifiedInventory {
    pub fn sections(&self, kind: GroupKind) -> &SectionLines {
        match kind {
            GroupKind::Normal => &self.normal,
            GroupKind::Vars => &self.vars,
            GroupKind::Children => &self.children,
        }
    }

    fn sections_mut(&mut self, kind: GroupKind) -> &mut SectionLines {
        match kind {
            GroupKind::Normal => &mut self.normal,
            GroupKind::Vars => &mut self.vars,
            GroupKind::Children => &mut self.children,
        }
    }
}

/// A parsed `[name]` or `[name:kind]` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub kind: GroupKind,
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Header(Header),
    Body(&'a str),
}

#[derive(Debug)]
enum Section {
    /// Lines seen before any header.
    Ignored,
    Group(Header),
}

pub fn classify(text: &str) -> Result<ClassifiedInventory, InventoryError> {
    let mut inventory = ClassifiedInventory::default();
    let mut section = Section::Ignored;

    for (idx, raw) in text.lines().enumerate() {
        match classify_line(raw, idx + 1)? {
            Line::Skip => {}
            Line::Header(header) => {
                // A header with no body still defines its group.
                inventory
                    .sections_mut(header.kind)
                    .entry(header.name.clone())
                    .or_default();
                section = Section::Group(header);
            }
            Line::Body(body) => match &section {
                Section::Ignored => debug!("Ignoring line outside any group: {body}"),
                Section::Group(header) => inventory
                    .sections_mut(header.kind)
                    .entry(header.name.clone())
                    .or_default()
                    .push(body.to_string()),
            },
        }
    }

    Ok(inventory)
}

fn classify_line(raw: &str, line_no: usize) -> Result<Line<'_>, InventoryError> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(Line::Skip);
    }

    if line.starts_with('[') {
        return parse_header(line)
            .map(Line::Header)
            .ok_or_else(|| InventoryError::HeaderParse {
                line_no,
                line: line.to_string(),
            });
    }

    Ok(Line::Body(line))
}

/// Parses `[name]` or `[name:kind]`, optionally followed by a `#` comment.
fn parse_header(line: &str) -> Option<Header> {
    let inner = line.strip_prefix('[')?;
    let close = inner.find(']')?;
    let (body, rest) = (&inner[..close], &inner[close + 1..]);

    let rest = rest.trim_start();
    if !rest.is_empty() && !rest.starts_with('#') {
        return None;
    }

    let (name, kind) = match body.split_once(':') {
        Some((name, suffix)) => (name, GroupKind::from_suffix(suffix)?),
        None => (body, GroupKind::Normal),
    };

    if name.is_empty() || name.contains(['[', ' ', '\t']) {
        return None;
    }

    Some(Header {
        name: name.to_string(),
        kind,
    })
}
