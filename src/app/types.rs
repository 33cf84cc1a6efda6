use std::fmt;

/// Identifier of a section, derived from its heading (see `doc::loader::slugify`).
///
/// Ids are the join key between the document's sections and the sidebar
/// links; they are unique within one document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        SectionId(s.to_string())
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        SectionId(s)
    }
}

// Convenience for tests and lookups against literal ids.
impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One content block of the document: a heading plus body lines.
///
/// Body lines are stored unwrapped; wrapping happens against the live
/// content width when geometry or frames are produced, so a section's
/// height always reflects the current terminal size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub body: Vec<String>,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>, body: Vec<String>) -> Self {
        Section {
            id: id.into(),
            title: title.into(),
            body,
        }
    }
}

/// A loaded document: ordered sections under a display title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Document {
            title: title.into(),
            sections,
        }
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A sidebar navigation entry referencing a section by id.
///
/// Links carry no active flag of their own; the scrollspy controller holds
/// a single `Option<SectionId>` so at most one link can ever be active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLink {
    pub id: SectionId,
    pub label: String,
}

impl SidebarLink {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        SidebarLink {
            id: id.into(),
            label: label.into(),
        }
    }
}
