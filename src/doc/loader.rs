//! Document loading and parsing.
//!
//! The format is plain text: a line starting with `# ` opens a new section
//! whose heading becomes the sidebar label and, slugified, the section id.
//! Everything else belongs to the current section's body. Text above the
//! first heading becomes a leading "preamble" section.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::app::types::{Document, Section};

/// Errors produced by document loading.
#[derive(Error, Debug)]
pub enum DocError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context message.
    #[error("Document error: {0}")]
    Message(String),
}

impl From<String> for DocError {
    fn from(s: String) -> Self {
        DocError::Message(s)
    }
}

/// Reads and parses a document file. The file stem doubles as the title.
pub fn load_document(path: &Path) -> Result<Document, DocError> {
    let text = fs::read_to_string(path)?;
    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string());
    Ok(parse_document(&title, &text))
}

pub fn parse_document(title: &str, text: &str) -> Document {
    let mut sections: Vec<Section> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut current: Option<Section> = None;
    let mut preamble: Vec<String> = Vec::new();

    for line in text.lines() {
        if let Some(heading) = line.strip_prefix("# ") {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            let heading = heading.trim();
            let id = unique_slug(heading, &mut seen);
            current = Some(Section::new(id, heading, Vec::new()));
        } else if let Some(section) = current.as_mut() {
            section.body.push(line.to_string());
        } else {
            preamble.push(line.to_string());
        }
    }
    if let Some(section) = current.take() {
        sections.push(section);
    }

    if preamble.iter().any(|l| !l.trim().is_empty()) {
        while preamble.last().is_some_and(|l| l.trim().is_empty()) {
            preamble.pop();
        }
        let id = unique_slug("preamble", &mut seen);
        sections.insert(0, Section::new(id, title, preamble));
    }

    Document::new(title, sections)
}

/// Lowercases the heading, collapses runs of non-alphanumerics into single
/// hyphens, and suffixes `-2`, `-3`, … on repeats so every id is unique.
fn unique_slug(heading: &str, seen: &mut HashMap<String, usize>) -> String {
    let base = slugify(heading);
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{}-{}", base, count)
    }
}

fn slugify(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    let mut pending_hyphen = false;
    for c in heading.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Built-in document shown when no file is given on the command line.
pub fn sample_document() -> Document {
    parse_document("Welcome", SAMPLE_TEXT)
}

const SAMPLE_TEXT: &str = "\
This is a small tour of the viewer. The sidebar on the left lists every
section of the document; the link of the section closest to the middle of
this pane is highlighted as you scroll.

# Getting around
Scroll with the mouse wheel, j/k, or the arrow keys. PageUp and PageDown
move a screenful at a time, and g/G or Home/End jump to either end of the
document.

# The sidebar
Click a link to glide the matching section into the center of the view. A
short ripple plays on the link you clicked. Tab and Shift-Tab move the
keyboard focus through the links; Enter or Space activates the focused one.

# Highlight tracking
The highlighted link always names the section whose center sits closest to
the center of this pane, even while the document is moving. Press s to
toggle tracking off and on.

# Themes
Press t to switch between the dark and light palettes. The choice is saved
and restored on the next start. A custom palette can be dropped into the
config directory as a TOML file.

# Reloading
When a file is open, r reloads it from disk and rebuilds the sidebar. With
the watch feature enabled the viewer reloads on its own whenever the file
changes.

# Leaving
Press q to quit. The terminal is restored even if the program aborts.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_split_sections_and_slugs_become_ids() {
        let doc = parse_document("t", "# First Steps\nbody\n# Second!\nmore");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].id, "first-steps");
        assert_eq!(doc.sections[0].title, "First Steps");
        assert_eq!(doc.sections[0].body, vec!["body"]);
        assert_eq!(doc.sections[1].id, "second");
    }

    #[test]
    fn duplicate_headings_get_numbered_slugs() {
        let doc = parse_document("t", "# Setup\n# Setup\n# Setup");
        let ids: Vec<_> = doc.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup-2", "setup-3"]);
    }

    #[test]
    fn text_before_the_first_heading_becomes_a_preamble() {
        let doc = parse_document("Guide", "intro line\n\n# One\nbody");
        assert_eq!(doc.sections[0].id, "preamble");
        assert_eq!(doc.sections[0].title, "Guide");
        assert_eq!(doc.sections[0].body, vec!["intro line"]);
        assert_eq!(doc.sections[1].id, "one");
    }

    #[test]
    fn blank_leading_text_produces_no_preamble() {
        let doc = parse_document("t", "\n   \n# One");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].id, "one");
    }

    #[test]
    fn preamble_slug_dodges_a_real_preamble_heading() {
        let doc = parse_document("t", "intro\n# Preamble\nbody");
        assert_eq!(doc.sections[0].id, "preamble-2");
        assert_eq!(doc.sections[1].id, "preamble");
    }

    #[test]
    fn empty_text_parses_to_an_empty_document() {
        let doc = parse_document("t", "");
        assert!(doc.is_empty());
    }

    #[test]
    fn symbols_collapse_into_single_hyphens() {
        assert_eq!(slugify("A -- strange / heading?"), "a-strange-heading");
        assert_eq!(slugify("???"), "section");
    }

    #[test]
    fn sample_document_has_tracked_sections() {
        let doc = sample_document();
        assert!(doc.sections.len() >= 5);
        assert_eq!(doc.sections[0].id, "preamble");
    }
}
