use ratatui::layout::Rect;

use crate::app::types::{Document, Section, SectionId};

/// Screen-space geometry of one section, in terminal rows.
///
/// `top` is relative to the screen (not the document), so a section that is
/// scrolled above the viewport has a negative top. Centers are expressed in
/// half-row units (`2 * top + height`) to keep comparisons exact: two
/// sections are equidistant from the viewport center only when the integer
/// half-row distances are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionGeom {
    pub id: SectionId,
    pub top: i32,
    pub height: u16,
}

impl SectionGeom {
    /// Vertical center in half-row units.
    pub fn center2(&self) -> i32 {
        2 * self.top + i32::from(self.height)
    }
}

/// Live geometry of the content viewport and every section in it.
///
/// Recomputed from the current terminal area, document, and scroll offset
/// each time geometry is needed; nothing here survives a resize or a
/// document change.
#[derive(Clone, Debug)]
pub struct ContentLayout {
    area: Rect,
    offset: i32,
    sections: Vec<SectionGeom>,
    content_height: u16,
}

impl ContentLayout {
    /// Lay the document out inside `area` with the given scroll offset.
    ///
    /// Returns `None` for a degenerate area (zero width or height), the
    /// terminal analog of the scroll container being absent: callers are
    /// expected to skip their work silently in that case.
    pub fn compute(area: Rect, doc: &Document, offset: i32) -> Option<Self> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let mut sections = Vec::with_capacity(doc.sections.len());
        let mut y = i32::from(area.y) - offset;
        for section in &doc.sections {
            let height = section_height(section, area.width);
            sections.push(SectionGeom {
                id: section.id.clone(),
                top: y,
                height,
            });
            y += i32::from(height);
        }
        let content_height = (y + offset - i32::from(area.y)).max(0) as u16;
        Some(ContentLayout {
            area,
            offset,
            sections,
            content_height,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(area: Rect, offset: i32, sections: Vec<SectionGeom>) -> Self {
        let content_height = sections.iter().map(|s| u16::from(s.height)).sum();
        ContentLayout {
            area,
            offset,
            sections,
            content_height,
        }
    }

    pub fn sections(&self) -> &[SectionGeom] {
        &self.sections
    }

    pub fn section(&self, id: &SectionId) -> Option<&SectionGeom> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Vertical center of the viewport in half-row units.
    pub fn viewport_center2(&self) -> i32 {
        2 * i32::from(self.area.y) + i32::from(self.area.height)
    }

    pub fn viewport_height(&self) -> u16 {
        self.area.height
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Greatest scroll offset that still shows a full viewport of content.
    pub fn max_offset(&self) -> f32 {
        f32::from(self.content_height.saturating_sub(self.area.height))
    }

    /// Scroll offset that places `geom`'s center on the viewport's center,
    /// clamped to the valid scroll range.
    pub fn centered_offset(&self, geom: &SectionGeom) -> f32 {
        let doc_top = geom.top - i32::from(self.area.y) + self.offset;
        let target = doc_top as f32 + f32::from(geom.height) / 2.0
            - f32::from(self.area.height) / 2.0;
        target.clamp(0.0, self.max_offset())
    }
}

/// Height of one section in rows at the given wrap width: a heading row,
/// the wrapped body, and a blank separator row.
pub fn section_height(section: &Section, width: u16) -> u16 {
    let body: usize = section
        .body
        .iter()
        .map(|line| wrap_body_line(line, width).len())
        .sum();
    (body + 2).min(u16::MAX as usize) as u16
}

/// One body line broken at the wrap width; empty lines stay as one blank
/// row. The renderer emits exactly these rows, so heights measured here
/// always match what is drawn.
pub fn wrap_body_line(line: &str, width: u16) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let wrapped: Vec<String> = textwrap::wrap(line, usize::from(width.max(1)))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect();
    if wrapped.is_empty() {
        vec![String::new()]
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::Document;

    fn doc_with_bodies(bodies: &[usize]) -> Document {
        let sections = bodies
            .iter()
            .enumerate()
            .map(|(i, n)| {
                Section::new(
                    format!("s{}", i),
                    format!("Section {}", i),
                    (0..*n).map(|j| format!("line {}", j)).collect(),
                )
            })
            .collect();
        Document::new("test", sections)
    }

    #[test]
    fn degenerate_area_yields_no_layout() {
        let doc = doc_with_bodies(&[1]);
        assert!(ContentLayout::compute(Rect::new(0, 0, 0, 10), &doc, 0).is_none());
        assert!(ContentLayout::compute(Rect::new(0, 0, 10, 0), &doc, 0).is_none());
    }

    #[test]
    fn tops_accumulate_and_respect_offset() {
        // Bodies of 1 and 2 lines -> heights 3 and 4.
        let doc = doc_with_bodies(&[1, 2]);
        let area = Rect::new(0, 2, 40, 10);
        let layout = ContentLayout::compute(area, &doc, 0).unwrap();
        assert_eq!(layout.sections()[0].top, 2);
        assert_eq!(layout.sections()[0].height, 3);
        assert_eq!(layout.sections()[1].top, 5);
        assert_eq!(layout.sections()[1].height, 4);
        assert_eq!(layout.content_height(), 7);

        // Scrolling by 4 rows pushes the first section above the viewport.
        let scrolled = ContentLayout::compute(area, &doc, 4).unwrap();
        assert_eq!(scrolled.sections()[0].top, -2);
        assert_eq!(scrolled.sections()[1].top, 1);
        assert_eq!(scrolled.content_height(), 7);
    }

    #[test]
    fn long_lines_wrap_into_extra_rows() {
        let section = Section::new(
            "s",
            "S",
            vec!["word ".repeat(20).trim_end().to_string()],
        );
        // 100 chars of text in a 20-cell column wraps to 5 rows.
        assert_eq!(section_height(&section, 20), 7);
        // A wide viewport keeps it on one row.
        assert_eq!(section_height(&section, 200), 3);
    }

    #[test]
    fn empty_body_still_occupies_heading_and_gap() {
        let section = Section::new("s", "S", vec![]);
        assert_eq!(section_height(&section, 40), 2);
    }

    #[test]
    fn centered_offset_centers_and_clamps() {
        // Three equal sections of height 4, viewport of 6 rows.
        let doc = doc_with_bodies(&[2, 2, 2]);
        let area = Rect::new(0, 0, 40, 6);
        let layout = ContentLayout::compute(area, &doc, 0).unwrap();
        let mid = &layout.sections()[1];
        // Middle section spans doc rows 4..8; centering it wants offset 3.
        assert_eq!(layout.centered_offset(mid), 3.0);
        // The first section clamps at the top of the range.
        let first = &layout.sections()[0];
        assert_eq!(layout.centered_offset(first), 0.0);
        // The last section clamps at max_offset.
        let last = &layout.sections()[2];
        assert_eq!(layout.centered_offset(last), layout.max_offset());
    }

    #[test]
    fn center2_is_exact_in_half_rows() {
        let geom = SectionGeom {
            id: "s".into(),
            top: 3,
            height: 5,
        };
        assert_eq!(geom.center2(), 11);
        let area = Rect::new(0, 1, 10, 8);
        let layout = ContentLayout::from_parts(area, 0, vec![geom]);
        assert_eq!(layout.viewport_center2(), 10);
    }
}
