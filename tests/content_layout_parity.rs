use docSpy::app::core::geometry::{section_height, ContentLayout};
use docSpy::doc::loader::sample_document;
use docSpy::ui::widgets::content::document_lines;
use ratatui::layout::Rect;
use ratatui::text::Line;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn rendered_rows_match_measured_heights_at_any_width() {
    let doc = sample_document();
    for width in [7u16, 20, 54, 120] {
        let lines = document_lines(&doc, width);
        let layout =
            ContentLayout::compute(Rect::new(0, 0, width, 16), &doc, 0).unwrap();
        assert_eq!(
            lines.len(),
            usize::from(layout.content_height()),
            "width {}",
            width
        );

        let by_sections: usize = doc
            .sections
            .iter()
            .map(|s| usize::from(section_height(s, width)))
            .sum();
        assert_eq!(lines.len(), by_sections, "width {}", width);
    }
}

#[test]
fn section_tops_index_their_heading_rows() {
    let doc = sample_document();
    let area = Rect::new(0, 0, 40, 16);
    let lines = document_lines(&doc, area.width);
    let layout = ContentLayout::compute(area, &doc, 0).unwrap();

    for (geom, section) in layout.sections().iter().zip(&doc.sections) {
        let row = usize::try_from(geom.top - i32::from(area.y)).unwrap();
        assert_eq!(line_text(&lines[row]), section.title);
        // every section ends in its blank separator row
        let last = row + usize::from(geom.height) - 1;
        assert_eq!(line_text(&lines[last]), "");
    }
}

#[test]
fn scrolling_never_changes_the_measured_total() {
    let doc = sample_document();
    let area = Rect::new(0, 0, 40, 16);
    let at_top = ContentLayout::compute(area, &doc, 0).unwrap();
    let scrolled = ContentLayout::compute(area, &doc, 25).unwrap();
    assert_eq!(at_top.content_height(), scrolled.content_height());
    assert_eq!(at_top.max_offset(), scrolled.max_offset());
}
