use super::*;
use crate::kernel::highlight::highlight_segments;
use crate::kernel::text_tree::apply_highlighting;

#[test]
fn test_container_lines_style_marks() {
    let theme = HighlightTheme::default();
    let mut doc = Element::new("doc")
        .with_child(Element::new("line").with_text("Registered nurse"))
        .with_child(Element::new("line").with_text("Midwife"));
    let terms = vec!["nurse".to_string()];
    apply_highlighting(&mut doc, Some(terms.as_slice()));

    let lines = container_lines(&doc, &theme);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans.len(), 2);
    assert_eq!(lines[0].spans[0].content, "Registered ");
    assert_eq!(lines[0].spans[1].content, "nurse");
    assert_eq!(lines[0].spans[1].style, theme.mark);
    assert_eq!(lines[1].spans[0].content, "Midwife");
}

#[test]
fn test_nested_elements_flatten_into_one_line() {
    let theme = HighlightTheme::default();
    let doc = Element::new("doc").with_child(
        Element::new("line")
            .with_text("a ")
            .with_child(Element::new("b").with_text("bold")),
    );
    let lines = container_lines(&doc, &theme);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans.len(), 2);
}

#[test]
fn test_segment_line() {
    let theme = HighlightTheme::default();
    let terms = vec!["excel".to_string()];
    let segments = highlight_segments("excel + word", &terms);
    let line = segment_line(&segments, &theme);
    assert_eq!(line.spans.len(), 2);
    assert_eq!(line.spans[0].style, theme.mark);
    assert_eq!(line.spans[1].content, " + word");
}
