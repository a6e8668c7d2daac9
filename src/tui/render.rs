//! 高亮结果 -> ratatui 行
//!
//! 容器的每个直接子元素画成一行，子元素内部的文本/高亮节点拍平成 span。

use super::theme::HighlightTheme;
use crate::kernel::highlight::Segment;
use crate::kernel::text_tree::{Element, Node};
use ratatui::text::{Line, Span};

pub fn container_lines(container: &Element, theme: &HighlightTheme) -> Vec<Line<'static>> {
    container
        .children
        .iter()
        .map(|child| match child {
            Node::Element(line) => {
                let mut spans = Vec::new();
                collect_spans(line, theme, &mut spans);
                Line::from(spans)
            }
            other => Line::from(node_span(other, theme)),
        })
        .collect()
}

pub fn segment_line<'a>(segments: &[Segment<'a>], theme: &HighlightTheme) -> Line<'a> {
    Line::from(
        segments
            .iter()
            .map(|segment| {
                if segment.is_match {
                    Span::styled(segment.text, theme.mark)
                } else {
                    Span::raw(segment.text)
                }
            })
            .collect::<Vec<_>>(),
    )
}

fn collect_spans(element: &Element, theme: &HighlightTheme, out: &mut Vec<Span<'static>>) {
    for child in &element.children {
        match child {
            Node::Element(inner) => collect_spans(inner, theme, out),
            other => out.push(node_span(other, theme)),
        }
    }
}

fn node_span(node: &Node, theme: &HighlightTheme) -> Span<'static> {
    match node {
        Node::Mark(text) => Span::styled(text.clone(), theme.mark),
        Node::Text(text) => Span::raw(text.clone()),
        Node::Element(element) => Span::raw(element.text_content()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/render.rs"]
mod tests;
