//! 带高亮标记的文本树
//!
//! 一个容器（`Element`）下挂文本节点、高亮节点和子元素。高亮只在单个文本节点内部
//! 进行，不跨越元素边界；没有命中的文本节点保持原样，不会被替换。

use super::highlight::{TermMatcher, DEFAULT_SIZE_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    /// 高亮标记，内容是被包住的原文
    Mark(String),
    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) | Node::Mark(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    pub fn mark_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::Mark(_) => 1,
                Node::Element(element) => element.mark_count(),
                Node::Text(_) => 0,
            })
            .sum()
    }
}

/// 去掉所有高亮标记，恢复成普通文本，并合并相邻文本节点。
pub fn remove_highlighting(container: &mut Element) {
    unmark(container);
}

/// 先清掉旧标记，再按 `terms` 重新高亮。`None`/空列表只做清理。
///
/// 正则构造失败只记录日志，容器保持清理后的纯文本状态。
pub fn apply_highlighting(container: &mut Element, terms: Option<&[String]>) {
    apply_with_size_limit(container, terms, DEFAULT_SIZE_LIMIT);
}

fn apply_with_size_limit(container: &mut Element, terms: Option<&[String]>, size_limit: usize) {
    remove_highlighting(container);

    let Some(terms) = terms.filter(|terms| !terms.is_empty()) else {
        return;
    };

    let matcher = match TermMatcher::with_size_limit(terms, size_limit) {
        Ok(Some(matcher)) => matcher,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(error = %e, terms = terms.len(), "highlighting failed");
            return;
        }
    };

    let marks = mark(container, &matcher);
    tracing::trace!(marks, "highlighting applied");
}

fn unmark(element: &mut Element) -> bool {
    let mut removed_here = false;
    let mut removed_below = false;

    for child in element.children.iter_mut() {
        match child {
            Node::Mark(text) => {
                let text = std::mem::take(text);
                *child = Node::Text(text);
                removed_here = true;
            }
            Node::Element(inner) => removed_below |= unmark(inner),
            Node::Text(_) => {}
        }
    }

    // 只整理动过的元素，未高亮过的容器结构不变
    if removed_here {
        normalize(&mut element.children);
    }
    removed_here || removed_below
}

fn normalize(children: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());
    for node in children.drain(..) {
        match node {
            Node::Text(text) if text.is_empty() => {}
            Node::Text(text) => match merged.last_mut() {
                Some(Node::Text(prev)) => prev.push_str(&text),
                _ => merged.push(Node::Text(text)),
            },
            other => merged.push(other),
        }
    }
    *children = merged;
}

fn mark(element: &mut Element, matcher: &TermMatcher) -> usize {
    let mut marks = 0usize;
    let mut i = 0usize;

    while i < element.children.len() {
        if let Node::Element(inner) = &mut element.children[i] {
            marks += mark(inner, matcher);
            i += 1;
            continue;
        }

        let nodes = match &element.children[i] {
            Node::Text(text) if matcher.is_match(text) => split_text(text, matcher),
            _ => {
                i += 1;
                continue;
            }
        };

        marks += nodes.iter().filter(|n| matches!(n, Node::Mark(_))).count();
        let len = nodes.len();
        element.children.splice(i..i + 1, nodes);
        i += len;
    }

    marks
}

fn split_text(text: &str, matcher: &TermMatcher) -> Vec<Node> {
    matcher
        .segments(text)
        .into_iter()
        .map(|segment| {
            if segment.is_match {
                Node::Mark(segment.text.to_string())
            } else {
                Node::Text(segment.text.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/text_tree.rs"]
mod tests;
