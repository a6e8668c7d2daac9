//! 搜索框 -> 防抖 -> 提取搜索词 -> 广播 -> 各视图高亮

use super::broadcast::{Subscription, TermBroadcast};
use super::debounce::QueryDebouncer;
use super::query::{extract_terms, TermList};
use super::text_tree::{apply_highlighting, Element};
use std::time::{Duration, Instant};

pub struct SearchTermsPipeline {
    debouncer: QueryDebouncer,
    broadcast: TermBroadcast,
    query: String,
}

impl SearchTermsPipeline {
    pub fn new(quiet: Duration) -> Self {
        Self {
            debouncer: QueryDebouncer::new(quiet),
            broadcast: TermBroadcast::new(),
            query: String::new(),
        }
    }

    /// 最近一次放出（已提取）的查询
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn input(&mut self, raw: impl Into<String>, now: Instant) {
        self.debouncer.push(raw, now);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// 防抖到期则提取并广播，返回是否发布了新词表
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };
        let terms = extract_terms(Some(query.as_str()));
        tracing::debug!(query = %query, terms = terms.len(), "search terms extracted");
        self.query = query;
        self.broadcast.publish(terms);
        true
    }

    pub fn terms(&self) -> TermList {
        self.broadcast.latest()
    }

    pub fn broadcast(&self) -> &TermBroadcast {
        &self.broadcast
    }

    pub fn subscribe(&self, callback: impl FnMut(&TermList) + 'static) -> Subscription {
        self.broadcast.subscribe(callback)
    }
}

impl Default for SearchTermsPipeline {
    fn default() -> Self {
        Self::new(super::debounce::DEFAULT_QUIET_PERIOD)
    }
}

/// 一个高亮消费者：自己的文本容器 + 当前词表，两者任一变化都重新高亮
#[derive(Debug, Clone, Default)]
pub struct HighlightedText {
    container: Element,
    terms: TermList,
}

impl HighlightedText {
    pub fn new(container: Element) -> Self {
        Self {
            container,
            terms: TermList::new(),
        }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn terms(&self) -> &TermList {
        &self.terms
    }

    pub fn set_terms(&mut self, terms: &TermList) {
        self.terms = terms.clone();
        self.refresh();
    }

    pub fn set_content(&mut self, container: Element) {
        self.container = container;
        self.refresh();
    }

    fn refresh(&mut self) {
        apply_highlighting(&mut self.container, Some(self.terms.as_slice()));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/pipeline.rs"]
mod tests;
