//! 终端前端：搜索框 + 文档视图 + 词表视图
//!
//! 两个视图各自持有一个 `HighlightedText`，通过订阅同一个词表广播独立重新高亮。

use super::render::{container_lines, segment_line};
use super::theme::HighlightTheme;
use crate::kernel::highlight::highlight_segments;
use crate::kernel::pipeline::{HighlightedText, SearchTermsPipeline};
use crate::kernel::query::TermList;
use crate::kernel::services::ports::Settings;
use crate::kernel::text_tree::Element;
use crate::kernel::{to_ts_query, Subscription};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use ropey::Rope;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const IDLE_TICK: Duration = Duration::from_millis(250);
const TERMS_WIDTH: u16 = 28;

pub struct App {
    title: String,
    query: String,
    pipeline: SearchTermsPipeline,
    document: Rc<RefCell<HighlightedText>>,
    term_view: Rc<RefCell<HighlightedText>>,
    _subscriptions: Vec<Subscription>,
    theme: HighlightTheme,
    scroll: u16,
    page_height: u16,
    should_quit: bool,
}

impl App {
    pub fn new(title: impl Into<String>, text: &Rope, settings: &Settings) -> Self {
        let pipeline = SearchTermsPipeline::new(settings.search.debounce());
        let document = Rc::new(RefCell::new(HighlightedText::new(document_element(text))));
        let term_view = Rc::new(RefCell::new(HighlightedText::default()));

        let view = document.clone();
        let doc_sub = pipeline.subscribe(move |terms| view.borrow_mut().set_terms(terms));
        let view = term_view.clone();
        let terms_sub = pipeline.subscribe(move |terms| {
            let mut view = view.borrow_mut();
            view.set_terms(terms);
            view.set_content(term_list_element(terms));
        });

        Self {
            title: title.into(),
            query: String::new(),
            pipeline,
            document,
            term_view,
            _subscriptions: vec![doc_sub, terms_sub],
            theme: HighlightTheme::from_settings(&settings.theme),
            scroll: 0,
            page_height: 10,
            should_quit: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn terms(&self) -> TermList {
        self.pipeline.terms()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn document(&self) -> std::cell::Ref<'_, HighlightedText> {
        self.document.borrow()
    }

    pub fn term_view(&self) -> std::cell::Ref<'_, HighlightedText> {
        self.term_view.borrow()
    }

    /// 替换文档内容，按当前词表重新高亮
    pub fn set_document(&mut self, title: impl Into<String>, text: &Rope) {
        self.title = title.into();
        self.scroll = 0;
        self.document
            .borrow_mut()
            .set_content(document_element(text));
    }

    /// 事件循环等待输入的最长时间：不超过防抖截止时间
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.pipeline.deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_TICK),
            None => IDLE_TICK,
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.pipeline.tick(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.should_quit = true;
                return false;
            }
            (KeyCode::Char('c'), mods) if mods == KeyModifiers::CONTROL => {
                self.should_quit = true;
                return false;
            }
            (KeyCode::Char('u'), mods) if mods == KeyModifiers::CONTROL => self.query.clear(),
            (KeyCode::Char(ch), mods) if mods.is_empty() || mods == KeyModifiers::SHIFT => {
                self.query.push(ch);
            }
            (KeyCode::Backspace, _) => {
                if self.query.pop().is_none() {
                    return false;
                }
            }
            (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                return true;
            }
            (KeyCode::Down, _) => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                return true;
            }
            (KeyCode::PageUp, _) => {
                self.scroll = self.scroll.saturating_sub(self.page_height);
                return true;
            }
            (KeyCode::PageDown, _) => {
                self.scroll = self
                    .scroll
                    .saturating_add(self.page_height)
                    .min(self.max_scroll());
                return true;
            }
            _ => return false,
        }

        self.pipeline.input(self.query.clone(), now);
        true
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.document.borrow().container().children.len();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(TERMS_WIDTH)])
            .split(rows[1]);

        self.page_height = body[0].height.saturating_sub(2).max(1);

        self.render_search_box(frame, rows[0]);
        self.render_document(frame, body[0]);
        self.render_terms(frame, body[1]);
        self.render_status(frame, rows[2]);
    }

    fn block(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(Span::styled(format!(" {} ", title), self.theme.accent))
    }

    fn render_search_box(&self, frame: &mut Frame, area: Rect) {
        let terms = self.pipeline.terms();
        let segments = highlight_segments(&self.query, terms.as_slice());
        let line = segment_line(&segments, &self.theme);
        frame.render_widget(Paragraph::new(line).block(self.block("Search")), area);
    }

    fn render_document(&self, frame: &mut Frame, area: Rect) {
        let doc = self.document.borrow();
        let lines = container_lines(doc.container(), &self.theme);
        let title = format!("{} ({} marks)", self.title, doc.container().mark_count());
        frame.render_widget(
            Paragraph::new(lines)
                .block(self.block(&title))
                .scroll((self.scroll, 0)),
            area,
        );
    }

    fn render_terms(&self, frame: &mut Frame, area: Rect) {
        let view = self.term_view.borrow();
        let lines = container_lines(view.container(), &self.theme);
        frame.render_widget(Paragraph::new(lines).block(self.block("Terms")), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let ts_query = to_ts_query(Some(self.pipeline.query()));
        let line = Line::from(vec![
            Span::styled("tsquery: ", self.theme.accent),
            Span::raw(ts_query),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

pub fn document_element(text: &Rope) -> Element {
    let mut doc = Element::new("doc");
    for line in text.lines() {
        let line = line.to_string();
        let line = line.trim_end_matches(['\n', '\r']);
        doc = doc.with_child(Element::new("line").with_text(line));
    }
    doc
}

fn term_list_element(terms: &TermList) -> Element {
    terms.iter().fold(Element::new("terms"), |list, term| {
        list.with_child(Element::new("line").with_text(term.as_str()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;
