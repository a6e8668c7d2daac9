//! 搜索词高亮（纯函数部分）
//!
//! 把一段文本按当前词列表切成 `Segment` 序列：命中的片段 `is_match = true`，
//! 其余原样保留。渲染层只负责把片段画成普通文本或高亮文本。

pub type Result<T> = std::result::Result<T, HighlightError>;

#[derive(Debug)]
pub enum HighlightError {
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighlightError::InvalidPattern(e) => write!(f, "Invalid highlight pattern: {}", e),
        }
    }
}

impl std::error::Error for HighlightError {}

impl From<regex::Error> for HighlightError {
    fn from(e: regex::Error) -> Self {
        HighlightError::InvalidPattern(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

pub(crate) const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// 编译好的词匹配器：所有词转义后用 `|` 拼成一个大小写不敏感的正则
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: regex::Regex,
}

impl TermMatcher {
    /// 空列表返回 `Ok(None)`。词的顺序即匹配优先级（leftmost-first）。
    pub fn new(terms: &[String]) -> Result<Option<Self>> {
        Self::with_size_limit(terms, DEFAULT_SIZE_LIMIT)
    }

    pub fn with_size_limit(terms: &[String], size_limit: usize) -> Result<Option<Self>> {
        let escaped: Vec<String> = terms
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| regex::escape(t))
            .collect();
        if escaped.is_empty() {
            return Ok(None);
        }

        let regex = regex::RegexBuilder::new(&escaped.join("|"))
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()?;
        Ok(Some(Self { regex }))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last = 0usize;
        for mat in self.regex.find_iter(text) {
            if mat.start() > last {
                segments.push(Segment::plain(&text[last..mat.start()]));
            }
            segments.push(Segment::matched(mat.as_str()));
            last = mat.end();
        }
        if last < text.len() {
            segments.push(Segment::plain(&text[last..]));
        }
        segments
    }
}

/// 不编译缓存的便捷版本；构造失败时记录日志并整段返回普通文本
pub fn highlight_segments<'a>(text: &'a str, terms: &[String]) -> Vec<Segment<'a>> {
    let whole = || {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::plain(text)]
        }
    };

    match TermMatcher::new(terms) {
        Ok(Some(matcher)) => matcher.segments(text),
        Ok(None) => whole(),
        Err(e) => {
            tracing::warn!(error = %e, terms = terms.len(), "highlight skipped");
            whole()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/highlight.rs"]
mod tests;
