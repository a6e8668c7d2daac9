//! 搜索词提取
//!
//! 把搜索框里的查询串拆成扁平的词列表：
//! - `"..."`：整体作为一个短语
//! - `( )`：OR 分组，只去掉括号
//! - `+`：AND 运算符，和空白一样作为分隔
//! - `*`：通配符，直接去掉（不做前缀匹配）
//!
//! 结果按字符长度降序，保证高亮时长短语先于其子串命中。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermList(Vec<String>);

impl TermList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TermList {
    fn from(terms: Vec<String>) -> Self {
        Self(terms)
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 提取搜索词。`None` 和空串返回空列表，畸形输入尽力而为，从不失败。
pub fn extract_terms(query: Option<&str>) -> TermList {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return TermList::new(),
    };

    let (phrases, rest) = split_phrases(query);

    let mut terms: Vec<String> = rest
        .chars()
        .filter(|&c| c != '(' && c != ')')
        .collect::<String>()
        .split(|c: char| c.is_whitespace() || c == '+')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();
    terms.extend(phrases);

    let mut terms: Vec<String> = terms
        .into_iter()
        .map(|term| term.replace('*', ""))
        .filter(|term| !term.is_empty())
        .collect();

    // 稳定排序，等长的词保持原有顺序
    terms.sort_by_key(|term| std::cmp::Reverse(term.chars().count()));
    TermList(terms)
}

/// 取出所有成对引号之间的短语，返回 (短语, 去掉短语后的剩余文本)。
/// 落单的引号原样留在剩余文本里。
fn split_phrases(query: &str) -> (Vec<String>, String) {
    let mut phrases = Vec::new();
    let mut rest = String::with_capacity(query.len());
    let mut tail = query;

    while let Some(open) = tail.find('"') {
        let after_open = &tail[open + 1..];
        let Some(close) = after_open.find('"') else {
            break;
        };
        rest.push_str(&tail[..open]);
        phrases.push(after_open[..close].to_string());
        tail = &after_open[close + 1..];
    }
    rest.push_str(tail);

    (phrases, rest)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/query.rs"]
mod tests;
