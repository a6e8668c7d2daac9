//! 把搜索框语法翻译成 PostgreSQL tsquery
//!
//! - `"quick brown"` => `quick <-> brown`
//! - `a + b` => `a & b`
//! - 其余空白 => `|`

pub fn to_ts_query(query: Option<&str>) -> String {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return String::new(),
    };

    let mut result = String::with_capacity(query.len());
    let mut phrase = String::new();
    let mut in_quote = false;
    for c in query.chars() {
        if c == '"' {
            in_quote = !in_quote;
            if !in_quote {
                let words: Vec<&str> = phrase
                    .split(is_space)
                    .filter(|w| !w.is_empty())
                    .collect();
                result.push_str(&words.join("<->"));
                phrase.clear();
            }
            continue;
        }
        if in_quote {
            phrase.push(c);
        } else {
            result.push(c);
        }
    }

    replace_operators(&result)
        .replace('&', " & ")
        .replace('|', " | ")
        .replace("<->", " <-> ")
        .trim()
        .to_string()
}

/// `<ws>+<ws>` => `&`，剩下的空白段 => `|`
fn replace_operators(text: &str) -> String {
    let runs = whitespace_runs(text);
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < runs.len() {
        let (is_ws, slice) = runs[i];
        if is_ws
            && i + 2 < runs.len()
            && runs[i + 1] == (false, "+")
            && runs[i + 2].0
        {
            out.push('&');
            i += 3;
            continue;
        }
        if is_ws {
            out.push('|');
        } else {
            out.push_str(slice);
        }
        i += 1;
    }
    out
}

/// 把文本切成交替的 (是否空白, 片段)
fn whitespace_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (idx, c) in text.char_indices() {
        let is_ws = is_space(c);
        match current {
            Some(kind) if kind == is_ws => {}
            Some(kind) => {
                runs.push((kind, &text[start..idx]));
                start = idx;
                current = Some(is_ws);
            }
            None => current = Some(is_ws),
        }
    }
    if let Some(kind) = current {
        runs.push((kind, &text[start..]));
    }
    runs
}

/// 只认 ASCII 空白（含 `\x0B`），全角空格、不换行空格都算普通字符
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tsquery.rs"]
mod tests;
