//! 异步搜索词流
//!
//! tokio 任务里对原始查询做防抖和去重，最新词表通过 `watch` 通道发布（只保留最新值）。
//! 所有 `QueryInput` 被 drop 后，任务先放出还在等待的查询再退出。
//! 截止时间统一按 tokio 时钟计算。

use crate::kernel::debounce::QueryDebouncer;
use crate::kernel::query::{extract_terms, TermList};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct QueryInput {
    tx: mpsc::UnboundedSender<String>,
}

impl QueryInput {
    /// 任务已经退出时返回 false
    pub fn send(&self, raw: impl Into<String>) -> bool {
        self.tx.send(raw.into()).is_ok()
    }
}

pub struct TermStream {
    pub input: QueryInput,
    pub terms: watch::Receiver<TermList>,
    pub task: JoinHandle<()>,
}

pub fn spawn_term_stream(runtime: &tokio::runtime::Handle, quiet: Duration) -> TermStream {
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (terms_tx, terms_rx) = watch::channel(TermList::new());
    let task = runtime.spawn(run(query_rx, terms_tx, QueryDebouncer::new(quiet)));

    TermStream {
        input: QueryInput { tx: query_tx },
        terms: terms_rx,
        task,
    }
}

async fn run(
    mut rx: mpsc::UnboundedReceiver<String>,
    tx: watch::Sender<TermList>,
    mut debouncer: QueryDebouncer,
) {
    loop {
        let next = match debouncer.deadline() {
            None => rx.recv().await,
            Some(deadline) => {
                let at = tokio::time::Instant::from_std(deadline);
                match tokio::time::timeout_at(at, rx.recv()).await {
                    Ok(next) => next,
                    Err(_) => {
                        publish(&mut debouncer, &tx);
                        continue;
                    }
                }
            }
        };

        match next {
            Some(raw) => debouncer.push(raw, tokio::time::Instant::now().into_std()),
            None => {
                publish(&mut debouncer, &tx);
                break;
            }
        }
    }
    tracing::debug!("term stream closed");
}

fn publish(debouncer: &mut QueryDebouncer, tx: &watch::Sender<TermList>) {
    let Some(deadline) = debouncer.deadline() else {
        return;
    };
    if let Some(query) = debouncer.poll(deadline) {
        let terms = extract_terms(Some(query.as_str()));
        tracing::debug!(query = %query, terms = terms.len(), "search terms extracted");
        tx.send_replace(terms);
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/query_stream.rs"]
mod tests;
