//! 搜索词广播
//!
//! 单生产者、多消费者：保存最新的 `TermList`，发布时同步回调所有订阅者。
//! 订阅者持有 `Subscription`，drop 即退订，之后不会再被回调。

use super::query::TermList;
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

new_key_type! {
    pub struct SubscriberId;
}

type Callback = Box<dyn FnMut(&TermList)>;

#[derive(Default)]
struct Inner {
    latest: TermList,
    // 回调期间临时取出，槽位留着
    subscribers: SlotMap<SubscriberId, Option<Callback>>,
    order: Vec<SubscriberId>,
}

#[derive(Clone, Default)]
pub struct TermBroadcast {
    inner: Rc<RefCell<Inner>>,
}

impl TermBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> TermList {
        self.inner.borrow().latest.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// 注册回调，并立即用当前最新值回调一次
    pub fn subscribe(&self, callback: impl FnMut(&TermList) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.subscribers.insert(Some(Box::new(callback)));
            inner.order.push(id);
            id
        };
        let latest = self.latest();
        self.dispatch(id, &latest);

        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn publish(&self, terms: TermList) {
        let ids = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = terms.clone();
            inner.order.clone()
        };
        tracing::debug!(
            terms = terms.len(),
            subscribers = ids.len(),
            "search terms published"
        );
        for id in ids {
            self.dispatch(id, &terms);
        }
    }

    fn dispatch(&self, id: SubscriberId, terms: &TermList) {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            match inner.subscribers.get_mut(id) {
                Some(slot) => slot.take(),
                None => return,
            }
        };
        let Some(mut callback) = callback else {
            return;
        };

        callback(terms);

        // 回调里可能已经退订
        if let Some(slot) = self.inner.borrow_mut().subscribers.get_mut(id) {
            *slot = Some(callback);
        }
    }
}

pub struct Subscription {
    id: SubscriberId,
    inner: Weak<RefCell<Inner>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let removed = {
            let Ok(mut inner) = inner.try_borrow_mut() else {
                tracing::warn!("term subscription dropped while broadcast is borrowed");
                return;
            };
            inner.order.retain(|id| *id != self.id);
            inner.subscribers.remove(self.id)
        };
        // 回调可能持有别的 Subscription，必须在释放借用之后再 drop
        drop(removed);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/broadcast.rs"]
mod tests;
