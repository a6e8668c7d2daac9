//! Headless search-term core (no terminal dependency).

pub mod broadcast;
pub mod debounce;
pub mod highlight;
pub mod pipeline;
pub mod query;
pub mod services;
pub mod text_tree;
pub mod tsquery;

pub use broadcast::{SubscriberId, Subscription, TermBroadcast};
pub use debounce::{QueryDebouncer, DEFAULT_QUIET_PERIOD};
pub use highlight::{highlight_segments, HighlightError, Segment, TermMatcher};
pub use pipeline::{HighlightedText, SearchTermsPipeline};
pub use query::{extract_terms, TermList};
pub use text_tree::{apply_highlighting, remove_highlighting, Element, Node};
pub use tsquery::to_ts_query;
