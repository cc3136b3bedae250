//! Core parsing and aggregation engine for tab-delimited timesheets.
//!
//! This crate contains the fundamental types and logic for:
//! - Time resolution: parsing time tokens against an ordered format list
//! - Line tokenizing: splitting on tab runs and classifying lines
//! - Abbreviation resolution: expanding elided labels against history
//! - Entry building: carrying start times and history across lines
//! - Aggregation: merging entries into a category tree with totals
//!
//! The crate does no I/O; callers feed it comment-stripped lines and
//! render the resulting tree themselves.

pub mod abbrev;
pub mod builder;
pub mod error;
pub mod line;
pub mod options;
pub mod time;
pub mod tree;

pub use abbrev::SiblingHistory;
pub use builder::{EntryBuilder, TaskEntry, build_entries};
pub use error::{LineError, ParseError};
pub use line::{RawLine, tokenize};
pub use options::{DEFAULT_BLACKLIST, DEFAULT_ELISION_MARKER, Options};
pub use time::{DEFAULT_TIME_FORMATS, parse_time};
pub use tree::{CategoryNode, CategoryTree, merge};
