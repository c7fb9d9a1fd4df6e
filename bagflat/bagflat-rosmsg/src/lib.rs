//! ROS1 `.msg` schema support for `bagflat`.
//!
//! A `.msg` file is a line-oriented definition: one `<type> <name>` field per
//! line, `#` comments, and `NAME=value` constants (ignored here — constants
//! never appear in flattened output). [`parse_msg`] maps such text into a
//! [`RecordSchema`](bagflat_core::RecordSchema); [`FsSchemaSource`] serves
//! schemas straight from an on-disk message tree in the standard
//! `{root}/{pkg}/msg/{Type}.msg` package layout.

mod parser;
mod source;

pub use parser::parse_msg;
pub use source::FsSchemaSource;
