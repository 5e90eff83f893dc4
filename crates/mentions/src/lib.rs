//! Mention extraction for update text.
//!
//! Updates address users by writing their email address anywhere in the
//! text. This crate finds those addresses so the relationship service can
//! add them to the recipient set.
//!
//! # Example
//!
//! ```
//! use socialgraph_mentions::extract_mentions;
//!
//! let mentions = extract_mentions("Hello World! kate@example.com");
//! assert_eq!(mentions, vec!["kate@example.com"]);
//! ```

mod parser;

pub use parser::{extract_mentions, mentions};
