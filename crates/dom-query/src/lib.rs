//! Query layer over an immutable, arena-owned document tree.
//!
//! Locate nodes by identifier, tag, attribute set, attribute-value pattern
//! or class membership without re-implementing tree search at every call
//! site.
//!
//! ## Core design
//!
//! ```text
//! query functions → compose → matchers → drive → traversal engine
//!                                                     ↓
//!                                          DomArena (owned, read-only)
//!                                                     ↓
//!                                          Matches (caller's accumulator)
//! ```
//!
//! The engine walks depth-first (or along a sibling chain) and feeds each
//! node to a [`Visit`] implementation; matchers append accepted node ids to
//! the caller-owned accumulator and may stop the whole walk early. Queries
//! share no state: running them concurrently over one `&DomArena` is safe.

pub mod arena;
pub mod error;
pub mod matcher;
pub mod query;
pub mod traverse;
pub mod types;
pub mod util;

pub use arena::DomArena;
pub use error::{DomError, Result};
pub use query::*;
pub use traverse::{depth_first, siblings, Direction, Flow, Matches, Visit, VisitFn};
pub use types::*;
pub use util::text_content;
