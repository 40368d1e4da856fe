//! # Core Domain Logic
//!
//! Everything behavioral about the course preview, with no UI types.
//! The TUI adapter is the only other layer, and it talks to this module
//! exclusively through the selection operations and the view resolver.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │                              │
//!                 │  content    (course tree)    │
//!                 │  catalog    (built-in data)  │
//!                 │  selection  (tab + accordion)│
//!                 │  view       (resolver)       │
//!                 │                              │
//!                 │  No UI. One file read, ever. │
//!                 └──────────────┬───────────────┘
//!                                │ ViewModel / operations
//!                                ▼
//!                       ┌────────────────┐
//!                       │  TUI Adapter   │
//!                       │   (ratatui)    │
//!                       └────────────────┘
//! ```
//!
//! The one file read is `content::load_course` at startup; after that
//! the course tree is immutable and nothing in core touches the outside
//! world.
//!
//! ## Modules
//!
//! - [`content`]: the immutable `Course` tree and its invariants
//! - [`catalog`]: the course shipped with the binary
//! - [`selection`]: `SelectionState` — the only mutable state
//! - [`view`]: `resolve_view` — (course, selection) → `ViewModel`

pub mod catalog;
pub mod content;
pub mod selection;
pub mod view;
