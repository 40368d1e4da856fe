//! # TUI Components
//!
//! The render surface: stateless presentational pieces that take data
//! and produce widgets or pre-wrapped lines. The only event-producing
//! primitives are the tab buttons and the accordion headers, and both
//! delegate their effects up to the selection state — nothing in here
//! owns behavioral state.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── cards.rs      (card / section-title / pill primitives)
//! ├── blocks.rs     (RenderableBlock tree → styled lines)
//! ├── header.rs     (course masthead)
//! ├── tabs.rs       (tab buttons + click hit testing)
//! ├── timeline.rs   (course path)
//! └── accordion.rs  (lesson rows)
//! ```
//!
//! Each file co-locates its component, its helpers, and its tests.

pub mod accordion;
pub mod blocks;
pub mod cards;
pub mod header;
pub mod tabs;
pub mod timeline;

pub use accordion::LessonRow;
pub use header::Header;
pub use tabs::{TabBar, TabBarState};
