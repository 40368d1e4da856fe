//! # Content Model
//!
//! The immutable course tree that drives rendering. Built once at
//! startup — either the built-in catalog or a JSON file via `--course` —
//! and never mutated afterwards. The only runtime-mutable thing in the
//! whole application is the selection state in [`super::selection`].
//!
//! Lesson bodies are [`RenderableBlock`] trees: a tagged structural
//! union the render surface pattern-matches on. The state machine never
//! looks inside them.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// The whole course document. Singleton, read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub highlights: Vec<Highlight>,
    /// The narrative progression shown as a timeline. Order is meaningful.
    pub path: Vec<PathStep>,
    pub lessons: Vec<Lesson>,
    pub self_study: SelfStudy,
    pub resources: Resources,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub title: String,
    pub badge: String,
    pub description: String,
}

/// One accordion entry. `id` is the join key the selection state uses;
/// it must be unique across the lesson list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// Short metadata shown as a pill next to the title ("40 min | ...").
    pub meta: String,
    pub subtitle: String,
    pub content: RenderableBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfStudy {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<Step>,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub badge: String,
    pub points: Vec<String>,
}

/// Placeholder in this snapshot — real assets (file links, QR codes)
/// belong to a backend that doesn't exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub title: String,
    pub subtitle: String,
}

/// Structural content tree for lesson bodies.
///
/// A tagged union rather than anything executable, so the render surface
/// can pattern-match on it and course files can carry it as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderableBlock {
    /// A run of plain text.
    Text { text: String },
    /// A bold label followed by text ("Scenario prompt: ...").
    Labeled { label: String, text: String },
    /// A bulleted list.
    List { items: Vec<String> },
    /// A titled group, rendered indented under its title.
    Card {
        title: String,
        body: Vec<RenderableBlock>,
    },
    /// Side-by-side in the original page; sequential in a terminal.
    Columns { columns: Vec<RenderableBlock> },
    /// Children in order with breathing room between them.
    Stack { children: Vec<RenderableBlock> },
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ContentError {
    /// Two lessons share an id. Construction-time invariant violation.
    DuplicateLessonId(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::DuplicateLessonId(id) => {
                write!(f, "duplicate lesson id: {id:?}")
            }
            ContentError::Io(e) => write!(f, "course I/O error: {e}"),
            ContentError::Parse(e) => write!(f, "course parse error: {e}"),
        }
    }
}

impl std::error::Error for ContentError {}

// ============================================================================
// Construction & Loading
// ============================================================================

impl Course {
    /// Check the construction-time invariants. Fails fast with
    /// `DuplicateLessonId` so a malformed course never reaches the view.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for lesson in &self.lessons {
            if !seen.insert(lesson.id.as_str()) {
                return Err(ContentError::DuplicateLessonId(lesson.id.clone()));
            }
        }
        Ok(())
    }

    /// Parse a course from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Course, ContentError> {
        let course: Course = serde_json::from_str(json).map_err(ContentError::Parse)?;
        course.validate()?;
        Ok(course)
    }
}

/// Load a course from a JSON file. Errors here are fatal at startup:
/// the terminal UI is never entered with a malformed course.
pub fn load_course(path: &Path) -> Result<Course, ContentError> {
    let contents = fs::read_to_string(path).map_err(ContentError::Io)?;
    let course = Course::from_json(&contents)?;
    info!(
        "Loaded course {:?} from {} ({} lessons)",
        course.title,
        path.display(),
        course.lessons.len()
    );
    Ok(course)
}
