//! # Selection State
//!
//! The only mutable state in the application: which tab is active, and
//! which lesson (if any) is expanded in the accordion.
//!
//! ```text
//! SelectionState
//! ├── active_tab: TabId              // one of three fixed views
//! └── expanded_lesson: Option<String> // at most one lesson open
//! ```
//!
//! The entire mutation surface is `select_tab` and `toggle_lesson`.
//! Nothing else writes to this struct, which is what makes the state
//! machine testable without a terminal: drive the two operations,
//! assert on the fields.
//!
//! Invalid tab values are unrepresentable in [`TabId`], so the
//! `InvalidTabId` error lives at the string boundary (`TabId::from_str`)
//! — the path the `--tab` CLI flag comes in through.

use std::fmt;
use std::str::FromStr;

use crate::core::content::Course;

/// One of the three mutually exclusive top-level content views.
///
/// Doubles as the transition key handed to whatever animates tab
/// switches: equal keys mean no transition to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Lesson,
    SelfStudy,
    Resources,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [TabId; 3] = [TabId::Lesson, TabId::SelfStudy, TabId::Resources];

    /// The next tab in display order, wrapping around.
    pub fn next(self) -> TabId {
        match self {
            TabId::Lesson => TabId::SelfStudy,
            TabId::SelfStudy => TabId::Resources,
            TabId::Resources => TabId::Lesson,
        }
    }

    /// The previous tab in display order, wrapping around.
    pub fn prev(self) -> TabId {
        match self {
            TabId::Lesson => TabId::Resources,
            TabId::SelfStudy => TabId::Lesson,
            TabId::Resources => TabId::SelfStudy,
        }
    }

    /// The tab's button label.
    pub fn label(self) -> &'static str {
        match self {
            TabId::Lesson => "Lesson Plans",
            TabId::SelfStudy => "Self-Study",
            TabId::Resources => "Resources",
        }
    }

    /// The stable key used on the CLI and in logs.
    pub fn key(self) -> &'static str {
        match self {
            TabId::Lesson => "lesson",
            TabId::SelfStudy => "self",
            TabId::Resources => "resources",
        }
    }
}

impl FromStr for TabId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(TabId::Lesson),
            "self" => Ok(TabId::SelfStudy),
            "resources" => Ok(TabId::Resources),
            other => Err(SelectionError::InvalidTabId(other.to_string())),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A tab key that is not one of `lesson`, `self`, `resources`.
    InvalidTabId(String),
    /// A lesson id that doesn't exist in the current course. The caller
    /// holds a stale id; the mutation is rejected, state is unchanged.
    UnknownLessonId(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidTabId(key) => {
                write!(f, "invalid tab id {key:?} (expected lesson, self, or resources)")
            }
            SelectionError::UnknownLessonId(id) => {
                write!(f, "unknown lesson id: {id:?}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

// ============================================================================
// State Machine
// ============================================================================

/// Runtime record of which tab and which lesson are visible. Process-local,
/// discarded on exit.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    active_tab: TabId,
    expanded_lesson: Option<String>,
}

impl SelectionState {
    /// Initialization rule: the lesson tab is active and the first lesson
    /// is expanded (nothing, if the course has no lessons). This is the
    /// documented default, not an incidental one.
    pub fn new(course: &Course) -> Self {
        Self {
            active_tab: TabId::Lesson,
            expanded_lesson: course.lessons.first().map(|l| l.id.clone()),
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// The id of the currently expanded lesson, if any.
    pub fn expanded_lesson(&self) -> Option<&str> {
        self.expanded_lesson.as_deref()
    }

    /// Switch the active tab. Does not touch the accordion: expansion
    /// memory deliberately survives tab switches. Selecting the tab
    /// that is already active is a no-op.
    pub fn select_tab(&mut self, tab: TabId) {
        if self.active_tab != tab {
            log::debug!("Tab: {} -> {}", self.active_tab.key(), tab.key());
            self.active_tab = tab;
        }
    }

    /// Toggle a lesson's expansion. Collapses the lesson if it is the
    /// one currently expanded; otherwise expands it, implicitly
    /// collapsing whatever was open (single-expand accordion).
    ///
    /// The id must exist in `course.lessons`; an unknown id is rejected
    /// with `UnknownLessonId` and the state is left unchanged.
    pub fn toggle_lesson(&mut self, course: &Course, id: &str) -> Result<(), SelectionError> {
        if !course.lessons.iter().any(|l| l.id == id) {
            return Err(SelectionError::UnknownLessonId(id.to_string()));
        }
        if self.expanded_lesson.as_deref() == Some(id) {
            self.expanded_lesson = None;
        } else {
            self.expanded_lesson = Some(id.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_course;

    #[test]
    fn test_initial_state_expands_first_lesson() {
        let course = test_course();
        let selection = SelectionState::new(&course);
        assert_eq!(selection.active_tab(), TabId::Lesson);
        assert_eq!(selection.expanded_lesson(), Some("a"));
    }

    #[test]
    fn test_initial_state_with_empty_lesson_list() {
        let mut course = test_course();
        course.lessons.clear();
        let selection = SelectionState::new(&course);
        assert_eq!(selection.active_tab(), TabId::Lesson);
        assert_eq!(selection.expanded_lesson(), None);
    }

    #[test]
    fn test_select_tab_preserves_accordion() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);

        selection.select_tab(TabId::SelfStudy);
        assert_eq!(selection.active_tab(), TabId::SelfStudy);
        assert_eq!(selection.expanded_lesson(), Some("a"));

        // Selecting the already-active tab changes nothing observable.
        let before = selection.clone();
        selection.select_tab(TabId::SelfStudy);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);

        // Expanded -> collapsed -> expanded again.
        selection.toggle_lesson(&course, "a").unwrap();
        assert_eq!(selection.expanded_lesson(), None);
        selection.toggle_lesson(&course, "a").unwrap();
        assert_eq!(selection.expanded_lesson(), Some("a"));
    }

    #[test]
    fn test_single_expand_policy() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);

        // Expanding B implicitly collapses A — never two open at once.
        selection.toggle_lesson(&course, "b").unwrap();
        assert_eq!(selection.expanded_lesson(), Some("b"));
    }

    #[test]
    fn test_unknown_lesson_id_leaves_state_unchanged() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);
        let before = selection.clone();

        let err = selection.toggle_lesson(&course, "nonexistent").unwrap_err();
        assert_eq!(err, SelectionError::UnknownLessonId("nonexistent".to_string()));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("lesson".parse::<TabId>().unwrap(), TabId::Lesson);
        assert_eq!("self".parse::<TabId>().unwrap(), TabId::SelfStudy);
        assert_eq!("resources".parse::<TabId>().unwrap(), TabId::Resources);

        let err = "lessons".parse::<TabId>().unwrap_err();
        assert_eq!(err, SelectionError::InvalidTabId("lessons".to_string()));
        assert!(err.to_string().contains("invalid tab id"));
    }

    #[test]
    fn test_tab_cycling_covers_all_tabs() {
        let mut tab = TabId::Lesson;
        for expected in [TabId::SelfStudy, TabId::Resources, TabId::Lesson] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
        assert_eq!(TabId::Lesson.prev(), TabId::Resources);
        assert_eq!(TabId::SelfStudy.prev(), TabId::Lesson);
    }
}
