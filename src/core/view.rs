//! # View Resolver
//!
//! Pure mapping from (content, selection) to what the render surface
//! should draw. No I/O, no mutation, no reordering: lists come out in
//! the order the course stores them.
//!
//! ```text
//! Course + SelectionState  →  resolve_view()  →  ViewModel
//! ```
//!
//! Exactly one of the three sections appears in the output. The other
//! two are absent, not hidden — the render surface cannot leak content
//! from an inactive tab because it never receives it.

use crate::core::content::{Course, Highlight, Lesson, PathStep, Resources, SelfStudy};
use crate::core::selection::{SelectionState, TabId};

/// Everything the render surface needs for one frame. Borrows from the
/// course; cheap to rebuild after every state change.
#[derive(Debug, PartialEq)]
pub struct ViewModel<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub tags: &'a [String],
    /// The active tab, doubling as the transition key for whatever
    /// animates tab switches.
    pub active_tab: TabId,
    pub section: SectionView<'a>,
}

/// The single live section.
#[derive(Debug, PartialEq)]
pub enum SectionView<'a> {
    Lesson(LessonSection<'a>),
    SelfStudy(&'a SelfStudy),
    Resources(&'a Resources),
}

#[derive(Debug, PartialEq)]
pub struct LessonSection<'a> {
    pub highlights: &'a [Highlight],
    pub path: &'a [PathStep],
    pub lessons: Vec<LessonView<'a>>,
}

/// One accordion entry with its resolved expansion flag. The render
/// surface materializes `lesson.content` only when `is_expanded`.
#[derive(Debug, PartialEq)]
pub struct LessonView<'a> {
    pub lesson: &'a Lesson,
    pub is_expanded: bool,
}

/// Resolve the visible content blocks for the current selection.
pub fn resolve_view<'a>(course: &'a Course, selection: &SelectionState) -> ViewModel<'a> {
    let section = match selection.active_tab() {
        TabId::Lesson => SectionView::Lesson(LessonSection {
            highlights: &course.highlights,
            path: &course.path,
            lessons: course
                .lessons
                .iter()
                .map(|lesson| LessonView {
                    is_expanded: selection.expanded_lesson() == Some(lesson.id.as_str()),
                    lesson,
                })
                .collect(),
        }),
        TabId::SelfStudy => SectionView::SelfStudy(&course.self_study),
        TabId::Resources => SectionView::Resources(&course.resources),
    };

    ViewModel {
        title: &course.title,
        subtitle: &course.subtitle,
        tags: &course.tags,
        active_tab: selection.active_tab(),
        section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_course;

    #[test]
    fn test_exactly_one_section_matches_active_tab() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);

        for tab in TabId::ALL {
            selection.select_tab(tab);
            let vm = resolve_view(&course, &selection);
            assert_eq!(vm.active_tab, tab);
            match (tab, &vm.section) {
                (TabId::Lesson, SectionView::Lesson(_)) => {}
                (TabId::SelfStudy, SectionView::SelfStudy(_)) => {}
                (TabId::Resources, SectionView::Resources(_)) => {}
                (tab, section) => panic!("tab {tab:?} resolved to {section:?}"),
            }
        }
    }

    #[test]
    fn test_expanded_flag_follows_selection() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);

        let vm = resolve_view(&course, &selection);
        let SectionView::Lesson(section) = vm.section else {
            panic!("expected lesson section");
        };
        assert!(section.lessons[0].is_expanded);
        assert!(!section.lessons[1].is_expanded);

        selection.toggle_lesson(&course, "b").unwrap();
        let vm = resolve_view(&course, &selection);
        let SectionView::Lesson(section) = vm.section else {
            panic!("expected lesson section");
        };
        assert!(!section.lessons[0].is_expanded);
        assert!(section.lessons[1].is_expanded);
        assert_eq!(
            section.lessons.iter().filter(|l| l.is_expanded).count(),
            1
        );
    }

    #[test]
    fn test_lesson_order_is_stored_order() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);
        selection.toggle_lesson(&course, "b").unwrap();

        let vm = resolve_view(&course, &selection);
        let SectionView::Lesson(section) = vm.section else {
            panic!("expected lesson section");
        };
        let view_ids: Vec<&str> = section.lessons.iter().map(|l| l.lesson.id.as_str()).collect();
        let stored_ids: Vec<&str> = course.lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(view_ids, stored_ids);
    }

    #[test]
    fn test_header_data_is_tab_independent() {
        let course = test_course();
        let mut selection = SelectionState::new(&course);
        selection.select_tab(TabId::Resources);

        let vm = resolve_view(&course, &selection);
        assert_eq!(vm.title, course.title);
        assert_eq!(vm.subtitle, course.subtitle);
        assert_eq!(vm.tags, course.tags.as_slice());
    }
}
