//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::content::{
    Course, Highlight, Lesson, PathStep, RenderableBlock, Resources, SelfStudy, Step,
};

/// A small two-lesson course (ids "a" and "b") for state-machine and
/// resolver tests. Deliberately tiny: the built-in catalog is for the
/// binary, this is for assertions.
pub fn test_course() -> Course {
    Course {
        title: "Test Course".to_string(),
        subtitle: "A course for tests".to_string(),
        tags: vec!["one".to_string(), "two".to_string()],
        highlights: vec![Highlight {
            title: "Highlight".to_string(),
            description: "Why this course matters.".to_string(),
        }],
        path: vec![PathStep {
            title: "Start".to_string(),
            badge: "step".to_string(),
            description: "Where the course begins.".to_string(),
        }],
        lessons: vec![
            Lesson {
                id: "a".to_string(),
                title: "Lesson A".to_string(),
                meta: "40 min".to_string(),
                subtitle: "First lesson".to_string(),
                content: RenderableBlock::Text {
                    text: "Body of lesson A.".to_string(),
                },
            },
            Lesson {
                id: "b".to_string(),
                title: "Lesson B".to_string(),
                meta: "40 min".to_string(),
                subtitle: "Second lesson".to_string(),
                content: RenderableBlock::List {
                    items: vec!["first point".to_string(), "second point".to_string()],
                },
            },
        ],
        self_study: SelfStudy {
            title: "Self-study".to_string(),
            subtitle: "On your own".to_string(),
            steps: vec![Step {
                title: "Step 1".to_string(),
                badge: "5 min".to_string(),
                points: vec!["do the thing".to_string()],
            }],
            deliverables: vec!["a worksheet".to_string()],
        },
        resources: Resources {
            title: "Resources".to_string(),
            subtitle: "Links go here".to_string(),
        },
    }
}
