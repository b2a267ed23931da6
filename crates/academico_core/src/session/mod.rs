//! Per-run shell session state.
//!
//! # Responsibility
//! - Hold the currently selected course and the curriculum grid as one
//!   explicit value owned by the caller.
//!
//! # Invariants
//! - A session starts with no selected course and an empty grid.
//! - Nothing in a session is persisted.

pub mod grid;

use crate::model::course::CourseDetail;
use grid::CurriculumGrid;
use log::info;

#[derive(Debug, Default)]
pub struct Session {
    selected_course: Option<CourseDetail>,
    grid: CurriculumGrid,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected course. The grid is kept as is.
    pub fn select_course(&mut self, course: CourseDetail) {
        info!(
            "event=course_select module=session status=ok course_id={} subjects={}",
            course.course.id,
            course.subjects.len()
        );
        self.selected_course = Some(course);
    }

    pub fn selected_course(&self) -> Option<&CourseDetail> {
        self.selected_course.as_ref()
    }

    pub fn grid(&self) -> &CurriculumGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut CurriculumGrid {
        &mut self.grid
    }
}
