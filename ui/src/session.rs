//! Per-page session state and its transitions.
//!
//! A page owns one [`PageState`] for as long as it is mounted. Every change
//! goes through [`PageState::reduce`], a pure function of the old state and a
//! [`PageEvent`]; side effects (opening links, copying) happen in the views
//! before the corresponding event is dispatched.

use crate::content::model::Course;
use crate::core::lang::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState<C> {
    pub phase: LoadPhase,
    pub lang: Lang,
    pub selected: Option<Course>,
    pub content: C,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<C> {
    /// The initial document batch settled (successfully or not).
    Loaded(C),
    ToggleLanguage,
    SelectCourse(Course),
    CloseCourse,
    /// The registration link of the selected course was opened.
    Registered,
}

impl<C: Default> PageState<C> {
    pub fn loading() -> Self {
        Self::default()
    }
}

impl<C> PageState<C> {
    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn reduce(self, event: PageEvent<C>) -> Self {
        match event {
            PageEvent::Loaded(content) => match self.phase {
                LoadPhase::Loading => Self {
                    phase: LoadPhase::Ready,
                    content,
                    ..self
                },
                // Content is loaded once per activation.
                LoadPhase::Ready => self,
            },
            PageEvent::ToggleLanguage => Self {
                lang: self.lang.toggled(),
                ..self
            },
            PageEvent::SelectCourse(course) => Self {
                selected: Some(course),
                ..self
            },
            PageEvent::CloseCourse | PageEvent::Registered => Self {
                selected: None,
                ..self
            },
        }
    }
}
