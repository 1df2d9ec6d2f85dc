//! Page controllers.
//!
//! Each page mounts one [`PageState`], loads its documents from the
//! [`DataSource`] the shell provided (or the platform default) and routes
//! every interaction through [`PageState::reduce`].

use dioxus::prelude::*;

use crate::content::{DataSource, PageContent};
use crate::session::{PageEvent, PageState};

mod home;
pub use home::Home;

mod archive;
pub use archive::ArchivedCourses;

/// Handle to a mounted page's state.
pub struct PageHandle<C: 'static> {
    state: Signal<PageState<C>>,
}

impl<C: 'static> Clone for PageHandle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: 'static> Copy for PageHandle<C> {}

impl<C: Clone + 'static> PageHandle<C> {
    pub fn read(&self) -> PageState<C> {
        (self.state)()
    }

    pub fn dispatch(&self, event: PageEvent<C>) {
        let mut state = self.state;
        let next = state.peek().clone().reduce(event);
        state.set(next);
    }
}

/// Mount the state of a page and start loading its documents.
pub fn use_page<C: PageContent>() -> PageHandle<C> {
    let state = use_signal(PageState::<C>::loading);
    let source = try_use_context::<DataSource>().unwrap_or_else(DataSource::platform_default);
    let handle = PageHandle { state };

    use_future(move || {
        let source = source.clone();
        async move {
            tracing::debug!(page = C::PAGE, resources = C::RESOURCES.len(), "loading page content");
            let loaded = C::load(&source).await;
            loaded.report.log(C::PAGE);
            handle.dispatch(PageEvent::Loaded(loaded.content));
        }
    });

    handle
}
