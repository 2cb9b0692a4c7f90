//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the page-level wiring: it loads configuration, builds the shell
//! and theme state, attaches the browser listeners once, and routes their
//! events into the shell. Everything below reads that state from context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use pagecore::config::ShellConfig;
use pagecore::contact::ContactFormModel;
use pagecore::events::{EventBus, PageEvent, Subscription};
use pagecore::route;
use pagecore::scroll::{FrameRequest, ScrollTracker};
use pagecore::shell::PageShell;

use crate::components::back_to_top::BackToTop;
use crate::components::crash_screen::CrashScreen;
use crate::components::navbar::Navbar;
use crate::components::offline_indicator::OfflineIndicator;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::sections::Footer;
use crate::content;
use crate::pages::{home::HomePage, not_found::NotFoundPage, project_details::ProjectDetailsPage};
use crate::state::shell::ShellHandle;
use crate::state::theme::{ThemeState, init_theme};
use crate::state::ui::UiState;
use crate::util::{page_events, scroll_dom, site_config};

/// Root application component.
///
/// Provides the shell, theme, contact form, and config contexts, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = site_config::load();
    let handle = ShellHandle::new(
        PageShell::new(config.clone(), scroll_dom::viewport_width()),
        UiState::with_title(&config.site_title),
    );
    handle.shell.update(|s| s.set_online(page_events::is_online()));
    let theme = RwSignal::new(init_theme(&config));
    let contact = RwSignal::new(ContactFormModel::new());

    provide_context(config.clone());
    provide_context(handle);
    provide_context(theme);
    provide_context(contact);

    let bus = EventBus::<PageEvent>::new();
    let listeners = page_events::attach(&bus);
    let subscription = subscribe_shell(&bus, handle, theme, &config);
    let wiring = StoredValue::new_local((bus, listeners, subscription));
    on_cleanup(move || wiring.dispose());

    view! {
        <Title text=move || handle.ui.with(|u| u.document_title.clone())/>

        <ErrorBoundary fallback=|_| view! { <CrashScreen/> }>
            <Router>
                <RouteSync/>
                <ScrollProgress/>
                <OfflineIndicator/>
                <Navbar/>
                <main id="main-content" class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("project"), ParamSegment("id")) view=ProjectDetailsPage/>
                        <Route path=StaticSegment("404") view=NotFoundPage/>
                    </Routes>
                </main>
                <Footer/>
                <BackToTop/>
            </Router>
        </ErrorBoundary>
    }
}

/// Feeds route changes into the shell: scroll reset, menu close, title.
#[component]
fn RouteSync() -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        let title = project_title(&path);
        handle.dispatch(|s| s.on_route_change(&path, title));
    });
}

fn project_title(path: &str) -> Option<&'static str> {
    let route::Route::Project(key) = route::Route::parse(path) else {
        return None;
    };
    content::portfolio().ok()?.find_project(&key).map(|p| p.title.as_str())
}

/// Route bus events into the shell and theme. Scroll events are coalesced to
/// one sample per animation frame.
fn subscribe_shell(
    bus: &EventBus<PageEvent>,
    handle: ShellHandle,
    theme: RwSignal<ThemeState>,
    config: &ShellConfig,
) -> Subscription {
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(config.scroll_threshold_px)));
    tracker.borrow_mut().activate();

    // Pick up a restored scroll position once the first frame has rendered.
    let initial = Rc::clone(&tracker);
    scroll_dom::request_frame(move || {
        let state = initial.borrow_mut().sample(scroll_dom::read_metrics());
        apply_scroll(handle, &state);
    });

    bus.subscribe(move |event| match event {
        PageEvent::Scroll(metrics) => {
            if tracker.borrow_mut().on_scroll(*metrics) == FrameRequest::Schedule {
                let tracker = Rc::clone(&tracker);
                scroll_dom::request_frame(move || {
                    let sampled = tracker.borrow_mut().on_frame();
                    if let Some(state) = sampled {
                        apply_scroll(handle, &state);
                    }
                });
            }
        }
        PageEvent::Resize { width } => handle.dispatch(|s| s.on_resize(*width)),
        PageEvent::Online(online) => handle.shell.update(|s| s.set_online(*online)),
        PageEvent::Visibility(visible) => handle.dispatch(|s| s.set_visible(*visible)),
        PageEvent::Key(input) => handle.dispatch(|s| s.on_key(input)),
        PageEvent::SystemTheme { dark } => theme.update(|t| t.on_system_change(*dark)),
    })
}

fn apply_scroll(handle: ShellHandle, state: &pagecore::scroll::ScrollState) {
    let sections = scroll_dom::section_offsets();
    handle.shell.update(|s| {
        if s.on_scroll_sample(state, &sections) {
            log::debug!("active section: {}", s.active());
        }
    });
    scroll_dom::set_scroll_progress(state.progress_percent);
}
