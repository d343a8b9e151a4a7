use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{
    DonorSession, DonorSummary, LocationEvent, LocationPhase, LocationRequestOptions,
    SessionError,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::donor::get_donor_details;
use crate::geolocation;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Shared flag cleared when the owning component unmounts.
///
/// Async work spawned from an effect checks it before touching component
/// state, so responses that arrive late are dropped.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

/// A task that runs at most once, and never after the handle is dropped.
///
/// The timer only holds the trigger; the effect cleanup owns the handle.
pub struct DelayedStart {
    task: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl DelayedStart {
    pub fn new<F>(task: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            task: Rc::new(RefCell::new(Some(Box::new(task)))),
        }
    }

    /// Callback for the timer. Does nothing once the handle is gone or the task already ran.
    pub fn trigger(&self) -> impl FnOnce() + 'static {
        let task = Rc::downgrade(&self.task);
        move || {
            let pending = match task.upgrade() {
                Some(cell) => {
                    let pending = cell.borrow_mut().take();
                    pending
                }
                None => None,
            };
            if let Some(pending) = pending {
                pending();
            }
        }
    }
}

impl Drop for DelayedStart {
    fn drop(&mut self) {
        self.task.borrow_mut().take();
    }
}

/// State the dashboard starts from, calling `fetch` only when there is a session.
pub fn start_donor_fetch<F>(session: Option<DonorSession>, fetch: F) -> FetchState<DonorSummary>
where
    F: FnOnce(DonorSession),
{
    match session {
        Some(session) => {
            fetch(session);
            FetchState::Loading
        }
        None => {
            log::warn!("Dashboard mounted without a donor session, skipping fetch");
            FetchState::Error(SessionError::MissingDonorId.to_string())
        }
    }
}

/// Phase after the start-up delay; `request` is issued only when the prompt is shown.
pub fn begin_location_request<R>(supported: bool, request: R) -> LocationPhase
where
    R: FnOnce(LocationPhase),
{
    let prompted = LocationPhase::Idle.apply(LocationEvent::DelayElapsed { supported });
    if prompted.show_prompt() {
        request(prompted.clone());
    } else {
        log::warn!("Geolocation is not available in this browser");
    }
    prompted
}

fn initial_fetch_state(session: &Option<DonorSession>) -> FetchState<DonorSummary> {
    match session {
        Some(_) => FetchState::Loading,
        None => FetchState::Error(SessionError::MissingDonorId.to_string()),
    }
}

/// Loads the donor summary once per session. Without a session no request is made.
#[hook]
pub fn use_donor_summary(session: Option<DonorSession>) -> FetchState<DonorSummary> {
    let fetch_state = use_state_eq({
        let session = session.clone();
        move || initial_fetch_state(&session)
    });

    {
        let fetch_state = fetch_state.clone();
        use_effect_with(session, move |session| {
            let guard = MountGuard::new();

            let started = start_donor_fetch(session.clone(), |session| {
                let guard = guard.clone();
                let fetch_state = fetch_state.clone();
                spawn_local(async move {
                    let result = get_donor_details(&session).await;
                    if !guard.is_mounted() {
                        log::debug!("Dropping donor details that arrived after unmount");
                        return;
                    }
                    fetch_state.set(match result {
                        Ok(summary) => FetchState::Success(summary),
                        Err(e) => FetchState::Error(e.to_string()),
                    });
                });
            });
            fetch_state.set(started);

            move || guard.release()
        });
    }

    (*fetch_state).clone()
}

/// Requests the browser location once, `delay_ms` after mount.
///
/// Unmounting before the delay drops the start handle and no request is issued.
#[hook]
pub fn use_location_request(delay_ms: u32) -> LocationPhase {
    let phase = use_state(LocationPhase::default);

    {
        let phase = phase.clone();
        use_effect_with(delay_ms, move |&delay_ms| {
            let guard = MountGuard::new();

            let start = {
                let guard = guard.clone();
                DelayedStart::new(move || {
                    let supported = geolocation::is_supported();
                    let prompted = begin_location_request(supported, |prompted| {
                        let phase = phase.clone();
                        log::debug!("Requesting current position");
                        spawn_local(async move {
                            let event = match geolocation::current_position(
                                LocationRequestOptions::default(),
                            )
                            .await
                            {
                                Ok(position) => {
                                    log::info!("Location fix received");
                                    LocationEvent::Fixed(position)
                                }
                                Err(e) => {
                                    log::warn!("Location request failed: {}", e.kind());
                                    LocationEvent::Failed(e)
                                }
                            };

                            if guard.is_mounted() {
                                phase.set(prompted.apply(event));
                            }
                        });
                    });
                    phase.set(prompted);
                })
            };
            let timeout = Timeout::new(delay_ms, start.trigger());

            move || {
                guard.release();
                drop(timeout);
                drop(start);
            }
        });
    }

    (*phase).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_guard_shared_between_clones() {
        let guard = MountGuard::new();
        let task_copy = guard.clone();
        assert!(task_copy.is_mounted());

        guard.release();
        assert!(!task_copy.is_mounted());
    }

    #[test]
    fn test_initial_state_without_session_is_error() {
        let state = initial_fetch_state(&None);
        assert!(!state.is_loading());
        assert_eq!(
            state.error().map(String::as_str),
            Some("No donor ID found. Please log in again.")
        );
    }

    #[test]
    fn test_no_session_never_fetches() {
        let mut fetched = false;
        let state = start_donor_fetch(None, |_| fetched = true);

        assert!(!fetched);
        assert_eq!(
            state.error().map(String::as_str),
            Some("No donor ID found. Please log in again.")
        );
    }

    #[test]
    fn test_session_fetches_once() {
        let session = DonorSession::from_stored(Some("d-7".to_string())).ok();
        let mut fetched_for = Vec::new();
        let state = start_donor_fetch(session, |s| fetched_for.push(s.donor_id().to_string()));

        assert_eq!(fetched_for, ["d-7"]);
        assert!(state.is_loading());
    }

    #[test]
    fn test_dropped_start_never_runs() {
        let ran = Rc::new(Cell::new(false));
        let start = DelayedStart::new({
            let ran = ran.clone();
            move || ran.set(true)
        });
        let fire = start.trigger();

        drop(start);
        fire();

        assert!(!ran.get());
    }

    #[test]
    fn test_start_runs_once_when_fired() {
        let runs = Rc::new(Cell::new(0));
        let start = DelayedStart::new({
            let runs = runs.clone();
            move || runs.set(runs.get() + 1)
        });

        let first = start.trigger();
        let second = start.trigger();
        first();
        second();

        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_unsupported_browser_issues_no_request() {
        let mut requested = false;
        let phase = begin_location_request(false, |_| requested = true);

        assert!(!requested);
        assert_eq!(phase, LocationPhase::Unsupported);
    }

    #[test]
    fn test_supported_browser_requests_while_prompted() {
        let mut requested_in = None;
        let phase = begin_location_request(true, |p| requested_in = Some(p));

        assert_eq!(requested_in, Some(LocationPhase::Prompted));
        assert!(phase.show_prompt());
    }

    #[test]
    fn test_initial_state_with_session_is_loading() {
        let session = DonorSession::from_stored(Some("d-1".to_string())).ok();
        let state = initial_fetch_state(&session);
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }
}
