//! Event-driven app shell
//!
//! The shell owns the screen state and reacts to [`ShellEvent`]s:
//!
//! ```text
//! Idle --Start--> AcquiringLocation --granted+fix--> Loading --ok--> Ready
//!                        |                              |
//!                  denied / no fix                    failure
//!                        v                              v
//!                      Error                          Error (list kept)
//! ```
//!
//! Every ranking request takes a generation number. A response is applied
//! only if its generation is still the latest, so a slow response can never
//! overwrite a newer one.

use crate::backend::RestroomBackend;
use crate::error::{AppError, ErrorKind};
use crate::filter::{FilterBanner, FilterSelection, FilterState};
use crate::location::{LocationProvider, Permission};
use crate::notify::{Notification, Notifier};
use crate::view::{DetailView, ListView, MapView};
use chrono::{Local, NaiveTime};
use restroom_api_client::models::{BathroomRecord, Rating, UserContext};
use restroom_api_client::ApiResult;
use restroom_geo::Coordinate;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Source of the request time of day
pub trait Clock {
    /// Current local time of day
    fn time_of_day(&self) -> NaiveTime;
}

/// The system clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

impl<F: Fn() -> NaiveTime> Clock for F {
    fn time_of_day(&self) -> NaiveTime {
        self()
    }
}

/// Where the shell is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not started, or waiting for a trigger
    Idle,
    /// Asking for permission and a position fix
    AcquiringLocation,
    /// A ranking request is in flight
    Loading,
    /// The last ranking request succeeded
    Ready,
    /// The last operation failed
    Error(ErrorKind),
}

/// List or map presentation of the ranked results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card list
    #[default]
    List,
    /// Pins on a map
    Map,
}

impl ViewMode {
    /// The other mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Map,
            Self::Map => Self::List,
        }
    }
}

/// Input to [`AppShell::dispatch`]
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// Acquire the location, then fetch
    Start,
    /// A new position fix arrived
    LocationChanged(Coordinate),
    /// Manual refresh
    Refresh,
    /// The filter dialog's Apply button
    ApplyFilters(FilterSelection),
    /// Switch between list and map
    ToggleViewMode,
    /// Open the detail screen for the record at this index
    Select(usize),
    /// Leave the detail screen
    Back,
    /// Tap a star in the detail screen; values outside 1..=5 are ignored
    PickRating(u8),
    /// Submit the picked rating
    SubmitRating,
}

/// State of an open detail screen
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    record: BathroomRecord,
    user_location: Option<Coordinate>,
    pending_stars: u8,
}

impl DetailState {
    /// The selected record
    #[must_use]
    pub fn record(&self) -> &BathroomRecord {
        &self.record
    }

    /// User location at the time of selection
    #[must_use]
    pub fn user_location(&self) -> Option<Coordinate> {
        self.user_location
    }

    /// Stars picked so far, 0 when none
    #[must_use]
    pub fn pending_stars(&self) -> u8 {
        self.pending_stars
    }
}

/// An issued ranking request
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    context: UserContext,
}

impl FetchTicket {
    /// Generation number of this request
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Payload to send
    #[must_use]
    pub fn context(&self) -> &UserContext {
        &self.context
    }
}

/// What happened to a completed ranking response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was the latest and was applied
    Applied,
    /// A newer request had been issued; the response was dropped
    Stale,
}

/// The app shell state machine
pub struct AppShell<B, L, N, C = LocalClock> {
    backend: B,
    locator: L,
    notifier: N,
    clock: C,
    phase: Phase,
    location: Option<Coordinate>,
    filters: FilterState,
    bathrooms: Vec<BathroomRecord>,
    view_mode: ViewMode,
    detail: Option<DetailState>,
    generation: u64,
}

impl<B, L, N> AppShell<B, L, N, LocalClock>
where
    B: RestroomBackend,
    L: LocationProvider,
    N: Notifier,
{
    /// New idle shell using the system clock and default filters
    pub fn new(backend: B, locator: L, notifier: N) -> Self {
        Self {
            backend,
            locator,
            notifier,
            clock: LocalClock,
            phase: Phase::Idle,
            location: None,
            filters: FilterState::default(),
            bathrooms: Vec::new(),
            view_mode: ViewMode::default(),
            detail: None,
            generation: 0,
        }
    }
}

impl<B, L, N, C> AppShell<B, L, N, C>
where
    B: RestroomBackend,
    L: LocationProvider,
    N: Notifier,
    C: Clock,
{
    /// Replace the clock
    pub fn with_clock<C2: Clock>(self, clock: C2) -> AppShell<B, L, N, C2> {
        AppShell {
            backend: self.backend,
            locator: self.locator,
            notifier: self.notifier,
            clock,
            phase: self.phase,
            location: self.location,
            filters: self.filters,
            bathrooms: self.bathrooms,
            view_mode: self.view_mode,
            detail: self.detail,
            generation: self.generation,
        }
    }

    /// Start with these filters instead of the defaults
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last known user location
    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    /// Committed filters
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Results of the last successful fetch, in server order
    pub fn bathrooms(&self) -> &[BathroomRecord] {
        &self.bathrooms
    }

    /// List or map
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Open detail screen, if any
    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    /// The notifier, for front ends that buffer notifications
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The backend handle
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// List screen model
    pub fn list_view(&self) -> ListView {
        ListView::build(&self.bathrooms, self.location.as_ref())
    }

    /// Map screen model
    pub fn map_view(&self) -> MapView {
        MapView::build(&self.bathrooms, self.location.as_ref())
    }

    /// Detail screen model, when a record is selected
    pub fn detail_view(&self) -> Option<DetailView> {
        self.detail.as_ref().map(|d| {
            DetailView::build(&d.record, d.user_location.as_ref(), d.pending_stars)
        })
    }

    /// Active filter banner
    pub fn filter_banner(&self) -> Option<FilterBanner> {
        self.filters.active_summary()
    }

    /// Open the filter dialog on the committed state
    pub fn open_filter_dialog(&self) -> FilterSelection {
        FilterSelection::from_state(&self.filters)
    }

    /// Handle one event.
    ///
    /// Failures have already been shown through the notifier when this
    /// returns `Err`; the error is returned so callers can pick an exit code.
    pub async fn dispatch(&mut self, event: ShellEvent) -> Result<(), AppError> {
        debug!(?event, phase = ?self.phase, "Dispatching event");

        match event {
            ShellEvent::Start => self.start().await,
            ShellEvent::LocationChanged(coordinate) => {
                self.location = Some(coordinate);
                self.fetch().await
            }
            ShellEvent::Refresh => self.fetch().await,
            ShellEvent::ApplyFilters(selection) => {
                if self.filters.apply(selection) {
                    self.fetch().await
                } else {
                    Ok(())
                }
            }
            ShellEvent::ToggleViewMode => {
                self.view_mode = self.view_mode.toggled();
                Ok(())
            }
            ShellEvent::Select(index) => {
                self.select(index);
                Ok(())
            }
            ShellEvent::Back => {
                self.detail = None;
                Ok(())
            }
            ShellEvent::PickRating(stars) => {
                match self.detail.as_mut() {
                    Some(detail) if (1..=5).contains(&stars) => detail.pending_stars = stars,
                    Some(_) => debug!(stars, "Ignoring star value outside 1..=5"),
                    None => {}
                }
                Ok(())
            }
            ShellEvent::SubmitRating => self.submit_rating().await,
        }
    }

    async fn start(&mut self) -> Result<(), AppError> {
        self.phase = Phase::AcquiringLocation;

        if self.locator.request_permission().await == Permission::Denied {
            info!("Location permission denied");
            return Err(self.fail(AppError::PermissionDenied, Notification::permission_denied()));
        }

        match self.locator.current_position().await {
            Ok(coordinate) => {
                debug!(%coordinate, "Location acquired");
                self.location = Some(coordinate);
                self.fetch().await
            }
            Err(e) => {
                warn!(error = %e, "Location unavailable");
                Err(self.fail(e, Notification::location_failed()))
            }
        }
    }

    async fn fetch(&mut self) -> Result<(), AppError> {
        let Some(ticket) = self.begin_fetch() else {
            return Ok(());
        };
        let result = self.backend.fetch_ranked(&ticket.context).await;
        self.complete_fetch(ticket.generation, result).map(|_| ())
    }

    /// Issue a ranking request for the current location and filters.
    ///
    /// Returns `None` (and changes nothing) while the location is unknown.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let Some(location) = self.location else {
            debug!("No location yet, skipping fetch");
            return None;
        };

        self.generation += 1;
        self.phase = Phase::Loading;

        let context = UserContext::new(
            self.filters.preferences().clone(),
            location,
            self.filters.urgency(),
            self.clock.time_of_day(),
        );
        debug!(generation = self.generation, time = %context.time, "Fetch issued");

        Some(FetchTicket {
            generation: self.generation,
            context,
        })
    }

    /// Apply a ranking response, unless a newer request has been issued since.
    ///
    /// On failure the previous list stays visible.
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: ApiResult<Vec<BathroomRecord>>,
    ) -> Result<FetchOutcome, AppError> {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                ok = result.is_ok(),
                "Dropping stale ranking response"
            );
            return Ok(FetchOutcome::Stale);
        }

        match result {
            Ok(bathrooms) => {
                info!(count = bathrooms.len(), "Ranking applied");
                self.bathrooms = bathrooms;
                self.phase = Phase::Ready;
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                warn!(error = %e, "Ranking request failed");
                Err(self.fail(AppError::Network(e), Notification::fetch_failed()))
            }
        }
    }

    fn select(&mut self, index: usize) {
        match self.bathrooms.get(index) {
            Some(record) => {
                self.detail = Some(DetailState {
                    record: record.clone(),
                    user_location: self.location,
                    pending_stars: 0,
                });
            }
            None => warn!(index, available = self.bathrooms.len(), "No restroom at index"),
        }
    }

    async fn submit_rating(&mut self) -> Result<(), AppError> {
        let Some(detail) = self.detail.as_ref() else {
            debug!("Rating submitted without an open detail screen");
            return Ok(());
        };

        let rating = match Rating::new(detail.pending_stars) {
            Ok(rating) => rating,
            Err(e) => {
                self.notifier.notify(Notification::rating_missing());
                return Err(e.into());
            }
        };

        let bathroom_id = detail.record.identifier().to_string();
        match self.backend.submit_rating(&bathroom_id, rating).await {
            Ok(ack) => {
                info!(bathroom_id = %bathroom_id, stars = rating.stars(), ack = ?ack.0, "Rating submitted");
                self.notifier.notify(Notification::rating_submitted());
                Ok(())
            }
            Err(e) => {
                warn!(bathroom_id = %bathroom_id, error = %e, "Rating submission failed");
                self.notifier.notify(Notification::rating_failed());
                Err(AppError::Network(e))
            }
        }
    }

    fn fail(&mut self, error: AppError, notification: Notification) -> AppError {
        self.phase = Phase::Error(error.kind());
        self.notifier.notify(notification);
        error
    }
}
