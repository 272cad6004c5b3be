//! The planner session: user events in, map and panel updates out.
//!
//! A session owns the store, the selection machine, the renderer and the
//! info panel for the lifetime of the page. Events are applied in two
//! steps:
//!
//! 1. [`Session::handle`] applies an event synchronously and returns the
//!    network work it implies (a route ticket and/or address lookups).
//! 2. [`Session::resolve`] performs that work and applies the answers.
//!
//! [`Session::dispatch`] does both. Every route request carries a
//! [`RequestId`]; only the answer to the most recent request is applied,
//! and a reset invalidates all of them.

use std::fmt;

use askama::Template;
use tracing::{debug, info, warn};

use crate::domain::{GeoPoint, PointSlot, RouteRequest, RouteResult, TransportMode};
use crate::geocode::{GeocodeError, PlaceInfo, ReverseGeocoder};
use crate::metrics::compute_metrics;
use crate::panel::templates::SearchPopupTemplate;
use crate::panel::{InfoPanel, PlaceBlock, RouteSummary, StatusLine};
use crate::render::{MapSurface, RouteRenderer};
use crate::routing::{RouteError, RouteService};
use crate::selection::{SelectionError, SelectionMachine, SelectionState};
use crate::store::PointStore;


/// A user action.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Mode picker changed; `None` is the empty choice.
    SelectMode(Option<TransportMode>),
    /// Origin or destination button pressed.
    PressEndpoint(PointSlot),
    /// Click on the map.
    MapClick(GeoPoint),
    /// Address search picked a result.
    SearchResult { point: GeoPoint, label: String },
    /// The popup of the search marker was closed.
    SearchPopupClosed,
    /// "New search".
    Reset,
}

/// Something the user must be told about, in a blocking way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The action is not allowed right now; nothing changed.
    UserInput(SelectionError),
    /// The route request failed.
    RouteFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::UserInput(e) => write!(f, "{e}"),
            Notice::RouteFailed(message) => f.write_str(message),
        }
    }
}

/// Identifies one route request. Strictly increasing within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A route request the session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTicket {
    pub id: RequestId,
    pub request: RouteRequest,
}

/// An address lookup for a freshly placed endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceLookup {
    pub slot: PointSlot,
    pub point: GeoPoint,
}

/// The outcome of [`Session::handle`]: notices to show now and network
/// work still to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    pub notices: Vec<Notice>,
    pub route: Option<RouteTicket>,
    pub lookups: Vec<PlaceLookup>,
}

impl Dispatch {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Self::default()
        }
    }
}

/// One planner session.
pub struct Session<R, G, M> {
    routes: R,
    geocoder: G,
    renderer: RouteRenderer<M>,
    store: PointStore,
    machine: SelectionMachine,
    panel: InfoPanel,
    route: Option<RouteResult>,
    pending: Option<RouteTicket>,
    next_request: u64,
}

impl<R, G, M> Session<R, G, M>
where
    R: RouteService,
    G: ReverseGeocoder,
    M: MapSurface,
{
    pub fn new(routes: R, geocoder: G, renderer: RouteRenderer<M>) -> Self {
        Self {
            routes,
            geocoder,
            renderer,
            store: PointStore::new(),
            machine: SelectionMachine::new(),
            panel: InfoPanel::new(),
            route: None,
            pending: None,
            next_request: 1,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.machine.state()
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    pub fn renderer(&self) -> &RouteRenderer<M> {
        &self.renderer
    }

    pub fn routes(&self) -> &R {
        &self.routes
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// The route currently drawn, if any.
    pub fn route(&self) -> Option<&RouteResult> {
        self.route.as_ref()
    }

    /// The route request still awaiting an answer, if any.
    pub fn pending(&self) -> Option<&RouteTicket> {
        self.pending.as_ref()
    }

    /// Apply an event and perform the network work it implies.
    pub async fn dispatch(&mut self, event: UiEvent) -> Vec<Notice> {
        let dispatch = self.handle(event);
        self.resolve(dispatch).await
    }

    /// Apply an event without touching the network.
    pub fn handle(&mut self, event: UiEvent) -> Dispatch {
        debug!(?event, state = ?self.machine.state(), "handling event");

        match event {
            UiEvent::SelectMode(mode) => {
                self.machine.choose_mode(&mut self.store, mode);
                self.panel.set_status(match mode {
                    Some(_) => StatusLine::ChooseEndpoint,
                    None => StatusLine::ChooseMode,
                });
                Dispatch::default()
            }
            UiEvent::PressEndpoint(slot) => {
                match self.machine.press_endpoint(&self.store, slot) {
                    Ok(()) => {
                        self.renderer.clear_search_marker();
                        self.panel.set_status(StatusLine::AwaitingClick(slot));
                        Dispatch::default()
                    }
                    Err(e) => Dispatch::notice(Notice::UserInput(e)),
                }
            }
            UiEvent::MapClick(point) => {
                if let Err(e) = self.machine.check_point(&self.store) {
                    return Dispatch::notice(Notice::UserInput(e));
                }
                self.renderer.clear_search_marker();
                self.place(point)
            }
            UiEvent::SearchResult { point, label } => {
                self.renderer.clear_search_marker();
                if self.machine.awaiting().is_some() {
                    return self.place(point);
                }
                self.show_search_result(point, label);
                Dispatch::default()
            }
            UiEvent::SearchPopupClosed => {
                self.renderer.clear_search_marker();
                Dispatch::default()
            }
            UiEvent::Reset => {
                self.reset();
                Dispatch::default()
            }
        }
    }

    /// Perform the lookups and the route request of a [`Dispatch`].
    ///
    /// The route request and the address lookups run concurrently; a slow
    /// geocoder never holds back the route request.
    pub async fn resolve(&mut self, dispatch: Dispatch) -> Vec<Notice> {
        let Dispatch {
            mut notices,
            route,
            lookups,
        } = dispatch;

        let geocoder = &self.geocoder;
        let places = async move {
            let mut places = Vec::with_capacity(lookups.len());
            for lookup in lookups {
                places.push((lookup, geocoder.reverse(lookup.point).await));
            }
            places
        };

        let routes = &self.routes;
        let answer = async move {
            match route {
                Some(ticket) => Some((ticket.id, routes.request_route(&ticket.request).await)),
                None => None,
            }
        };

        let (places, answer) = tokio::join!(places, answer);

        if let Some((id, result)) = answer {
            notices.extend(self.apply_route(id, result));
        }
        for (lookup, result) in places {
            self.apply_place(lookup, result);
        }

        notices
    }

    /// Apply the answer to route request `id`.
    ///
    /// Answers to anything but the latest outstanding request are dropped.
    /// A service error clears the route overlays; a transport error leaves
    /// the map as it was.
    pub fn apply_route(
        &mut self,
        id: RequestId,
        result: Result<RouteResult, RouteError>,
    ) -> Option<Notice> {
        let ticket = match self.pending {
            Some(ticket) if ticket.id == id => ticket,
            _ => {
                debug!(%id, latest = ?self.pending.map(|t| t.id), "dropping stale route response");
                return None;
            }
        };
        self.pending = None;

        match result {
            Ok(route) => {
                self.renderer.render(&route);
                let metrics = compute_metrics(route.distance_meters, ticket.request.mode);
                info!(
                    %id,
                    distance_m = route.distance_meters,
                    time_min = metrics.time_minutes,
                    "route applied"
                );
                self.panel.set_summary(RouteSummary {
                    mode: ticket.request.mode,
                    metrics,
                    manhattan_note: route.manhattan_note.clone(),
                });
                self.route = Some(route);
                None
            }
            Err(e) => {
                warn!(%id, error = %e, "route request failed");
                if e.is_service_error() {
                    self.renderer.clear();
                    self.panel.clear_summary();
                    self.route = None;
                }
                Some(Notice::RouteFailed(e.user_message()))
            }
        }
    }

    /// Apply an address lookup result.
    ///
    /// Ignored when the slot no longer holds the looked-up point.
    pub fn apply_place(&mut self, lookup: PlaceLookup, result: Result<PlaceInfo, GeocodeError>) {
        if self.store.point(lookup.slot) != Some(lookup.point) {
            debug!(slot = %lookup.slot, "dropping stale address lookup");
            return;
        }

        let block = match result {
            Ok(place) => PlaceBlock::Found(place),
            Err(e) => {
                warn!(slot = %lookup.slot, error = %e, "address lookup failed");
                PlaceBlock::Unavailable
            }
        };
        self.panel.set_place(lookup.slot, block);
    }

    /// Return to the initial state: no mode, no points, nothing on the map.
    pub fn reset(&mut self) {
        self.machine.reset(&mut self.store);
        self.renderer.reset();
        self.panel.reset();
        self.route = None;
        if let Some(ticket) = self.pending.take() {
            debug!(id = %ticket.id, "abandoning route request on reset");
        }
        info!("session reset");
    }

    fn place(&mut self, point: GeoPoint) -> Dispatch {
        let placement = match self.machine.place_point(&mut self.store, point) {
            Ok(placement) => placement,
            Err(e) => return Dispatch::notice(Notice::UserInput(e)),
        };

        self.renderer.place_endpoint(placement.slot, point);
        self.panel.set_status(StatusLine::PointsSelected);

        let route = placement.route.map(|request| {
            let ticket = RouteTicket {
                id: RequestId(self.next_request),
                request,
            };
            self.next_request += 1;
            self.pending = Some(ticket);
            info!(id = %ticket.id, mode = %request.mode, "route requested");
            ticket
        });

        Dispatch {
            notices: Vec::new(),
            route,
            lookups: vec![PlaceLookup {
                slot: placement.slot,
                point,
            }],
        }
    }

    fn show_search_result(&mut self, point: GeoPoint, label: String) {
        let popup = SearchPopupTemplate { label }
            .render()
            .unwrap_or_else(|e| {
                warn!(error = %e, "search popup template failed");
                String::new()
            });
        self.renderer.show_search_result(point, &popup);
    }
}
