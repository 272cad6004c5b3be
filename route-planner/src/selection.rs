//! Endpoint selection state machine.
//!
//! Interprets user actions (mode pick, endpoint button, map click or search
//! result) against the [`PointStore`] and decides what happens next. The
//! machine only mutates the store; it never calls the network or draws.
//!
//! ```text
//! NoModeChosen --mode--> ModeChosen --button(slot)--> AwaitingClick(slot)
//!      ^                   ^    ^                          |
//!      |                   |    +------ other slot empty --+ point
//!  clear/reset            mode                             |
//!      |                   |                               v
//!   (any state)            +------------------------- Complete
//! ```

use tracing::debug;

use crate::domain::{GeoPoint, PointSlot, RouteRequest, TransportMode};
use crate::store::PointStore;

/// Where the user is in the endpoint selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No transport mode; endpoint buttons are inert.
    #[default]
    NoModeChosen,
    /// A mode is chosen and no endpoint pick is pending.
    ModeChosen,
    /// The next map click or search result fills this slot.
    AwaitingClick(PointSlot),
    /// Both endpoints were just set and a route was requested.
    Complete,
}

/// A user action that the current state does not allow.
///
/// These are recovered locally with a blocking notice and change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Select a transport mode first.")]
    NoMode,

    #[error("Choose whether you are picking the origin or the destination first (use the buttons).")]
    NoPendingEndpoint,
}

/// What a successful point placement did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The slot that received the point.
    pub slot: PointSlot,

    /// Set exactly when this placement entered `Complete`.
    pub route: Option<RouteRequest>,
}

/// The endpoint selection state machine.
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The slot a click would fill, if any.
    pub fn awaiting(&self) -> Option<PointSlot> {
        match self.state {
            SelectionState::AwaitingClick(slot) => Some(slot),
            _ => None,
        }
    }

    /// Apply a mode pick. `None` clears the mode.
    ///
    /// Any pending click intent is dropped; stored points are kept.
    pub fn choose_mode(&mut self, store: &mut PointStore, mode: Option<TransportMode>) {
        store.set_mode(mode);
        self.state = match mode {
            Some(_) => SelectionState::ModeChosen,
            None => SelectionState::NoModeChosen,
        };
        debug!(?mode, state = ?self.state, "transport mode changed");
    }

    /// Arm the machine to fill `slot` with the next point.
    pub fn press_endpoint(
        &mut self,
        store: &PointStore,
        slot: PointSlot,
    ) -> Result<(), SelectionError> {
        if !store.can_select_endpoints() {
            return Err(SelectionError::NoMode);
        }

        self.state = SelectionState::AwaitingClick(slot);
        debug!(%slot, "awaiting endpoint");
        Ok(())
    }

    /// Check that a map click would be accepted, without applying it.
    pub fn check_point(&self, store: &PointStore) -> Result<PointSlot, SelectionError> {
        match self.state {
            SelectionState::AwaitingClick(slot) if store.can_select_endpoints() => Ok(slot),
            _ if !store.can_select_endpoints() => Err(SelectionError::NoMode),
            _ => Err(SelectionError::NoPendingEndpoint),
        }
    }

    /// Write `point` into the awaited slot.
    ///
    /// Moves to `Complete` (returning the route to request) when the other
    /// slot is already set, otherwise back to `ModeChosen`.
    pub fn place_point(
        &mut self,
        store: &mut PointStore,
        point: GeoPoint,
    ) -> Result<Placement, SelectionError> {
        let slot = self.check_point(store)?;
        store.set_point(slot, point);

        let route = store.route_request();
        self.state = if route.is_some() {
            SelectionState::Complete
        } else {
            SelectionState::ModeChosen
        };
        debug!(%slot, %point, state = ?self.state, "endpoint placed");

        Ok(Placement { slot, route })
    }

    /// Return to the initial state, clearing the store.
    pub fn reset(&mut self, store: &mut PointStore) {
        store.reset();
        self.state = SelectionState::NoModeChosen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    fn setup(mode: TransportMode) -> (SelectionMachine, PointStore) {
        let mut machine = SelectionMachine::new();
        let mut store = PointStore::new();
        machine.choose_mode(&mut store, Some(mode));
        (machine, store)
    }

    #[test]
    fn starts_without_mode() {
        assert_eq!(SelectionMachine::new().state(), SelectionState::NoModeChosen);
    }

    #[test]
    fn buttons_inert_without_mode() {
        let mut machine = SelectionMachine::new();
        let store = PointStore::new();

        let err = machine.press_endpoint(&store, PointSlot::Origin).unwrap_err();
        assert_eq!(err, SelectionError::NoMode);
        assert_eq!(machine.state(), SelectionState::NoModeChosen);
    }

    #[test]
    fn click_without_pending_endpoint_is_rejected() {
        let (mut machine, mut store) = setup(TransportMode::Car);

        let err = machine.place_point(&mut store, p(1.0, 1.0)).unwrap_err();
        assert_eq!(err, SelectionError::NoPendingEndpoint);
        assert_eq!(store.point(PointSlot::Origin), None);
        assert_eq!(machine.state(), SelectionState::ModeChosen);
    }

    #[test]
    fn click_without_mode_is_rejected() {
        let mut machine = SelectionMachine::new();
        let mut store = PointStore::new();

        let err = machine.place_point(&mut store, p(1.0, 1.0)).unwrap_err();
        assert_eq!(err, SelectionError::NoMode);
    }

    #[test]
    fn origin_then_destination_completes_once() {
        let (mut machine, mut store) = setup(TransportMode::Bike);

        machine.press_endpoint(&store, PointSlot::Origin).unwrap();
        assert_eq!(machine.state(), SelectionState::AwaitingClick(PointSlot::Origin));

        let first = machine.place_point(&mut store, p(1.0, 1.0)).unwrap();
        assert_eq!(first.slot, PointSlot::Origin);
        assert!(first.route.is_none());
        assert_eq!(machine.state(), SelectionState::ModeChosen);

        machine.press_endpoint(&store, PointSlot::Destination).unwrap();
        let second = machine.place_point(&mut store, p(2.0, 2.0)).unwrap();
        assert_eq!(machine.state(), SelectionState::Complete);
        assert_eq!(
            second.route,
            Some(RouteRequest {
                origin: p(1.0, 1.0),
                destination: p(2.0, 2.0),
                mode: TransportMode::Bike,
            })
        );

        // The pending intent was consumed; another click is rejected.
        assert_eq!(
            machine.place_point(&mut store, p(3.0, 3.0)).unwrap_err(),
            SelectionError::NoPendingEndpoint
        );
    }

    #[test]
    fn mode_change_after_complete_keeps_points() {
        let (mut machine, mut store) = setup(TransportMode::Car);
        machine.press_endpoint(&store, PointSlot::Origin).unwrap();
        machine.place_point(&mut store, p(1.0, 1.0)).unwrap();
        machine.press_endpoint(&store, PointSlot::Destination).unwrap();
        machine.place_point(&mut store, p(2.0, 2.0)).unwrap();

        machine.choose_mode(&mut store, Some(TransportMode::Pedestrian));

        assert_eq!(machine.state(), SelectionState::ModeChosen);
        assert_eq!(store.point(PointSlot::Origin), Some(p(1.0, 1.0)));
        assert_eq!(store.point(PointSlot::Destination), Some(p(2.0, 2.0)));

        machine.press_endpoint(&store, PointSlot::Origin).unwrap();
        let placement = machine.place_point(&mut store, p(5.0, 5.0)).unwrap();
        assert_eq!(machine.state(), SelectionState::Complete);
        assert_eq!(
            placement.route,
            Some(RouteRequest {
                origin: p(5.0, 5.0),
                destination: p(2.0, 2.0),
                mode: TransportMode::Pedestrian,
            })
        );
    }

    #[test]
    fn mode_change_drops_pending_click() {
        let (mut machine, mut store) = setup(TransportMode::Car);
        machine.press_endpoint(&store, PointSlot::Destination).unwrap();

        machine.choose_mode(&mut store, Some(TransportMode::Bike));

        assert_eq!(machine.awaiting(), None);
        assert_eq!(machine.state(), SelectionState::ModeChosen);
    }

    #[test]
    fn clearing_mode_returns_to_start() {
        let (mut machine, mut store) = setup(TransportMode::Car);
        machine.press_endpoint(&store, PointSlot::Origin).unwrap();

        machine.choose_mode(&mut store, None);

        assert_eq!(machine.state(), SelectionState::NoModeChosen);
        assert_eq!(
            machine.press_endpoint(&store, PointSlot::Origin).unwrap_err(),
            SelectionError::NoMode
        );
    }

    #[test]
    fn reset_clears_everything() {
        let (mut machine, mut store) = setup(TransportMode::Car);
        machine.press_endpoint(&store, PointSlot::Origin).unwrap();
        machine.place_point(&mut store, p(1.0, 1.0)).unwrap();

        machine.reset(&mut store);

        assert_eq!(machine.state(), SelectionState::NoModeChosen);
        assert_eq!(store, PointStore::new());
    }

    #[test]
    fn switching_pending_slot() {
        let (mut machine, mut store) = setup(TransportMode::Car);
        machine.press_endpoint(&store, PointSlot::Origin).unwrap();
        machine.press_endpoint(&store, PointSlot::Destination).unwrap();

        let placement = machine.place_point(&mut store, p(1.0, 1.0)).unwrap();
        assert_eq!(placement.slot, PointSlot::Destination);
        assert_eq!(store.point(PointSlot::Origin), None);
    }
}
