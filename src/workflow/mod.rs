//! The search/select/route workflow: mediates between user input, the
//! place-search and directions gateways, and the map surface.

mod state;

pub use state::{Candidate, RenderHandles, RequestSeq, WorkflowState};

use crate::api::{DirectionsAPI, PlaceSearchAPI};
use crate::entities::{
    bounding_rect, Coordinate, EndpointRole, Place, PlaceRecord, RoutePath, RouteQuery,
};
use crate::error::Error;
use crate::surface::{
    Handle, MapSurface, MarkerStyle, PathStyle, RESULT_FIT_PADDING, ROUTE_FIT_PADDING,
};

/// Issued by [`Workflow::begin_search`]; ties a gateway response back
/// to the request that produced it so superseded responses can be
/// discarded instead of overwriting fresher results.
#[derive(Clone, Debug)]
pub struct SearchTicket {
    role: EndpointRole,
    seq: u64,
    keyword: String,
    prior_keyword: String,
    prior_active: Option<EndpointRole>,
}

impl SearchTicket {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn role(&self) -> EndpointRole {
        self.role
    }
}

/// Issued by [`Workflow::begin_route`] once both endpoints are set.
#[derive(Clone, Debug)]
pub struct RouteTicket {
    start: Coordinate,
    end: Coordinate,
    seq: u64,
}

#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    /// Guard rejected the input (blank keyword or surface not ready);
    /// nothing changed.
    Skipped,
    /// A newer search, for either role, superseded this response.
    Superseded,
    /// The role's result list was replaced with this many places.
    Listed(usize),
}

#[derive(Debug, PartialEq)]
pub enum RouteOutcome {
    /// A newer route request superseded this response.
    Superseded,
    /// The provider returned no usable path; any previously shown
    /// route stays on the surface.
    NoRoute,
    Shown {
        distance_meters: f64,
        duration_millis: u64,
    },
}

/// Marker click event: place and role are captured at marker creation,
/// never read back from mutable workflow state at click time.
#[derive(Clone, Debug)]
pub struct MarkerClick {
    pub place: Place,
    pub role: EndpointRole,
}

pub struct Workflow<S, D, M> {
    search_api: S,
    directions_api: D,
    surface: M,
    state: WorkflowState,
    handles: RenderHandles,
    seq: RequestSeq,
}

impl<S, D, M: MapSurface> Workflow<S, D, M> {
    pub fn new(search_api: S, directions_api: D, surface: M) -> Self {
        Self {
            search_api,
            directions_api,
            surface,
            state: WorkflowState::default(),
            handles: RenderHandles::default(),
            seq: RequestSeq::default(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    /// Start a search for `role`. Returns `None` when the trimmed
    /// keyword is empty or the surface is not ready; that is a
    /// disabled-UI no-op, not an error.
    pub fn begin_search(&mut self, keyword: &str, role: EndpointRole) -> Option<SearchTicket> {
        let keyword = keyword.trim();

        if keyword.is_empty() || !self.surface.is_ready() {
            return None;
        }

        let prior_keyword = self.state.keyword(role).to_string();
        let prior_active = self.state.active_search_role;

        self.state.set_keyword(role, keyword);
        self.state.active_search_role = Some(role);

        Some(SearchTicket {
            role,
            seq: self.seq.issue_search(role),
            keyword: keyword.to_string(),
            prior_keyword,
            prior_active,
        })
    }

    /// Apply a search gateway response. Either the whole result list
    /// and its markers replace the previous ones, or nothing changes.
    pub fn apply_search(
        &mut self,
        ticket: &SearchTicket,
        response: Result<Vec<PlaceRecord>, Error>,
    ) -> Result<SearchOutcome, Error> {
        // A later search for either role supersedes this one: the
        // display belongs to whichever role was searched last.
        if ticket.seq != self.seq.current_search(ticket.role)
            || self.state.active_search_role != Some(ticket.role)
        {
            tracing::debug!(
                role = ticket.role.label(),
                keyword = %ticket.keyword,
                "discarding superseded search response"
            );
            return Ok(SearchOutcome::Superseded);
        }

        // Build the full list before touching state: one malformed
        // record rejects the response, never a partial list.
        let places = response.and_then(|records| {
            records
                .iter()
                .enumerate()
                .map(|(index, record)| Place::from_record(index, record))
                .collect::<Result<Vec<Place>, Error>>()
        });

        let places = match places {
            Ok(places) => places,
            Err(err) => {
                self.state.set_keyword(ticket.role, &ticket.prior_keyword);
                self.state.active_search_role = ticket.prior_active;
                return Err(err);
            }
        };

        self.clear_candidate_markers();
        self.render_candidates(&places, ticket.role);
        self.state.set_results(ticket.role, places);

        Ok(SearchOutcome::Listed(self.state.results(ticket.role).len()))
    }

    /// Fill the `role` endpoint slot with a place from the displayed
    /// candidates. When this sets the second endpoint, the returned
    /// ticket carries the route request that must follow.
    pub fn select_place(
        &mut self,
        place: &Place,
        role: EndpointRole,
    ) -> Result<Option<RouteTicket>, Error> {
        self.surface.close_info();

        self.state.set_point(role, place.coordinate);

        if let Some(previous) = self.handles.endpoint_marker(role).take() {
            self.surface.remove_marker(previous);
        }

        let style = match role {
            EndpointRole::Start => MarkerStyle::Start,
            EndpointRole::End => MarkerStyle::End,
        };
        let marker = self.surface.create_marker(place.coordinate, style)?;
        *self.handles.endpoint_marker(role) = Some(marker);

        self.clear_candidate_markers();
        self.state.clear_results(role);
        self.state.active_search_role = None;

        Ok(self.begin_route())
    }

    /// Issue a route request for the current endpoints, or `None`
    /// until both are set.
    pub fn begin_route(&mut self) -> Option<RouteTicket> {
        let start = self.state.start_point?;
        let end = self.state.end_point?;

        Some(RouteTicket {
            start,
            end,
            seq: self.seq.issue_route(),
        })
    }

    /// Apply a directions gateway response. A usable path replaces the
    /// previous overlay; no-route and gateway failures leave the
    /// previous overlay in place.
    pub fn apply_route(
        &mut self,
        ticket: &RouteTicket,
        response: Result<Option<RoutePath>, Error>,
    ) -> Result<RouteOutcome, Error> {
        if ticket.seq != self.seq.current_route() {
            tracing::debug!("discarding superseded route response");
            return Ok(RouteOutcome::Superseded);
        }

        let route = match response? {
            Some(route) => route,
            None => {
                tracing::warn!("no usable route between endpoints");
                return Ok(RouteOutcome::NoRoute);
            }
        };

        if let Some(previous) = self.handles.route_overlay.take() {
            self.surface.remove_path(previous);
        }

        let overlay = self.surface.create_path(&route.path, PathStyle::default())?;
        self.handles.route_overlay = Some(overlay);

        let bounds = bounding_rect(
            [ticket.start, ticket.end]
                .into_iter()
                .chain(route.path.iter().copied()),
        );
        if let Some(bounds) = bounds {
            self.surface.fit_bounds(bounds, ROUTE_FIT_PADDING);
        }

        let outcome = RouteOutcome::Shown {
            distance_meters: route.distance_meters,
            duration_millis: route.duration_millis,
        };
        self.state.current_path = Some(route);

        Ok(outcome)
    }

    /// Resolve a candidate marker click and open its info overlay.
    pub fn marker_click(&mut self, handle: Handle) -> Option<MarkerClick> {
        let candidate = self
            .handles
            .candidates
            .iter()
            .find(|candidate| candidate.handle == handle)?;

        let click = MarkerClick {
            place: candidate.place.clone(),
            role: candidate.role,
        };

        let content = format!(
            "<div><h5>{}</h5><p>{}</p><button>Set as {}</button></div>",
            click.place.name,
            click.place.address,
            click.role.label()
        );
        self.surface.open_info(handle, content);

        Some(click)
    }

    fn clear_candidate_markers(&mut self) {
        for candidate in self.handles.candidates.drain(..) {
            self.surface.remove_marker(candidate.handle);
        }
    }

    fn render_candidates(&mut self, places: &[Place], role: EndpointRole) {
        for (index, place) in places.iter().enumerate() {
            let style = MarkerStyle::Candidate { ordinal: index + 1 };

            match self.surface.create_marker(place.coordinate, style) {
                Ok(handle) => self.handles.candidates.push(Candidate {
                    handle,
                    place: place.clone(),
                    role,
                }),
                // one bad candidate must not abort the batch
                Err(err) => tracing::warn!(
                    ?err,
                    name = %place.name,
                    "failed to render candidate marker"
                ),
            }
        }

        let rendered = self
            .handles
            .candidates
            .iter()
            .map(|candidate| candidate.place.coordinate);

        if let Some(bounds) = bounding_rect(rendered) {
            self.surface.fit_bounds(bounds, RESULT_FIT_PADDING);
        }
    }
}

impl<S, D, M> Workflow<S, D, M>
where
    S: PlaceSearchAPI,
    D: DirectionsAPI,
    M: MapSurface,
{
    /// Search, then apply the response, discarding it if superseded.
    pub async fn search(
        &mut self,
        keyword: &str,
        role: EndpointRole,
    ) -> Result<SearchOutcome, Error> {
        let ticket = match self.begin_search(keyword, role) {
            Some(ticket) => ticket,
            None => return Ok(SearchOutcome::Skipped),
        };

        let response = self.search_api.search_places(ticket.keyword.clone()).await;

        self.apply_search(&ticket, response)
    }

    /// Select a place; when that completes the endpoint pair, the
    /// route computation fires as a follow-on step.
    pub async fn select(
        &mut self,
        place: &Place,
        role: EndpointRole,
    ) -> Result<Option<RouteOutcome>, Error> {
        match self.select_place(place, role)? {
            Some(ticket) => Ok(Some(self.fetch_route(ticket).await?)),
            None => Ok(None),
        }
    }

    /// Recompute the route for the current endpoints, if both are set.
    pub async fn compute_route(&mut self) -> Result<Option<RouteOutcome>, Error> {
        match self.begin_route() {
            Some(ticket) => Ok(Some(self.fetch_route(ticket).await?)),
            None => Ok(None),
        }
    }

    async fn fetch_route(&mut self, ticket: RouteTicket) -> Result<RouteOutcome, Error> {
        let query = RouteQuery::new(ticket.start, ticket.end);

        let response = self
            .directions_api
            .find_directions(query)
            .await
            .map(|data| data.into_path());

        self.apply_route(&ticket, response)
    }
}
