use crate::entities::{Coordinate, EndpointRole, Place, RoutePath};
use crate::surface::Handle;

/// The single source of truth for the search/select/route workflow.
#[derive(Debug, Default)]
pub struct WorkflowState {
    pub start_keyword: String,
    pub end_keyword: String,
    pub start_point: Option<Coordinate>,
    pub end_point: Option<Coordinate>,
    pub start_results: Vec<Place>,
    pub end_results: Vec<Place>,
    /// Whichever role was most recently searched; its result list is
    /// the one on display.
    pub active_search_role: Option<EndpointRole>,
    pub current_path: Option<RoutePath>,
}

impl WorkflowState {
    pub fn keyword(&self, role: EndpointRole) -> &str {
        match role {
            EndpointRole::Start => &self.start_keyword,
            EndpointRole::End => &self.end_keyword,
        }
    }

    pub fn set_keyword(&mut self, role: EndpointRole, keyword: &str) {
        match role {
            EndpointRole::Start => self.start_keyword = keyword.into(),
            EndpointRole::End => self.end_keyword = keyword.into(),
        }
    }

    pub fn point(&self, role: EndpointRole) -> Option<Coordinate> {
        match role {
            EndpointRole::Start => self.start_point,
            EndpointRole::End => self.end_point,
        }
    }

    pub fn set_point(&mut self, role: EndpointRole, coordinate: Coordinate) {
        match role {
            EndpointRole::Start => self.start_point = Some(coordinate),
            EndpointRole::End => self.end_point = Some(coordinate),
        }
    }

    pub fn results(&self, role: EndpointRole) -> &[Place] {
        match role {
            EndpointRole::Start => &self.start_results,
            EndpointRole::End => &self.end_results,
        }
    }

    pub fn set_results(&mut self, role: EndpointRole, places: Vec<Place>) {
        match role {
            EndpointRole::Start => self.start_results = places,
            EndpointRole::End => self.end_results = places,
        }
    }

    pub fn clear_results(&mut self, role: EndpointRole) {
        self.set_results(role, Vec::new());
    }

    pub fn both_points_set(&self) -> bool {
        self.start_point.is_some() && self.end_point.is_some()
    }
}

/// One rendered candidate marker, with the selection event data
/// captured at creation time.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub handle: Handle,
    pub place: Place,
    pub role: EndpointRole,
}

/// Every marker and overlay the workflow owns, keyed by purpose.
/// Replacement is always remove-if-present then create, so handles
/// never leak or duplicate.
#[derive(Debug, Default)]
pub struct RenderHandles {
    pub start_marker: Option<Handle>,
    pub end_marker: Option<Handle>,
    pub route_overlay: Option<Handle>,
    pub candidates: Vec<Candidate>,
}

impl RenderHandles {
    pub fn endpoint_marker(&mut self, role: EndpointRole) -> &mut Option<Handle> {
        match role {
            EndpointRole::Start => &mut self.start_marker,
            EndpointRole::End => &mut self.end_marker,
        }
    }
}

/// Monotonic request sequence numbers, one per search role plus one
/// for route requests. A response whose sequence number is no longer
/// current has been superseded and must be discarded.
#[derive(Debug, Default)]
pub struct RequestSeq {
    start_search: u64,
    end_search: u64,
    route: u64,
}

impl RequestSeq {
    pub fn issue_search(&mut self, role: EndpointRole) -> u64 {
        let counter = match role {
            EndpointRole::Start => &mut self.start_search,
            EndpointRole::End => &mut self.end_search,
        };

        *counter += 1;
        *counter
    }

    pub fn current_search(&self, role: EndpointRole) -> u64 {
        match role {
            EndpointRole::Start => self.start_search,
            EndpointRole::End => self.end_search,
        }
    }

    pub fn issue_route(&mut self) -> u64 {
        self.route += 1;
        self.route
    }

    pub fn current_route(&self) -> u64 {
        self.route
    }
}
