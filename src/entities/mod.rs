mod coordinate;
mod place;
mod route;

pub use coordinate::{bounding_rect, Coordinate};
pub use place::{EndpointRole, Place, PlaceRecord};
pub use route::{RoutePath, RouteQuery, DRIVING_OPTION};
