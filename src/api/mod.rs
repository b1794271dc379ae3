pub mod interface;
pub mod server;

pub use interface::{DirectionsAPI, DynAPI, GeocodeAPI, PlaceSearchAPI, API};
pub use server::serve;
