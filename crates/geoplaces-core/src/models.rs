pub mod municipality;
pub mod place;
pub mod point;

pub use municipality::{City, CityId, CityView, NewCity, State, StateId};
pub use place::{NearbyPlace, NewPlace, PlaceId, PlaceRecord, PlaceUpdate};
pub use point::{BoundingBox, DistanceMethod, GeoPoint, GeoStatistics, Hemisphere};
