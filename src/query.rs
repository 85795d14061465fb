//! Movement queries over the map.
//!
//! Both queries are pure reads of the [`Map`](crate::map::Map) and take the
//! round explicitly, since rail availability depends on it.

mod path;
mod reachable;

pub use path::shortest_path;
pub use reachable::reachable;
