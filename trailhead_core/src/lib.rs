// Core engine for the Trailhead career-orientation system: data model,
// matching engine, learning trails, career catalog, and the profile store.

pub mod catalog;
pub mod matching;
pub mod store;
pub mod trail;
pub mod types;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
