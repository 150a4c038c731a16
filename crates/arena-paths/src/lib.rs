//! Budgeted multi-goal pathfinding for the arena grid.
//!
//! This crate provides the search core and the spatial queries built on it:
//!
//! - **Weighted A\*** over the 8-connected arena, with several goals, each
//!   with its own acceptance range, and a **flee** mode
//!   ([`PathFinder::search`])
//! - **Path helpers**: [`find_path`], [`find_closest_by_path`], [`next_step`]
//! - **Range queries**: [`find_closest_by_range`], [`find_in_range`]
//!
//! Searches are bounded by an expansion budget and a path-cost ceiling
//! ([`SearchOptions`]). Running out is not an error: the result carries the
//! best partial path and sets [`SearchResult::incomplete`].
//!
//! # Cost model
//!
//! | Source | Cost of entering the cell |
//! |---|---|
//! | [`CostMatrix`](arena_core::CostMatrix) byte `1..=254` | that byte |
//! | matrix byte `255` or wall terrain | impassable |
//! | swamp / plain terrain | `swamp_cost` / `plain_cost` |

mod arena;
mod goal;
mod options;
mod pathfinder;
mod query;
mod resolver;
mod search;
mod traits;

pub use arena::Arena;
pub use goal::Goal;
pub use options::SearchOptions;
pub use pathfinder::{PathFinder, SearchResult};
pub use query::{
    find_closest_by_path, find_closest_by_path_with, find_closest_by_range, find_in_range,
    find_path, find_path_with, get_range, next_step, next_step_with,
};
pub use resolver::CostResolver;
pub use search::search_path;
pub use traits::{Locatable, TraversalCost};
