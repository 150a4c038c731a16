//! Spatial queries built on the metric and the search.

use arena_core::{Direction, Position};

use crate::arena::Arena;
use crate::goal::Goal;
use crate::options::SearchOptions;
use crate::pathfinder::PathFinder;
use crate::traits::Locatable;

/// Chebyshev distance between two located things, `None` if either is
/// unplaced.
pub fn get_range(a: &impl Locatable, b: &impl Locatable) -> Option<i32> {
    Some(a.position()?.range_to(b.position()?))
}

/// The item nearest to `origin` by Chebyshev distance.
///
/// The first item reaching the minimum wins ties; unplaced items are
/// skipped.
pub fn find_closest_by_range<T: Locatable>(origin: Position, items: &[T]) -> Option<&T> {
    let mut closest = None;
    let mut min_range = i32::MAX;
    for item in items {
        let Some(pos) = item.position() else {
            continue;
        };
        let range = origin.range_to(pos);
        if range < min_range {
            min_range = range;
            closest = Some(item);
        }
    }
    closest
}

/// Items within `range` of `origin`, in input order.
pub fn find_in_range<T: Locatable>(origin: Position, items: &[T], range: u32) -> Vec<&T> {
    items
        .iter()
        .filter(|item| {
            item.position()
                .is_some_and(|p| origin.range_to(p).unsigned_abs() <= range)
        })
        .collect()
}

/// Path from `origin` towards `target`, origin excluded.
///
/// Searches with range `max(1, options.range)`. When the range is unset or
/// zero the target cell itself is appended once the path ends next to it (or
/// the origin already is), so callers can path onto an occupied cell.
pub fn find_path(
    arena: &Arena,
    origin: Position,
    target: Position,
    options: &SearchOptions<'_>,
) -> Vec<Position> {
    find_path_with(&mut PathFinder::new(), arena, origin, target, options)
}

/// [`find_path`] reusing `finder` across calls.
pub fn find_path_with(
    finder: &mut PathFinder,
    arena: &Arena,
    origin: Position,
    target: Position,
    options: &SearchOptions<'_>,
) -> Vec<Position> {
    let explicit = options.range.unwrap_or(0);
    let mut path = arena
        .search_in(finder, origin, &[Goal::new(target, explicit.max(1))], options)
        .path;

    if explicit == 0 {
        let adjacent = match path.last() {
            Some(last) => last.range_to(target) == 1,
            None => origin.range_to(target) <= 1,
        };
        if adjacent {
            path.push(target);
        }
    }
    path
}

/// The item reached first by a single multi-goal search.
///
/// An item on the origin cell is returned without searching. Otherwise every
/// placed item becomes a range-1 goal; after the search, the **last** item
/// (in input order) within 1 of the path's end is returned. This is not a
/// global nearest-by-path: when several items surround the end cell, input
/// order decides.
pub fn find_closest_by_path<'a, T: Locatable>(
    arena: &Arena,
    origin: Position,
    items: &'a [T],
    options: &SearchOptions<'_>,
) -> Option<&'a T> {
    find_closest_by_path_with(&mut PathFinder::new(), arena, origin, items, options)
}

/// [`find_closest_by_path`] reusing `finder` across calls.
pub fn find_closest_by_path_with<'a, T: Locatable>(
    finder: &mut PathFinder,
    arena: &Arena,
    origin: Position,
    items: &'a [T],
    options: &SearchOptions<'_>,
) -> Option<&'a T> {
    if let Some(here) = items.iter().find(|i| i.position() == Some(origin)) {
        return Some(here);
    }

    let goals: Vec<Goal> = items
        .iter()
        .filter_map(|i| i.position())
        .map(|p| Goal::new(p, 1))
        .collect();
    if goals.is_empty() {
        return None;
    }

    let result = arena.search_in(finder, origin, &goals, options);
    let end = result.last().unwrap_or(origin);
    items
        .iter()
        .rev()
        .find(|i| i.position().is_some_and(|p| end.range_to(p) <= 1))
}

/// Heading of the first step towards `target`, or `None` when there is no
/// step to take.
pub fn next_step(
    arena: &Arena,
    origin: Position,
    target: Position,
    options: &SearchOptions<'_>,
) -> Option<Direction> {
    next_step_with(&mut PathFinder::new(), arena, origin, target, options)
}

/// [`next_step`] reusing `finder` across calls.
pub fn next_step_with(
    finder: &mut PathFinder,
    arena: &Arena,
    origin: Position,
    target: Position,
    options: &SearchOptions<'_>,
) -> Option<Direction> {
    let first = *find_path_with(finder, arena, origin, target, options).first()?;
    let d = first - origin;
    Direction::from_delta(d.x, d.y)
}
