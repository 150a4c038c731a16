//! Budgeted weighted A* over the 8-connected arena.
//!
//! The search generalises A* to several goals, each with its own acceptance
//! range, and to a flee mode that moves away from every goal instead.
//! Exploration is bounded by an expansion budget (`max_ops`) and a path-cost
//! ceiling (`max_cost`); when either stops the search early, the path to the
//! best node expanded so far is returned and flagged incomplete.

use arena_core::{Position, TerrainGrid};

use crate::goal::Goal;
use crate::options::SearchOptions;
use crate::pathfinder::{NO_PARENT, NodeRef, PathFinder, SearchResult};
use crate::resolver::CostResolver;
use crate::traits::TraversalCost;

/// How the goal list scores a cell.
#[derive(Clone, Copy)]
struct Objective<'g> {
    goals: &'g [Goal],
    flee: bool,
    weight: f64,
}

impl Objective<'_> {
    /// Heuristic before weighting. Approach: distance still to cover to the
    /// nearest goal. Flee: deepest intrusion into any goal's range.
    fn estimate(&self, p: Position) -> u32 {
        if self.flee {
            self.goals
                .iter()
                .map(|g| g.clearance(p).min(0).unsigned_abs() as u32)
                .max()
                .unwrap_or(0)
        } else {
            self.goals
                .iter()
                .map(|g| g.remaining(p))
                .min()
                .unwrap_or(u32::MAX)
        }
    }

    fn priority(&self, g: u32, p: Position) -> f64 {
        f64::from(g) + f64::from(self.estimate(p)) * self.weight
    }

    /// Rank of a candidate end cell, lower is better. Approach: the
    /// heuristic. Flee: negated clearance from the closest goal.
    fn rank(&self, p: Position) -> i64 {
        if self.flee {
            -self.goals.iter().map(|g| g.clearance(p)).min().unwrap_or(0)
        } else {
            i64::from(self.estimate(p))
        }
    }

    /// First goal in list order that `p` satisfies. Never in flee mode.
    fn reached(&self, p: Position) -> Option<usize> {
        if self.flee {
            return None;
        }
        self.goals.iter().position(|g| g.contains(p))
    }
}

#[derive(Clone, Copy)]
enum Stop {
    Reached(usize),
    OpsSpent,
    FrontierEmpty,
}

impl PathFinder {
    /// Search the arena terrain with costs resolved from `options`.
    pub fn search(
        &mut self,
        terrain: &TerrainGrid,
        origin: Position,
        goals: &[Goal],
        options: &SearchOptions<'_>,
    ) -> SearchResult {
        let resolver = CostResolver::new(terrain, options);
        self.search_with(&resolver, origin, goals, options)
    }

    /// Search with a caller-supplied cost source.
    ///
    /// Returns an empty, complete result when the origin already satisfies a
    /// goal. Otherwise expands at most `max_ops` nodes, never relaxes an edge
    /// that would push the path cost over `max_cost`, and never steps onto a
    /// cell `costs` reports as impassable.
    ///
    /// Frontier ties (equal weighted f-score) are broken by insertion order
    /// and neighbours are generated in [`Position::neighbors_8`] order, so the
    /// result is fully determined by the inputs.
    pub fn search_with<C: TraversalCost>(
        &mut self,
        costs: &C,
        origin: Position,
        goals: &[Goal],
        options: &SearchOptions<'_>,
    ) -> SearchResult {
        let options = options.clamped();
        let objective = Objective {
            goals,
            flee: options.flee,
            weight: options.heuristic_weight,
        };

        log::trace!(
            "search from {origin} to {} goal(s), flee={}, max_ops={}, max_cost={}",
            goals.len(),
            options.flee,
            options.max_ops,
            options.max_cost
        );

        if objective.reached(origin).is_some() {
            return SearchResult::default();
        }
        let Some(start) = origin.index() else {
            log::debug!("search origin {origin} lies outside the arena");
            return SearchResult {
                incomplete: true,
                ..SearchResult::default()
            };
        };
        if goals.is_empty() {
            return SearchResult {
                incomplete: true,
                ..SearchResult::default()
            };
        }

        let cur_gen = self.next_generation();
        {
            let node = &mut self.nodes[start];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }
        let mut seq: u64 = 0;
        self.open.push(NodeRef {
            idx: start,
            g: 0,
            f: objective.priority(0, origin),
            seq,
        });

        let mut ops: u32 = 0;
        let mut best = start;
        let mut best_rank = objective.rank(origin);

        let stop = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search Stop::FrontierEmpty;
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper path or already closed.
            let node = &self.nodes[ci];
            if node.generation != cur_gen || !node.open || node.g != current.g {
                continue;
            }

            let cp = Position::from_index(ci);
            if objective.reached(cp).is_some() {
                break 'search Stop::Reached(ci);
            }
            if ops >= options.max_ops {
                break 'search Stop::OpsSpent;
            }
            ops += 1;
            self.nodes[ci].open = false;

            let rank = objective.rank(cp);
            if rank < best_rank {
                best = ci;
                best_rank = rank;
            }

            let current_g = current.g;
            for np in cp.neighbors_8() {
                let Some(ni) = np.index() else {
                    continue;
                };
                let Some(step) = costs.cost(np) else {
                    continue;
                };
                let tentative = current_g.saturating_add(step);
                if tentative > options.max_cost {
                    continue;
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                // Reopens closed nodes too: a weight above 1 makes the
                // heuristic inconsistent.
                n.g = tentative;
                n.parent = ci;
                n.open = true;

                seq += 1;
                self.open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                    f: objective.priority(tentative, np),
                    seq,
                });
            }
        };

        let (end, incomplete) = match stop {
            Stop::Reached(ci) => (ci, false),
            Stop::OpsSpent | Stop::FrontierEmpty => (best, true),
        };
        let result = SearchResult {
            path: self.reconstruct(start, end),
            ops,
            cost: self.nodes[end].g,
            incomplete,
        };

        if incomplete && !options.flee {
            let reason = match stop {
                Stop::OpsSpent => "op budget spent",
                _ => "frontier exhausted",
            };
            log::debug!(
                "search from {origin} incomplete ({reason}): ops={}, cost={}, steps={}",
                result.ops,
                result.cost,
                result.path.len()
            );
        }
        result
    }
}

/// One-shot search with a fresh [`PathFinder`].
pub fn search_path(
    terrain: &TerrainGrid,
    origin: Position,
    goals: &[Goal],
    options: &SearchOptions<'_>,
) -> SearchResult {
    PathFinder::new().search(terrain, origin, goals, options)
}
