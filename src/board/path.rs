use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
};

use crate::{
    board::Board,
    grid::Coordinate,
    tile_component::{Biome, FeatureQuery},
};

/// Result of a path query.
///
/// `steps` runs from the tile adjacent to the start through the matched or
/// destination tile; the start itself is excluded, mirroring the fact that
/// hops and cost are measured from the start to the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    /// Number of hops from the start to the matched tile, or -1 if the
    /// search found nothing.
    pub tiles_traversed: i32,
    /// Accumulated travel cost of every stepped-through tile, or -1 if the
    /// search found nothing.
    pub travel_cost: i32,
    pub steps: Vec<Coordinate>,
}

impl Path {
    /// The sentinel returned when the frontier or the hop budget runs out.
    pub fn not_found() -> Self {
        Self {
            tiles_traversed: -1,
            travel_cost: -1,
            steps: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.tiles_traversed >= 0
    }
}

/// A multi-criteria path query.
///
/// One routine serves four query shapes: exact destination, nearest matching
/// biome, nearest matching feature, and biome-and-feature combinations,
/// each under unweighted (hop-counted) or cost-weighted traversal.
#[derive(Debug, Clone)]
pub struct PathQuery {
    pub start: Coordinate,
    /// Match tiles of this biome. `None` leaves biomes out of the match.
    pub biome: Option<Biome>,
    /// Match tiles by feature. `None` leaves features out of the match.
    pub feature: Option<FeatureQuery>,
    /// When true, every edge costs one hop and the frontier is a FIFO
    /// (breadth-first). When false, the frontier is ordered by accumulated
    /// travel cost and only travellable tiles are expanded from.
    pub ignore_travel_cost: bool,
    /// Hop budget. Candidates past it are neither matched nor expanded.
    pub max_distance: u32,
    /// Number of leading matches to discard before returning one.
    pub to_skip: u32,
    /// Explicit destination; honored only when both filters are `None`.
    pub end: Option<Coordinate>,
}

impl PathQuery {
    /// Hop-counted query for an exact destination.
    pub fn to_coordinate(start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            biome: None,
            feature: None,
            ignore_travel_cost: true,
            max_distance: u32::MAX,
            to_skip: 0,
            end: Some(end),
        }
    }

    /// Hop-counted query for the nearest tile of a biome.
    pub fn to_biome(start: Coordinate, biome: Biome) -> Self {
        Self {
            start,
            biome: Some(biome),
            feature: None,
            ignore_travel_cost: true,
            max_distance: u32::MAX,
            to_skip: 0,
            end: None,
        }
    }

    /// Hop-counted query for the nearest tile matching a feature filter.
    pub fn to_feature(start: Coordinate, feature: FeatureQuery) -> Self {
        Self {
            start,
            biome: None,
            feature: Some(feature),
            ignore_travel_cost: true,
            max_distance: u32::MAX,
            to_skip: 0,
            end: None,
        }
    }

    /// Order the frontier by accumulated travel cost instead of hop count.
    pub fn weighted(mut self) -> Self {
        self.ignore_travel_cost = false;
        self
    }

    /// Bound the search to `max_distance` hops.
    pub fn within(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Discard the first `to_skip` matches.
    pub fn skipping(mut self, to_skip: u32) -> Self {
        self.to_skip = to_skip;
        self
    }
}

/// Frontier entry for weighted searches. The ordering is reversed so that
/// the binary heap pops the cheapest accumulated cost first; ties fall back
/// to coordinate order, which callers must not rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CostOrdered {
    travel_cost: i32,
    coordinates: Coordinate,
}

impl Ord for CostOrdered {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .travel_cost
            .cmp(&self.travel_cost)
            .then_with(|| other.coordinates.cmp(&self.coordinates))
    }
}

impl PartialOrd for CostOrdered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Board {
    /// Answer a path query: the nearest tile, by hop count or accumulated
    /// cost, that satisfies the query's target condition, skipping the
    /// first `to_skip` matches.
    ///
    /// Any adjacent coordinate is admitted as a match candidate, even if it
    /// is ungenerated or untravellable; the search only expands outward
    /// from tiles that exist, and in weighted mode only from travellable
    /// ones. Matches are evaluated in discovery order. The search is
    /// read-only and never triggers generation.
    pub fn path_to(&self, query: &PathQuery) -> Path {
        let check_biome = query.biome.is_some();
        let check_feature = query.feature.is_some();

        // A destination equal to the start needs no traversal.
        if !check_biome && !check_feature && query.end == Some(query.start) {
            return Path::default();
        }

        let mut visited: HashSet<Coordinate> = HashSet::new();
        let mut partial_paths: HashMap<Coordinate, Path> = HashMap::new();
        let mut queue: VecDeque<Coordinate> = VecDeque::new();
        let mut priority_queue: BinaryHeap<CostOrdered> = BinaryHeap::new();

        visited.insert(query.start);
        partial_paths.insert(query.start, Path::default());
        if query.ignore_travel_cost {
            queue.push_back(query.start);
        } else {
            priority_queue.push(CostOrdered {
                travel_cost: 0,
                coordinates: query.start,
            });
        }

        let mut matches = 0;
        loop {
            let previous = if query.ignore_travel_cost {
                queue.pop_front()
            } else {
                priority_queue.pop().map(|entry| entry.coordinates)
            };
            let Some(previous) = previous else {
                break;
            };
            // Dropping the entry once its coordinate is expanded bounds the
            // side table to the current frontier plus one layer.
            let Some(previous_path) = partial_paths.remove(&previous) else {
                continue;
            };

            for here in previous.adjacent() {
                if !visited.insert(here) {
                    continue;
                }

                let tile = self.tiles.get(&here);

                let tiles_traversed = previous_path.tiles_traversed + 1;
                if tiles_traversed as u32 > query.max_distance {
                    continue;
                }

                let travel_cost = previous_path.travel_cost
                    + tile.map_or(0, |tile| tile.travel_cost() as i32);

                let mut steps = previous_path.steps.clone();
                steps.push(here);
                let path = Path {
                    tiles_traversed,
                    travel_cost,
                    steps,
                };

                let matched = if !check_biome && !check_feature {
                    Some(here) == query.end
                } else {
                    let biome_matched = query
                        .biome
                        .is_none_or(|wanted| tile.is_some_and(|tile| tile.biome() == wanted));
                    let feature_matched = query
                        .feature
                        .is_none_or(|filter| tile.is_some_and(|tile| filter.matches(tile.feature())));
                    biome_matched && feature_matched
                };
                if matched {
                    matches += 1;
                    if matches > query.to_skip {
                        return path;
                    }
                }

                // Ungenerated tiles are dead ends, and untravellable tiles
                // are dead ends under weighted traversal; both can still
                // match above, but nothing expands outward from them.
                let expandable = tile
                    .is_some_and(|tile| query.ignore_travel_cost || tile.is_travellable());
                if expandable {
                    if query.ignore_travel_cost {
                        queue.push_back(here);
                    } else {
                        priority_queue.push(CostOrdered {
                            travel_cost: path.travel_cost,
                            coordinates: here,
                        });
                    }
                    partial_paths.insert(here, path);
                }
            }
        }

        Path::not_found()
    }
}
