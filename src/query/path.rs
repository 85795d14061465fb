//! Round-aware shortest paths for hunters.

use std::collections::VecDeque;

use crate::game::Player;
use crate::map::{Map, PlaceId, TransportMask};
use crate::query::reachable;

/// Fewest-moves route for a hunter from `from` to `to`, starting in `round`.
///
/// Each step is one move, so the step taken at depth `d` uses round
/// `round + d` for rail availability. Since rail legs repeat with the
/// timetable cycle, the search runs over (place, depth mod cycle) states;
/// staying put is a move too, so a route may wait for a better train.
///
/// The returned places exclude `from` and end with `to`; `from == to` gives
/// an empty path. Ties between equally short routes are broken by
/// discovery order.
///
/// Returns `None` for Dracula, for places not on the map, and when `to`
/// cannot be reached.
#[must_use]
pub fn shortest_path(
    map: &Map,
    player: Player,
    round: usize,
    from: PlaceId,
    to: PlaceId,
) -> Option<Vec<PlaceId>> {
    if player.is_dracula() || map.place(from).is_none() || map.place(to).is_none() {
        return None;
    }
    if from == to {
        return Some(Vec::new());
    }

    let cycle = map.rail_cycle();
    let state = |place: PlaceId, depth: usize| place.index() * cycle + depth % cycle;

    let mut previous: Vec<Option<usize>> = vec![None; map.num_places() * cycle];
    let mut visited = vec![false; map.num_places() * cycle];
    let start = state(from, 0);
    visited[start] = true;
    let mut queue = VecDeque::from([(from, 0)]);

    while let Some((place, depth)) = queue.pop_front() {
        let current = state(place, depth);
        for next in reachable(map, player, round + depth, place, TransportMask::ALL) {
            let reached = state(next, depth + 1);
            if visited[reached] {
                continue;
            }
            visited[reached] = true;
            previous[reached] = Some(current);
            if next == to {
                return Some(unwind(&previous, cycle, start, reached));
            }
            queue.push_back((next, depth + 1));
        }
    }

    None
}

fn unwind(previous: &[Option<usize>], cycle: usize, start: usize, end: usize) -> Vec<PlaceId> {
    let mut path = Vec::new();
    let mut current = end;
    while current != start {
        #[allow(clippy::cast_possible_truncation)]
        path.push(PlaceId::new((current / cycle) as u8));
        match previous[current] {
            Some(prev) => current = prev,
            None => break,
        }
    }
    path.reverse();
    path
}
