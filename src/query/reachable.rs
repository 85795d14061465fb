//! Places reachable in a single move.

use std::collections::VecDeque;

use crate::game::Player;
use crate::map::{Map, PlaceId, Transport, TransportMask};

/// Places `player` can reach from `from` in one move during `round`.
///
/// The result starts with `from` itself, followed by road neighbours, then
/// places reachable by chaining rail legs (nearest first), then boat
/// neighbours. Every place appears once.
///
/// Hunters may chain as many rail legs as [`Map::rail_legs`] allows for
/// their turn position. Dracula never travels by rail and never enters the
/// hospital. An origin that is not on the map yields just `[from]`.
#[must_use]
pub fn reachable(
    map: &Map,
    player: Player,
    round: usize,
    from: PlaceId,
    mask: TransportMask,
) -> Vec<PlaceId> {
    let mut result = vec![from];
    if map.place(from).is_none() {
        return result;
    }

    let mut seen = vec![false; map.num_places()];
    seen[from.index()] = true;
    let allowed = |place: PlaceId| !(player.is_dracula() && place == map.hospital());

    let mut visit = |place: PlaceId, result: &mut Vec<PlaceId>| {
        if allowed(place) && !seen[place.index()] {
            seen[place.index()] = true;
            result.push(place);
        }
    };

    if mask.road {
        for place in map.neighbours(from, Transport::Road) {
            visit(place, &mut result);
        }
    }

    if mask.rail && player.is_hunter() {
        let legs = map.rail_legs(round, player.index());
        let mut boarded = vec![false; map.num_places()];
        boarded[from.index()] = true;
        let mut frontier = VecDeque::from([(from, 0)]);
        while let Some((place, depth)) = frontier.pop_front() {
            if depth == legs {
                continue;
            }
            for next in map.neighbours(place, Transport::Rail) {
                visit(next, &mut result);
                if !boarded[next.index()] {
                    boarded[next.index()] = true;
                    frontier.push_back((next, depth + 1));
                }
            }
        }
    }

    if mask.boat {
        for place in map.neighbours(from, Transport::Boat) {
            visit(place, &mut result);
        }
    }

    result
}
