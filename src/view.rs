//! Read-only view of a replayed game.
//!
//! [`GameView`] pairs a [`GameState`] with the map it was replayed on and
//! answers every query a player needs to choose a move. All queries return
//! owned copies; nothing here can mutate the state.

use crate::error::GameError;
use crate::game::{GameState, Move, Player, MAX_DOUBLE_BACK, TRAIL_SIZE};
use crate::map::{Location, Map, PlaceId, TransportMask};
use crate::query;
use crate::rules::Rules;

/// Replayed game plus the map it is played on.
#[derive(Debug, Clone)]
pub struct GameView<'m> {
    map: &'m Map,
    state: GameState,
}

impl<'m> GameView<'m> {
    /// Replay a log with the standard rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is malformed or cannot be replayed.
    pub fn new(log: &str, map: &'m Map) -> Result<Self, GameError> {
        Self::with_rules(log, map, &Rules::default())
    }

    /// Replay a log with custom rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is malformed or cannot be replayed.
    pub fn with_rules(log: &str, map: &'m Map, rules: &Rules) -> Result<Self, GameError> {
        let state = GameState::from_log_with(log, map, rules)?;
        Ok(Self::from_state(state, map))
    }

    /// Wrap an already replayed state.
    #[must_use]
    pub const fn from_state(state: GameState, map: &'m Map) -> Self {
        Self { map, state }
    }

    /// The map.
    #[must_use]
    pub const fn map(&self) -> &'m Map {
        self.map
    }

    /// The underlying state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current round, starting at 0.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.state.round()
    }

    /// Player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.state.score()
    }

    /// Health of a hunter, or Dracula's blood points.
    #[must_use]
    pub const fn health(&self, player: Player) -> i32 {
        self.state.health(player)
    }

    /// Where a player is, or `None` if they have not moved yet.
    ///
    /// A hunter lying in hospital is reported at the hospital.
    #[must_use]
    pub fn location(&self, player: Player) -> Option<Location> {
        let state = self.state.player(player);
        if player.is_hunter() && state.in_hospital {
            return Some(Location::Place(self.map.hospital()));
        }
        state.location()
    }

    /// Location of the immature vampire, if any.
    #[must_use]
    pub const fn vampire_location(&self) -> Option<Location> {
        self.state.vampire()
    }

    /// Locations of active traps, oldest first. A location appears once
    /// per trap.
    #[must_use]
    pub fn trap_locations(&self) -> Vec<Location> {
        self.state.traps().to_vec()
    }

    /// Every move a player has made, oldest first.
    #[must_use]
    pub fn move_history(&self, player: Player) -> Vec<Move> {
        self.state.player(player).moves.clone()
    }

    /// The `n` most recent moves of a player, oldest first.
    #[must_use]
    pub fn last_moves(&self, player: Player, n: usize) -> Vec<Move> {
        tail(&self.state.player(player).moves, n)
    }

    /// Every resolved location of a player, oldest first.
    #[must_use]
    pub fn location_history(&self, player: Player) -> Vec<Location> {
        self.state.player(player).locations.clone()
    }

    /// The `n` most recent resolved locations of a player, oldest first.
    #[must_use]
    pub fn last_locations(&self, player: Player, n: usize) -> Vec<Location> {
        tail(&self.state.player(player).locations, n)
    }

    /// Public trail of a player, newest first.
    #[must_use]
    pub fn trail(&self, player: Player) -> Vec<Location> {
        self.state.player(player).trail.recent().collect()
    }

    /// Places `player` could reach from `from` during `round` by any means.
    #[must_use]
    pub fn reachable(&self, player: Player, round: usize, from: PlaceId) -> Vec<PlaceId> {
        query::reachable(self.map, player, round, from, TransportMask::ALL)
    }

    /// Places `player` could reach from `from` during `round` using only
    /// the given transport.
    #[must_use]
    pub fn reachable_by_type(
        &self,
        player: Player,
        round: usize,
        from: PlaceId,
        mask: TransportMask,
    ) -> Vec<PlaceId> {
        query::reachable(self.map, player, round, from, mask)
    }

    /// Round in which `player` makes their next move.
    #[must_use]
    pub const fn next_round(&self, player: Player) -> usize {
        if player.index() < self.current_player().index() {
            self.round() + 1
        } else {
            self.round()
        }
    }

    /// Places `player` could reach on their next move.
    ///
    /// Empty if the player has not moved yet or their location is hidden.
    #[must_use]
    pub fn where_can_they_go(&self, player: Player) -> Vec<PlaceId> {
        self.where_can_they_go_by_type(player, TransportMask::ALL)
    }

    /// Places `player` could reach on their next move using only the given
    /// transport.
    #[must_use]
    pub fn where_can_they_go_by_type(&self, player: Player, mask: TransportMask) -> Vec<PlaceId> {
        match self.location(player).and_then(Location::place) {
            Some(from) => query::reachable(self.map, player, self.next_round(player), from, mask),
            None => Vec::new(),
        }
    }

    /// Shortest route for a hunter from their current location to `to`,
    /// excluding the current location.
    ///
    /// `None` for Dracula, for a hunter who has not moved yet, or if `to`
    /// is unreachable.
    #[must_use]
    pub fn shortest_path(&self, player: Player, to: PlaceId) -> Option<Vec<PlaceId>> {
        let from = self.location(player)?.place()?;
        query::shortest_path(self.map, player, self.next_round(player), from, to)
    }

    /// Most recently revealed real location of Dracula and the round he was
    /// there.
    #[must_use]
    pub fn last_known_dracula_location(&self) -> Option<(PlaceId, usize)> {
        self.state
            .player(Player::Dracula)
            .locations
            .iter()
            .enumerate()
            .rev()
            .find_map(|(round, location)| location.place().map(|id| (id, round)))
    }

    /// Moves Dracula may legally make next.
    ///
    /// Empty before his first move, while his location is hidden, and when
    /// his only option is to teleport (see [`Self::dracula_must_teleport`]).
    /// `TP` itself is never listed.
    #[must_use]
    pub fn dracula_valid_moves(&self) -> Vec<Move> {
        let dracula = self.state.player(Player::Dracula);
        let Some(Location::Place(current)) = dracula.location() else {
            return Vec::new();
        };

        let window = TRAIL_SIZE - 1;
        let recent_moves = tail(&dracula.moves, window);
        let recent_locations = tail(&dracula.locations, window);
        let options = self.reachable(Player::Dracula, self.next_round(Player::Dracula), current);

        let mut moves: Vec<Move> = options
            .iter()
            .filter(|&&place| !recent_locations.contains(&Location::Place(place)))
            .map(|&place| Move::Place(place))
            .collect();

        if !recent_moves.iter().any(|mv| mv.is_hide()) && !self.map.is_sea(current) {
            moves.push(Move::Hide);
        }

        if !recent_moves.iter().any(|mv| mv.is_double_back()) {
            let made = dracula.moves_made();
            for k in 1..=MAX_DOUBLE_BACK {
                let Some(index) = made.checked_sub(usize::from(k)) else {
                    break;
                };
                if let Location::Place(target) = dracula.locations[index]
                    && (target == current || options.contains(&target))
                {
                    moves.push(Move::DoubleBack(k));
                }
            }
        }

        moves
    }

    /// Check if Dracula is cornered: he is at a known place but has no valid
    /// move, so his next move is `TP` to the castle.
    #[must_use]
    pub fn dracula_must_teleport(&self) -> bool {
        let at_place = matches!(
            self.state.player(Player::Dracula).location(),
            Some(Location::Place(_))
        );
        at_place && self.dracula_valid_moves().is_empty()
    }

    /// Places Dracula may end up in on his next move, by any legal move.
    ///
    /// A cornered Dracula can only reach his castle.
    #[must_use]
    pub fn dracula_where_can_i_go(&self) -> Vec<PlaceId> {
        let dracula = self.state.player(Player::Dracula);
        let moves = self.dracula_valid_moves();
        if moves.is_empty() {
            return if self.dracula_must_teleport() {
                vec![self.map.castle()]
            } else {
                Vec::new()
            };
        }

        let mut places = Vec::new();
        for mv in moves {
            let target = match mv {
                Move::Place(place) => Some(place),
                Move::Teleport => Some(self.map.castle()),
                Move::Hide => dracula.location().and_then(Location::place),
                Move::DoubleBack(k) => dracula
                    .moves_made()
                    .checked_sub(usize::from(k))
                    .and_then(|index| dracula.locations[index].place()),
                Move::CityUnknown | Move::SeaUnknown => None,
            };
            if let Some(place) = target
                && !places.contains(&place)
            {
                places.push(place);
            }
        }
        places
    }
}

fn tail<T: Copy>(items: &[T], n: usize) -> Vec<T> {
    items[items.len().saturating_sub(n)..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(map: &Map, abbrev: &str) -> PlaceId {
        map.find(abbrev).unwrap()
    }

    #[test]
    fn test_last_moves_clamps() {
        let map = Map::europe();
        let view = GameView::new("GST.... SAO.... HZU.... MBB.... DC?.... GGE....", &map).unwrap();
        assert!(view.last_moves(Player::Godalming, 0).is_empty());
        assert_eq!(view.last_moves(Player::Godalming, 10).len(), 2);
        assert_eq!(
            view.last_moves(Player::Godalming, 1),
            vec![Move::Place(id(&map, "GE"))]
        );
    }

    #[test]
    fn test_from_state_matches_log_replay() {
        let map = Map::europe();
        let log = "GST.... SAO.... HZU.... MBB.... DC?.V..";
        let state = GameState::from_log(log, &map).unwrap();
        let view = GameView::from_state(state.clone(), &map);
        assert_eq!(view.state(), GameView::new(log, &map).unwrap().state());
        assert_eq!(view.state(), &state);
    }

    #[test]
    fn test_next_round() {
        let map = Map::europe();
        let view = GameView::new("GST.... SAO....", &map).unwrap();
        assert_eq!(view.next_round(Player::Godalming), 1);
        assert_eq!(view.next_round(Player::Seward), 1);
        assert_eq!(view.next_round(Player::VanHelsing), 0);
        assert_eq!(view.next_round(Player::Dracula), 0);
    }

    #[test]
    fn test_where_can_they_go_before_moving() {
        let map = Map::europe();
        let view = GameView::new("", &map).unwrap();
        assert!(view.where_can_they_go(Player::Godalming).is_empty());
        assert!(view.dracula_valid_moves().is_empty());
    }

    #[test]
    fn test_dracula_first_moves() {
        let map = Map::europe();
        let view = GameView::new("GST.... SAO.... HZU.... MBB.... DCD....", &map).unwrap();
        let moves = view.dracula_valid_moves();
        assert!(moves.contains(&Move::Place(id(&map, "GA"))));
        assert!(moves.contains(&Move::Place(id(&map, "KL"))));
        assert!(moves.contains(&Move::Hide));
        assert!(moves.contains(&Move::DoubleBack(1)));
        assert!(!moves.contains(&Move::DoubleBack(2)));
        assert!(!moves.contains(&Move::Place(id(&map, "CD"))));

        let places = view.dracula_where_can_i_go();
        let mut codes: Vec<_> = places.iter().map(|&p| map.abbrev(p)).collect();
        codes.sort_unstable();
        assert_eq!(codes, vec!["CD", "GA", "KL"]);
    }

    #[test]
    fn test_hunter_in_hospital_location() {
        let map = Map::europe();
        let view = GameView::new("GST.... SAO.... HZU.... MBB.... DC?.V.. GSTDDD.", &map).unwrap();
        assert_eq!(
            view.location(Player::Godalming),
            Some(Location::Place(map.hospital()))
        );
        assert_eq!(
            view.location_history(Player::Godalming),
            vec![Location::Place(id(&map, "ST")); 2]
        );
    }
}
