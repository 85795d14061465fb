#![no_main]

//! Structured replay fuzzer.
//!
//! Builds well-formed logs from generated plays so that the fuzzer spends
//! its time in replay and queries rather than in the parser:
//! 1. Every play has a valid width, tag and location code
//! 2. Dracula may hide, double back or teleport at any point
//! 3. Queries run on whatever state replay produces

use arbitrary::Arbitrary;
use fury::query::shortest_path;
use fury::{GameError, GameView, Map, PlaceId, Player, TransportMask};
use libfuzzer_sys::fuzz_target;

/// Dracula's move choice.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum DraculaMove {
    Place(u8),
    City,
    Sea,
    Hide,
    DoubleBack(u8),
    Teleport,
}

/// One generated play.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzPlay {
    place: u8,
    dracula: DraculaMove,
    /// Encounter or action flags, one bit per slot.
    flags: u8,
}

/// Structured input for replay fuzzing.
#[derive(Arbitrary, Debug)]
struct ReplayInput {
    plays: Vec<FuzzPlay>,
    /// Target for a path query at the end.
    target: u8,
}

fn place_code(map: &Map, raw: u8) -> &str {
    #[allow(clippy::cast_possible_truncation)]
    let count = map.num_places() as u8;
    map.abbrev(PlaceId::new(raw % count))
}

fn render(map: &Map, turn: usize, play: FuzzPlay) -> String {
    let player = Player::from_index(turn % 5).unwrap_or(Player::Dracula);
    let bit = |n: u8| play.flags & (1 << n) != 0;

    if player.is_hunter() {
        let mut encounters = String::new();
        for slot in 0..4 {
            let c = match (bit(slot * 2), bit(slot * 2 + 1)) {
                (true, false) => 'T',
                (false, true) => 'V',
                (true, true) => 'D',
                (false, false) => '.',
            };
            encounters.push(c);
        }
        return format!("{}{}{encounters}", player.tag(), place_code(map, play.place));
    }

    let code = match play.dracula {
        DraculaMove::Place(raw) => place_code(map, raw).to_string(),
        DraculaMove::City => "C?".to_string(),
        DraculaMove::Sea => "S?".to_string(),
        DraculaMove::Hide => "HI".to_string(),
        DraculaMove::DoubleBack(k) => format!("D{}", k % 5 + 1),
        DraculaMove::Teleport => "TP".to_string(),
    };
    let expiry = match (bit(2), bit(3)) {
        (true, false) => 'M',
        (false, true) => 'V',
        _ => '.',
    };
    format!(
        "D{code}{}{}{expiry}.",
        if bit(0) { 'T' } else { '.' },
        if bit(1) { 'V' } else { '.' },
    )
}

fuzz_target!(|input: ReplayInput| {
    let map = Map::europe();
    let log: Vec<String> = input
        .plays
        .iter()
        .take(400)
        .enumerate()
        .map(|(turn, &play)| render(&map, turn, play))
        .collect();
    let log = log.join(" ");

    let view = match GameView::new(&log, &map) {
        Ok(view) => view,
        // Only relative moves that run off the start of history may fail.
        Err(GameError::Resolve { .. }) => return,
        Err(e) => panic!("well-formed log rejected: {e}"),
    };

    for player in Player::ALL {
        assert!(view.health(player) >= 0);
        assert_eq!(
            view.last_locations(player, 3).len(),
            view.location_history(player).len().min(3)
        );
    }

    let target = PlaceId::new(input.target % 71);
    for hunter in Player::HUNTERS {
        let places = view.where_can_they_go_by_type(hunter, TransportMask::ALL);
        if let Some(Some(from)) = view.location(hunter).map(|l| l.place()) {
            assert_eq!(places.first(), Some(&from));
            assert!(shortest_path(&map, hunter, view.round(), from, target).is_some());
        }
    }
    let _ = view.dracula_where_can_i_go();
});
