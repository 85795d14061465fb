#![no_main]

//! Raw log fuzzer.
//!
//! Arbitrary text must either be rejected with an error or replay into a
//! state whose bookkeeping is consistent. It must never panic.

use fury::{GameView, Map, Player};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(log) = std::str::from_utf8(data) else {
        return;
    };
    let map = Map::europe();
    let Ok(view) = GameView::new(log, &map) else {
        return;
    };

    let plays = log.split_whitespace().count();
    assert_eq!(view.round(), plays / 5);
    for player in Player::ALL {
        assert!(view.health(player) >= 0);
    }
    let _ = view.dracula_valid_moves();
});
