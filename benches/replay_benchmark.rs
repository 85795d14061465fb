//! Benchmarks for log replay and movement queries.
//!
//! Replay runs once per AI decision, so it is the hot path for bots.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fury::query::{reachable, shortest_path};
use fury::{GameView, Map, Player, TransportMask};

/// A long game touching traps, vampires, double backs and hides.
fn long_log(rounds: usize) -> String {
    const ROUTE: [&str; 6] = [
        "DCD.V.. ", "DGAT... ", "DHIT... ", "DD2T... ", "DKLT.M. ", "DBCT... ",
    ];
    let mut log = String::new();
    for round in 0..rounds {
        log.push_str("GLS.... SMR.... HSW.... MBU.... ");
        log.push_str(ROUTE[round % ROUTE.len()]);
    }
    log.trim_end().to_string()
}

fn bench_replay(c: &mut Criterion) {
    let map = Map::europe();
    let short = long_log(6);
    let long = long_log(60);

    c.bench_function("replay_6_rounds", |b| {
        b.iter(|| black_box(GameView::new(black_box(&short), &map)));
    });

    c.bench_function("replay_60_rounds", |b| {
        b.iter(|| black_box(GameView::new(black_box(&long), &map)));
    });
}

fn bench_reachable(c: &mut Criterion) {
    let map = Map::europe();
    let paris = map.find("PA").expect("Paris is on the map");

    c.bench_function("reachable_all_rounds", |b| {
        b.iter(|| {
            for round in 0..4 {
                for player in Player::ALL {
                    black_box(reachable(&map, player, round, black_box(paris), TransportMask::ALL));
                }
            }
        });
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let map = Map::europe();
    let lisbon = map.find("LS").expect("Lisbon is on the map");

    c.bench_function("shortest_path_lisbon_to_castle", |b| {
        b.iter(|| {
            black_box(shortest_path(
                &map,
                Player::Seward,
                black_box(1),
                lisbon,
                map.castle(),
            ))
        });
    });

    c.bench_function("shortest_path_all_targets", |b| {
        b.iter(|| {
            for to in map.place_ids() {
                black_box(shortest_path(&map, Player::Godalming, 0, lisbon, to));
            }
        });
    });
}

fn bench_dracula_moves(c: &mut Criterion) {
    let map = Map::europe();
    let log = long_log(30);
    let view = GameView::new(&log, &map).expect("bench log replays");

    c.bench_function("dracula_valid_moves", |b| {
        b.iter(|| black_box(view.dracula_valid_moves()));
    });
}

criterion_group!(
    benches,
    bench_replay,
    bench_reachable,
    bench_shortest_path,
    bench_dracula_moves
);
criterion_main!(benches);
