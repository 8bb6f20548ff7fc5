// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of directional navigation over arbitrary seat layouts.

use kurbo::Point;
use parterre_focus::{
    AxisBandPolicy, DEFAULT_TOLERANCE, Direction, FocusEntry, FocusPolicy, FocusSpace,
    GridFocusIndex,
};
use proptest::prelude::*;

fn layout() -> impl Strategy<Value = Vec<FocusEntry<usize>>> {
    // Coordinates snapped to a 5-unit lattice so ties and band edges show up.
    proptest::collection::vec((0_u16..200, 0_u16..200), 1..120).prop_map(|pts| {
        pts.into_iter()
            .enumerate()
            .map(|(id, (x, y))| FocusEntry {
                id,
                point: Point::new(f64::from(x) * 5.0, f64::from(y) * 5.0),
            })
            .collect()
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

#[test]
fn down_picks_the_only_neighbor() {
    let nodes = [
        FocusEntry { id: "a", point: Point::new(0.0, 0.0) },
        FocusEntry { id: "b", point: Point::new(0.0, 40.0) },
    ];
    let space = FocusSpace { nodes: &nodes };
    assert_eq!(AxisBandPolicy::default().next("a", Direction::Down, &space), Some("b"));
}

#[test]
fn nearer_seat_takes_over() {
    let policy = AxisBandPolicy::default();
    let far = [
        FocusEntry { id: "a", point: Point::new(0.0, 0.0) },
        FocusEntry { id: "c", point: Point::new(0.0, 200.0) },
    ];
    assert_eq!(policy.next("a", Direction::Down, &FocusSpace { nodes: &far }), Some("c"));

    let both = [far[0], far[1], FocusEntry { id: "b", point: Point::new(0.0, 40.0) }];
    assert_eq!(policy.next("a", Direction::Down, &FocusSpace { nodes: &both }), Some("b"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn result_is_never_current_and_stays_in_band(nodes in layout(), dir in direction(), pick in any::<prop::sample::Index>()) {
        let from = pick.index(nodes.len());
        let space = FocusSpace { nodes: &nodes };
        let policy = AxisBandPolicy::default();
        if let Some(to) = policy.next(from, dir, &space) {
            prop_assert_ne!(to, from);
            let (a, b) = (nodes[from].point, nodes[to].point);
            prop_assert!(dir.lateral_offset(a, b) <= DEFAULT_TOLERANCE);
            prop_assert!(dir.forward_distance(a, b).is_some());
        }
    }

    #[test]
    fn result_is_nearest_in_band(nodes in layout(), dir in direction(), pick in any::<prop::sample::Index>()) {
        let from = pick.index(nodes.len());
        let space = FocusSpace { nodes: &nodes };
        let origin = nodes[from].point;
        let found = AxisBandPolicy::default().next(from, dir, &space);
        let best = nodes
            .iter()
            .filter(|n| n.id != from)
            .filter_map(|n| parterre_focus::band_distance(dir, origin, n.point, DEFAULT_TOLERANCE))
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))));
        match (found, best) {
            (None, None) => {}
            (Some(to), Some(d)) => {
                let got = dir.forward_distance(origin, nodes[to].point);
                prop_assert_eq!(got, Some(d));
            }
            other => prop_assert!(false, "mismatch: {:?}", other),
        }
    }

    #[test]
    fn grid_index_matches_linear_scan(
        nodes in layout(),
        cell in prop_oneof![Just(8.0), Just(32.0), Just(64.0), Just(250.0)],
    ) {
        let space = FocusSpace { nodes: &nodes };
        let policy = AxisBandPolicy::default();
        let index = GridFocusIndex::new(&space, DEFAULT_TOLERANCE, cell);
        for from in 0..nodes.len() {
            for dir in Direction::ALL {
                prop_assert_eq!(
                    index.next_index(from, dir),
                    policy.next_index(from, dir, &space)
                );
            }
        }
    }
}
