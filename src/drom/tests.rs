use super::*;
use crate::error::DromError;
use crate::hex::{Edge, Hexagon, Point, attach};

fn drom_with_three() -> DromState {
    let mut drom = DromState::default();
    drom.add_adjacent(0).unwrap();
    drom.add_adjacent(1).unwrap();
    drom
}

#[test]
fn starts_with_a_single_seed() {
    let drom = DromState::new(Point::new(2.0, -1.0));
    assert_eq!(drom.len(), 1);
    assert_eq!(drom.current_index(), 0);
    assert_eq!(drom.current().vertex(0), Point::new(2.0, -1.0));
    assert!(drom.history().is_none());
}

#[test]
fn add_appends_and_becomes_current() {
    let mut drom = DromState::default();
    let seed = drom.current().clone();

    let index = drom.add_adjacent(0).unwrap();
    assert_eq!(index, 1);
    assert_eq!(drom.current_index(), 1);
    assert_eq!(drom.current(), &attach(&seed, Edge::Under));

    let history = drom.history().expect("history recorded");
    assert_eq!(history.index, 0);
    assert_eq!(history.hexagon, seed);
}

#[test]
fn add_rejects_invalid_edge_without_changes() {
    let mut drom = DromState::default();
    assert_eq!(drom.add_adjacent(6), Err(DromError::InvalidEdge(6)));
    assert_eq!(drom.len(), 1);
    assert!(drom.history().is_none());
}

#[test]
fn switch_current_validates_range() {
    let mut drom = drom_with_three();
    assert_eq!(
        drom.switch_current(5),
        Err(DromError::OutOfRange { index: 5, len: 3 })
    );
    assert_eq!(drom.current_index(), 2);

    drom.switch_current(0).unwrap();
    assert_eq!(drom.current_index(), 0);
}

#[test]
fn remove_last_restores_previous_current() {
    let mut drom = DromState::default();
    drom.add_adjacent(2).unwrap();
    drom.switch_current(0).unwrap();
    drom.add_adjacent(3).unwrap();

    let removed = drom.remove_last().unwrap();
    assert_eq!(removed, attach(&drom.hexagons()[0], Edge::Over));
    assert_eq!(drom.len(), 2);
    assert_eq!(drom.current_index(), 0);
}

#[test]
fn only_one_level_of_undo() {
    let mut drom = drom_with_three();
    drom.remove_last().unwrap();
    assert_eq!(drom.remove_last(), Err(DromError::NoHistory));
    assert_eq!(drom.len(), 2);
    assert_eq!(drom.current_index(), 1);
}

#[test]
fn fresh_drom_has_no_history() {
    let mut drom = DromState::default();
    assert_eq!(drom.remove_last(), Err(DromError::NoHistory));
}

#[test]
fn chain_of_undos_returns_to_seed() {
    let mut drom = DromState::default();
    let seed = drom.current().clone();
    for edge in [0, 1, 2, 3] {
        drom.add_adjacent(edge).unwrap();
        drom.remove_last().unwrap();
    }
    assert_eq!(drom.len(), 1);
    assert_eq!(drom.current_index(), 0);
    assert_eq!(drom.current().anchor(), seed.anchor());
}

#[test]
fn remove_current_falls_back_to_history() {
    let mut drom = DromState::default();
    drom.add_adjacent(0).unwrap();
    drom.add_adjacent(1).unwrap();
    drom.switch_current(0).unwrap();
    drom.add_adjacent(3).unwrap();
    // history points at hexagon 0, current is 3
    let history_hex = drom.history().unwrap().hexagon.clone();

    drom.remove_at(3).unwrap();
    assert_eq!(drom.current_index(), 0);
    assert_eq!(drom.current(), &history_hex);
    assert!(drom.history().is_none());
}

#[test]
fn remove_current_tracks_history_after_shift() {
    let mut drom = DromState::default();
    drom.add_adjacent(0).unwrap();
    drom.add_adjacent(1).unwrap();
    drom.add_adjacent(2).unwrap();
    // history points at hexagon 2
    let history_hex = drom.history().unwrap().hexagon.clone();
    drom.switch_current(0).unwrap();

    drom.remove_at(0).unwrap();
    assert_eq!(drom.current_index(), 1);
    assert_eq!(drom.current(), &history_hex);
    assert_eq!(history_hex, attach(&drom.hexagons()[0], Edge::BottomRight));
}

#[test]
fn remove_other_keeps_tracking_current() {
    let mut drom = drom_with_three();
    drom.switch_current(2).unwrap();
    let current = drom.current().clone();

    drom.remove_at(0).unwrap();
    assert_eq!(drom.current_index(), 1);
    assert_eq!(drom.current(), &current);
}

#[test]
fn remove_current_without_history_picks_predecessor() {
    let mut drom = drom_with_three();
    drom.remove_at(0).unwrap();
    // history cleared, current is hexagon index 1 now
    let predecessor = drom.hexagons()[0].clone();
    drom.remove_at(1).unwrap();
    assert_eq!(drom.current_index(), 0);
    assert_eq!(drom.current(), &predecessor);
}

#[test]
fn remove_rejects_out_of_range_and_last() {
    let mut drom = DromState::default();
    assert_eq!(
        drom.remove_at(1),
        Err(DromError::OutOfRange { index: 1, len: 1 })
    );
    assert_eq!(drom.remove_at(0), Err(DromError::LastHexagon));
    assert_eq!(drom.len(), 1);
}

#[test]
fn removal_clears_undo() {
    let mut drom = drom_with_three();
    drom.remove_at(0).unwrap();
    assert_eq!(drom.remove_last(), Err(DromError::NoHistory));
}

#[test]
fn from_hexagons_requires_content() {
    assert_eq!(
        DromState::from_hexagons(Vec::new()).unwrap_err(),
        DromError::EmptyArrangement
    );
    let drom = DromState::from_hexagons(vec![Hexagon::default(), Hexagon::default()]).unwrap();
    assert_eq!(drom.current_index(), 1);
    assert!(drom.history().is_none());
}

#[test]
fn edge_flags_mark_shared_edges() {
    let mut drom = DromState::default();
    drom.add_adjacent(0).unwrap();
    let flags = drom.edge_flags();
    assert_eq!(flags[0], [false, true, true, true, true, true]);
    assert_eq!(flags[1], [true, true, true, false, true, true]);
}
