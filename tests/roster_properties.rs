//! Property tests for roster moves and submission gating.

use matchday_roster::state::{
    apply_move, can_submit, Group, MoveCommand, Player, PlayerId, RosterSnapshot, RosterStore,
    MIN_ROSTER_SIZE,
};
use proptest::prelude::*;

fn pool(n: usize) -> RosterSnapshot {
    RosterSnapshot::new(
        (1..=n as i64)
            .map(|i| Player::new(i, format!("P{}", i)))
            .collect(),
    )
}

fn group(index: u8) -> Group {
    Group::ALL[index as usize % 3]
}

/// A raw gesture: which groups, and seeds that are reduced to valid
/// source indices against the live snapshot.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    source: u8,
    source_seed: usize,
    dest: u8,
    dest_index: usize,
}

fn gesture() -> impl Strategy<Value = Gesture> {
    (0u8..3, any::<usize>(), 0u8..3, 0usize..40).prop_map(
        |(source, source_seed, dest, dest_index)| Gesture {
            source,
            source_seed,
            dest,
            dest_index,
        },
    )
}

/// Turn a gesture into a command valid for `snapshot`, if the source
/// group has anyone in it.
fn resolve(snapshot: &RosterSnapshot, gesture: Gesture) -> Option<MoveCommand> {
    let source_group = group(gesture.source);
    let source = snapshot.group(source_group);
    if source.is_empty() {
        return None;
    }
    let source_index = gesture.source_seed % source.len();
    Some(MoveCommand::new(
        source[source_index].id,
        source_group,
        source_index,
        group(gesture.dest),
        gesture.dest_index,
    ))
}

fn all_ids(snapshot: &RosterSnapshot) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = Group::ALL
        .into_iter()
        .flat_map(|g| snapshot.ids(g))
        .collect();
    ids.sort_unstable();
    ids
}

proptest! {
    /// Every player stays in exactly one group after every move.
    #[test]
    fn prop_partition_holds(
        n in 0usize..30,
        gestures in prop::collection::vec(gesture(), 0..60),
    ) {
        let expected: Vec<PlayerId> = (1..=n as i64).collect();
        let mut snapshot = pool(n);

        for g in gestures {
            if let Some(command) = resolve(&snapshot, g) {
                snapshot = apply_move(&snapshot, &command).unwrap();
            }
            prop_assert_eq!(all_ids(&snapshot), expected.clone());
        }
    }

    /// Reordering within a group only shifts the elements between the old
    /// and new positions.
    #[test]
    fn prop_reorder_shifts_only_range(
        n in 1usize..25,
        from_seed in any::<usize>(),
        to_seed in any::<usize>(),
    ) {
        let snapshot = pool(n);
        let from = from_seed % n;
        let to = to_seed % n;
        let id = snapshot.group(Group::Pool)[from].id;

        let command = MoveCommand::new(id, Group::Pool, from, Group::Pool, to);
        let next = apply_move(&snapshot, &command).unwrap();
        let before = snapshot.ids(Group::Pool);
        let after = next.ids(Group::Pool);

        prop_assert_eq!(after[to], id);
        let (lo, hi) = (from.min(to), from.max(to));
        for k in 0..n {
            if k < lo || k > hi {
                prop_assert_eq!(after[k], before[k]);
            } else if from < to && k < to {
                prop_assert_eq!(after[k], before[k + 1]);
            } else if from > to && k > to {
                prop_assert_eq!(after[k], before[k - 1]);
            }
        }
    }

    /// Moving a player and then moving it back restores the snapshot.
    #[test]
    fn prop_transfer_round_trip(
        n in 1usize..30,
        setup in prop::collection::vec(gesture(), 0..40),
        g in gesture(),
    ) {
        let mut snapshot = pool(n);
        for s in setup {
            if let Some(command) = resolve(&snapshot, s) {
                snapshot = apply_move(&snapshot, &command).unwrap();
            }
        }

        if let Some(command) = resolve(&snapshot, g) {
            let there = apply_move(&snapshot, &command).unwrap();
            let (landed_group, landed_index) = there.locate(command.player_id).unwrap();
            prop_assert_eq!(landed_group, command.dest_group);

            let back = MoveCommand::new(
                command.player_id,
                landed_group,
                landed_index,
                command.source_group,
                command.source_index,
            );
            prop_assert_eq!(apply_move(&there, &back).unwrap(), snapshot);
        }
    }

    /// Submission is allowed exactly when both rosters reach the minimum.
    #[test]
    fn prop_gate_matches_roster_sizes(
        n in 0usize..40,
        gestures in prop::collection::vec(gesture(), 0..120),
    ) {
        let mut snapshot = pool(n);
        for g in gestures {
            if let Some(command) = resolve(&snapshot, g) {
                snapshot = apply_move(&snapshot, &command).unwrap();
            }
            let expected = snapshot.len(Group::TeamA) >= MIN_ROSTER_SIZE
                && snapshot.len(Group::TeamB) >= MIN_ROSTER_SIZE;
            prop_assert_eq!(can_submit(&snapshot), expected);
        }
    }

    /// A command naming the wrong player is rejected and changes nothing.
    #[test]
    fn prop_stale_move_rejected(
        n in 2usize..25,
        index_seed in any::<usize>(),
        offset in 0usize..25,
    ) {
        let mut store = RosterStore::with_players(pool(n).group(Group::Pool).to_vec());
        let index = index_seed % n;
        let actual = store.snapshot().group(Group::Pool)[index].id;
        let wrong = store.snapshot().group(Group::Pool)[(index + offset % (n - 1) + 1) % n].id;
        prop_assume!(wrong != actual);
        let before = store.current_state();

        let result = store.apply(&MoveCommand::new(wrong, Group::Pool, index, Group::TeamA, 0));

        prop_assert!(result.is_err());
        prop_assert_eq!(store.current_state(), before);
    }
}

#[test]
fn scenario_fill_both_teams() {
    let mut store = RosterStore::with_players(pool(22).group(Group::Pool).to_vec());

    for i in 0..22 {
        let dest = if i < 11 { Group::TeamA } else { Group::TeamB };
        let id = store.snapshot().group(Group::Pool)[0].id;
        let end = store.len(dest);
        store
            .apply(&MoveCommand::new(id, Group::Pool, 0, dest, end))
            .unwrap();

        // Only the eleventh move into team B opens the gate
        assert_eq!(can_submit(store.snapshot()), i == 21);
    }

    let draft = matchday_roster::build_draft(
        store.snapshot(),
        store.metadata(),
        store.team_selection(),
    )
    .unwrap();
    assert_eq!(draft.team_a_players, (1..=11).collect::<Vec<_>>());
    assert_eq!(draft.team_b_players, (12..=22).collect::<Vec<_>>());
}

#[test]
fn scenario_insertion_order_not_pool_order() {
    let mut store = RosterStore::with_players(pool(22).group(Group::Pool).to_vec());

    // Take players from the back of the pool, always inserting at the top
    for _ in 0..11 {
        let last = store.len(Group::Pool) - 1;
        let id = store.snapshot().group(Group::Pool)[last].id;
        store
            .apply(&MoveCommand::new(id, Group::Pool, last, Group::TeamA, 0))
            .unwrap();
    }

    assert_eq!(
        store.snapshot().ids(Group::TeamA),
        (12..=22).collect::<Vec<_>>()
    );
}
