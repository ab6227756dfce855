//! Move commands and the move applier.
//!
//! A drag-and-drop gesture resolves to "move player X from group L1 at
//! index i to group L2 at index j". Applying it is remove-then-insert on a
//! copy of the snapshot, so the player is never in two groups or in none.
//!
//! ```text
//!   pool:  [P1 P2 P3]          pool:  [P1 P3]
//!   teamA: [P4]        ──▶     teamA: [P2 P4]
//!   move P2 pool[1] → teamA[0]
//! ```

use thiserror::Error;

use super::player::PlayerId;
use super::roster::{Group, RosterSnapshot};

/// Request to relocate one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub player_id: PlayerId,
    pub source_group: Group,
    pub source_index: usize,
    pub dest_group: Group,
    pub dest_index: usize,
}

impl MoveCommand {
    pub fn new(
        player_id: PlayerId,
        source_group: Group,
        source_index: usize,
        dest_group: Group,
        dest_index: usize,
    ) -> Self {
        Self {
            player_id,
            source_group,
            source_index,
            dest_group,
            dest_index,
        }
    }

    /// Build a command from the player's current position in `snapshot`.
    ///
    /// Used to re-resolve a move after a [`StaleMoveError`]. Returns `None`
    /// if the player is not in any group.
    pub fn resolve(
        snapshot: &RosterSnapshot,
        player_id: PlayerId,
        dest_group: Group,
        dest_index: usize,
    ) -> Option<Self> {
        let (source_group, source_index) = snapshot.locate(player_id)?;
        Some(Self::new(
            player_id,
            source_group,
            source_index,
            dest_group,
            dest_index,
        ))
    }

    /// Whether source and destination are the same group.
    pub fn is_reorder(&self) -> bool {
        self.source_group == self.dest_group
    }
}

/// The command's source position no longer holds the named player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "stale move: expected player {player_id} at {group}[{index}], found {}",
    describe_found(.found)
)]
pub struct StaleMoveError {
    pub player_id: PlayerId,
    pub group: Group,
    pub index: usize,
    /// Player actually at that index, if any
    pub found: Option<PlayerId>,
}

fn describe_found(found: &Option<PlayerId>) -> String {
    match found {
        Some(id) => format!("player {}", id),
        None => "nothing".to_string(),
    }
}

/// Apply `command` to `snapshot`, returning the next snapshot.
///
/// The destination index is clamped to the valid insert range of the
/// destination group after the player has been removed, so dropping past
/// the end of a list appends.
pub fn apply_move(
    snapshot: &RosterSnapshot,
    command: &MoveCommand,
) -> Result<RosterSnapshot, StaleMoveError> {
    let found = snapshot
        .group(command.source_group)
        .get(command.source_index)
        .map(|p| p.id);

    if found != Some(command.player_id) {
        return Err(StaleMoveError {
            player_id: command.player_id,
            group: command.source_group,
            index: command.source_index,
            found,
        });
    }

    let mut next = snapshot.clone();
    let player = next
        .group_mut(command.source_group)
        .remove(command.source_index);

    let dest = next.group_mut(command.dest_group);
    let index = command.dest_index.min(dest.len());
    dest.insert(index, player);

    Ok(next)
}
