//! Roster state store.
//!
//! Holds the available-player pool and the two team rosters as one
//! snapshot value, along with the match metadata and team selection
//! being composed alongside them.
//!
//! Every player in the universe lives in exactly one group. The store
//! never edits the groups directly; moves go through
//! [`apply_move`](super::moves::apply_move), which returns a whole new
//! snapshot that is installed in a single assignment.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use super::moves::{apply_move, MoveCommand, StaleMoveError};
use super::player::{Player, PlayerId, Team};

/// Date format used by the match form's date input.
pub const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// One of the three ordered collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Players not yet assigned to either team
    Pool,
    TeamA,
    TeamB,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Pool, Group::TeamA, Group::TeamB];

    /// Droppable ID used by the drag-and-drop surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pool => "players",
            Self::TeamA => "teamA",
            Self::TeamB => "teamB",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A droppable ID that does not name any group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown roster group: {0:?}")]
pub struct UnknownGroup(pub String);

impl FromStr for Group {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "players" => Ok(Self::Pool),
            "teamA" => Ok(Self::TeamA),
            "teamB" => Ok(Self::TeamB),
            other => Err(UnknownGroup(other.to_string())),
        }
    }
}

/// Which side of the match a team selection applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSlot {
    A,
    B,
}

impl TeamSlot {
    /// The roster group this slot's players are dragged into.
    pub fn group(&self) -> Group {
        match self {
            Self::A => Group::TeamA,
            Self::B => Group::TeamB,
        }
    }
}

/// The three groups at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSnapshot {
    pool: Vec<Player>,
    team_a: Vec<Player>,
    team_b: Vec<Player>,
}

impl RosterSnapshot {
    /// Full pool, empty rosters.
    pub fn new(pool: Vec<Player>) -> Self {
        Self {
            pool,
            team_a: Vec::new(),
            team_b: Vec::new(),
        }
    }

    pub fn group(&self, group: Group) -> &[Player] {
        match group {
            Group::Pool => &self.pool,
            Group::TeamA => &self.team_a,
            Group::TeamB => &self.team_b,
        }
    }

    pub(crate) fn group_mut(&mut self, group: Group) -> &mut Vec<Player> {
        match group {
            Group::Pool => &mut self.pool,
            Group::TeamA => &mut self.team_a,
            Group::TeamB => &mut self.team_b,
        }
    }

    pub fn len(&self, group: Group) -> usize {
        self.group(group).len()
    }

    /// Total players across all three groups.
    pub fn total(&self) -> usize {
        self.pool.len() + self.team_a.len() + self.team_b.len()
    }

    /// Find which group holds a player and at what index.
    pub fn locate(&self, player_id: PlayerId) -> Option<(Group, usize)> {
        Group::ALL.into_iter().find_map(|group| {
            self.group(group)
                .iter()
                .position(|p| p.id == player_id)
                .map(|index| (group, index))
        })
    }

    /// Ordered player IDs of one group.
    pub fn ids(&self, group: Group) -> Vec<PlayerId> {
        self.group(group).iter().map(|p| p.id).collect()
    }

    /// Convert to JSON for rendering the three columns.
    pub fn to_json(&self) -> serde_json::Value {
        let column = |group: Group| -> Vec<serde_json::Value> {
            self.group(group).iter().map(Player::to_json).collect()
        };

        serde_json::json!({
            "players": column(Group::Pool),
            "teamA": column(Group::TeamA),
            "teamB": column(Group::TeamB),
        })
    }
}

/// Descriptive match fields entered next to the rosters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchMetadata {
    pub title: String,
    pub match_date: Option<NaiveDate>,
    pub venue: String,
}

/// A single metadata field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataUpdate {
    Title(String),
    MatchDate(NaiveDate),
    Venue(String),
}

impl MetadataUpdate {
    /// Build a date update from the form's `YYYY-MM-DD` input.
    pub fn match_date_from_input(input: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(input.trim(), MATCH_DATE_FORMAT).map(Self::MatchDate)
    }
}

/// Which backend team each roster maps to.
///
/// Not checked against roster membership, and both slots may name the
/// same team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSelection {
    pub team_a: Option<Team>,
    pub team_b: Option<Team>,
}

impl TeamSelection {
    pub fn get(&self, slot: TeamSlot) -> Option<&Team> {
        match slot {
            TeamSlot::A => self.team_a.as_ref(),
            TeamSlot::B => self.team_b.as_ref(),
        }
    }

    /// Label shown in the team picker, if a team is selected.
    pub fn label(&self, slot: TeamSlot) -> Option<&str> {
        self.get(slot).map(|t| t.name.as_str())
    }
}

/// Immutable copy of everything the store holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    pub rosters: RosterSnapshot,
    pub metadata: MatchMetadata,
    pub teams: TeamSelection,
}

/// Single source of truth for a roster composition in progress.
#[derive(Debug, Default)]
pub struct RosterStore {
    /// Players known at initialization, in provider order
    universe: Vec<Player>,

    snapshot: RosterSnapshot,

    metadata: MatchMetadata,

    teams: TeamSelection,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already initialized with `players`.
    pub fn with_players(players: Vec<Player>) -> Self {
        let mut store = Self::new();
        store.initialize(players);
        store
    }

    /// Put every player in the pool and clear rosters, metadata and
    /// team selection. Replaces any previous state.
    ///
    /// Repeated IDs keep their first occurrence.
    pub fn initialize(&mut self, players: Vec<Player>) {
        let mut seen = HashSet::with_capacity(players.len());
        let mut universe = Vec::with_capacity(players.len());

        for player in players {
            if seen.insert(player.id) {
                universe.push(player);
            } else {
                warn!(player_id = player.id, "dropping duplicate player from roster pool");
            }
        }

        debug!(players = universe.len(), "initialized roster pool");

        self.snapshot = RosterSnapshot::new(universe.clone());
        self.universe = universe;
        self.metadata = MatchMetadata::default();
        self.teams = TeamSelection::default();
    }

    /// Re-initialize from the universe captured by the last
    /// [`initialize`](Self::initialize).
    pub fn reset(&mut self) {
        let universe = std::mem::take(&mut self.universe);
        self.initialize(universe);
    }

    pub fn set_metadata(&mut self, update: MetadataUpdate) {
        match update {
            MetadataUpdate::Title(title) => self.metadata.title = title,
            MetadataUpdate::MatchDate(date) => self.metadata.match_date = Some(date),
            MetadataUpdate::Venue(venue) => self.metadata.venue = venue,
        }
    }

    /// Record which backend team a roster maps to. `None` clears the slot.
    pub fn set_team_selection(&mut self, slot: TeamSlot, team: Option<Team>) {
        match slot {
            TeamSlot::A => self.teams.team_a = team,
            TeamSlot::B => self.teams.team_b = team,
        }
    }

    /// Apply a move and install the resulting snapshot.
    ///
    /// On error the current snapshot is left as it was.
    pub fn apply(&mut self, command: &MoveCommand) -> Result<(), StaleMoveError> {
        let next = apply_move(&self.snapshot, command)?;
        debug!(
            player_id = command.player_id,
            from = %command.source_group,
            to = %command.dest_group,
            reorder = command.is_reorder(),
            "applied roster move"
        );
        self.snapshot = next;
        Ok(())
    }

    pub fn current_state(&self) -> RosterState {
        RosterState {
            rosters: self.snapshot.clone(),
            metadata: self.metadata.clone(),
            teams: self.teams.clone(),
        }
    }

    pub fn snapshot(&self) -> &RosterSnapshot {
        &self.snapshot
    }

    pub fn metadata(&self) -> &MatchMetadata {
        &self.metadata
    }

    pub fn team_selection(&self) -> &TeamSelection {
        &self.teams
    }

    pub fn universe(&self) -> &[Player] {
        &self.universe
    }

    pub fn locate(&self, player_id: PlayerId) -> Option<(Group, usize)> {
        self.snapshot.locate(player_id)
    }

    pub fn len(&self, group: Group) -> usize {
        self.snapshot.len(group)
    }
}
