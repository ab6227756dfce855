//! Roster composition state.
//!
//! - `player` - Player and team records from the league API
//! - `roster` - The store holding the pool and both team rosters
//! - `moves` - Move commands and the pure move applier
//! - `submission` - Minimum-size gate and match draft mapping
//! - `workflow` - Session lifecycle around the pieces above
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          RosterWorkflow                              │
//! │                                                                      │
//! │  players, teams ──▶ ┌──────────────────────────┐                     │
//! │                     │       RosterStore        │                     │
//! │                     │                          │                     │
//! │  MoveCommand ──────▶│  RosterSnapshot          │── apply_move ──┐    │
//! │                     │    pool  teamA  teamB    │◀───────────────┘    │
//! │                     │  MatchMetadata           │                     │
//! │                     │  TeamSelection           │                     │
//! │                     └────────────┬─────────────┘                     │
//! │                                  │                                   │
//! │                                  ▼                                   │
//! │                     can_submit / build_draft ──▶ MatchDraft ──▶ MatchCreator
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use matchday_roster::state::{Group, MoveCommand, RosterStore, can_submit};
//!
//! let mut store = RosterStore::with_players(players);
//! store.apply(&MoveCommand::new(7, Group::Pool, 0, Group::TeamA, 0))?;
//! assert!(!can_submit(store.snapshot()));
//! ```

pub mod moves;
pub mod player;
pub mod roster;
pub mod submission;
pub mod workflow;

// Re-export commonly used types
pub use moves::{apply_move, MoveCommand, StaleMoveError};
pub use player::{Player, PlayerId, Team, TeamId};
pub use roster::{
    Group, MatchMetadata, MetadataUpdate, RosterSnapshot, RosterState, RosterStore, TeamSelection,
    TeamSlot, UnknownGroup,
};
pub use submission::{
    build_draft, build_draft_with, can_submit, can_submit_with, shortfall, IncompleteRosterError,
    MatchDraft, RosterShortfall, MIN_ROSTER_SIZE,
};
pub use workflow::{MatchCreator, RosterWorkflow, WorkflowError, WorkflowStatus};
