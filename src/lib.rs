//! Matchday Roster Library
//!
//! Builds the two team rosters for a new match from a shared pool of
//! league players.
//!
//! # Overview
//!
//! - **Roster Store** - The available pool and both rosters held as one
//!   snapshot, plus match title, date, venue and team selection.
//!
//! - **Move Applier** - Relocates one player within or between groups.
//!   Stale indices are rejected; out-of-range targets are clamped.
//!
//! - **Submission Gate** - Each roster needs at least eleven players
//!   before a [`MatchDraft`](state::MatchDraft) can be built.
//!
//! - **Workflow** - Entry from fetched players and teams, submission to a
//!   match-creation backend, reset on success.
//!
//! Every player is in exactly one of pool, team A or team B at all times.
//! This crate does no networking or disk I/O outside of
//! [`RosterConfig::load`](config::RosterConfig::load).
//!
//! # Example
//!
//! ```rust
//! use matchday_roster::state::{Group, MoveCommand, Player, RosterStore, can_submit};
//!
//! let players = (1..=22).map(|i| Player::new(i, format!("Player {}", i))).collect();
//! let mut store = RosterStore::with_players(players);
//!
//! // Drag everyone in pool order: first eleven to team A, rest to team B
//! for i in 0..22 {
//!     let id = store.snapshot().group(Group::Pool)[0].id;
//!     let dest = if i < 11 { Group::TeamA } else { Group::TeamB };
//!     let end = store.len(dest);
//!     store.apply(&MoveCommand::new(id, Group::Pool, 0, dest, end)).unwrap();
//! }
//!
//! assert!(can_submit(store.snapshot()));
//! assert_eq!(store.snapshot().ids(Group::TeamB)[0], 12);
//! ```

pub mod config;
pub mod state;

// Re-export everything from state module at crate root
pub use config::{ConfigError, RosterConfig};
pub use state::*;
