//! Match roster composition workflow.
//!
//! Ties the store, the move applier and the submission gate to the
//! outside world: players and teams fetched on entry, and a
//! [`MatchCreator`] that receives the finished draft.
//!
//! # Lifecycle
//!
//! ```text
//!            move_player
//!            ┌────────┐
//!            ▼        │
//! new ──▶ Composing ◀─┴─▶ Submittable ──submit──▶ (reset to full pool)
//!            │                 │
//!            └──── abandon ────┴──▶ discarded
//! ```
//!
//! Composing and Submittable are derived from the current snapshot on
//! every call to [`RosterWorkflow::status`]; nothing stores the mode.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RosterConfig;

use super::moves::{MoveCommand, StaleMoveError};
use super::player::{Player, Team};
use super::roster::{Group, MetadataUpdate, RosterState, RosterStore, TeamSlot};
use super::submission::{self, IncompleteRosterError, MatchDraft, RosterShortfall};

/// Receives a completed draft and creates the match in the backend.
pub trait MatchCreator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_match(&mut self, draft: &MatchDraft) -> Result<(), Self::Error>;
}

/// Errors surfaced by the workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The move referred to an outdated index; re-resolve and retry.
    #[error(transparent)]
    StaleMove(#[from] StaleMoveError),
    #[error(transparent)]
    Incomplete(#[from] IncompleteRosterError),
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    /// The backend rejected the match. Rosters are kept for a retry.
    #[error("match creation failed")]
    CreateFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Whether the rosters currently satisfy the submission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Composing,
    Submittable,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Composing => "composing",
            Self::Submittable => "submittable",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user's roster composition session.
#[derive(Debug)]
pub struct RosterWorkflow {
    config: RosterConfig,

    store: RosterStore,

    /// Teams offered in the team pickers
    teams: Vec<Team>,

    /// When the current player universe was loaded
    started_at: chrono::DateTime<chrono::Utc>,
}

impl RosterWorkflow {
    /// Enter the workflow with freshly fetched players and teams.
    pub fn new(config: RosterConfig, players: Vec<Player>, teams: Vec<Team>) -> Self {
        let store = RosterStore::with_players(players);
        debug!(
            players = store.universe().len(),
            teams = teams.len(),
            min_roster_size = config.min_roster_size,
            "entered roster workflow"
        );
        Self {
            config,
            store,
            teams,
            started_at: chrono::Utc::now(),
        }
    }

    /// Replace players and teams with a new fetch. Discards the current
    /// composition.
    pub fn refresh(&mut self, players: Vec<Player>, teams: Vec<Team>) {
        self.store.initialize(players);
        self.teams = teams;
        self.started_at = chrono::Utc::now();
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn started_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.started_at
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn state(&self) -> RosterState {
        self.store.current_state()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Select a team for a slot by its label.
    pub fn select_team(&mut self, slot: TeamSlot, name: &str) -> Result<(), WorkflowError> {
        let team = self
            .teams
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| WorkflowError::UnknownTeam(name.to_string()))?;
        self.store.set_team_selection(slot, Some(team));
        Ok(())
    }

    pub fn clear_team(&mut self, slot: TeamSlot) {
        self.store.set_team_selection(slot, None);
    }

    pub fn set_metadata(&mut self, update: MetadataUpdate) {
        self.store.set_metadata(update);
    }

    /// Apply one drag-and-drop move.
    pub fn move_player(&mut self, command: MoveCommand) -> Result<(), WorkflowError> {
        self.store.apply(&command).map_err(|err| {
            warn!(error = %err, "rejected stale roster move");
            WorkflowError::from(err)
        })
    }

    pub fn can_submit(&self) -> bool {
        submission::can_submit_with(self.store.snapshot(), self.config.min_roster_size)
    }

    pub fn shortfall(&self) -> RosterShortfall {
        submission::shortfall(self.store.snapshot(), self.config.min_roster_size)
    }

    pub fn status(&self) -> WorkflowStatus {
        if self.can_submit() {
            WorkflowStatus::Submittable
        } else {
            WorkflowStatus::Composing
        }
    }

    /// Build the draft for the current state without submitting it.
    pub fn draft(&self) -> Result<MatchDraft, IncompleteRosterError> {
        submission::build_draft_with(
            self.store.snapshot(),
            self.store.metadata(),
            self.store.team_selection(),
            self.config.min_roster_size,
        )
    }

    /// Hand the draft to `creator`.
    ///
    /// On success the workflow resets to a full pool and the submitted
    /// draft is returned. On any error the rosters are left untouched.
    pub fn submit<C: MatchCreator>(
        &mut self,
        creator: &mut C,
    ) -> Result<MatchDraft, WorkflowError> {
        let draft = self.draft()?;

        if let Err(err) = creator.create_match(&draft) {
            warn!(error = %err, title = %draft.title, "match creation failed; rosters kept");
            return Err(WorkflowError::CreateFailed(Box::new(err)));
        }

        info!(
            title = %draft.title,
            team_a = draft.team_a_players.len(),
            team_b = draft.team_b_players.len(),
            "match submitted"
        );
        self.store.reset();
        Ok(draft)
    }

    /// Leave the workflow, discarding the composition.
    pub fn abandon(self) {
        debug!(
            assigned = self.store.snapshot().total() - self.store.len(Group::Pool),
            "abandoned roster workflow"
        );
    }
}
