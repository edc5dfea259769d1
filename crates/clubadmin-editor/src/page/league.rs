//! League edit page.
//!
//! Loads the league and the candidate teams side by side. Each load owns its
//! own signals, so a failed team list leaves the league fields editable and
//! the other way round.

use clubadmin_core::{
    CancelToken, EntityGateway, EntityId, League, LeagueDraft, PageRequest, Signal, Team,
    build_relation_payload, resolve_relation_id,
};
use std::sync::Arc;

use crate::error::{EditorError, Result};
use crate::messages;
use crate::navigation::Navigator;
use crate::notify::Notifier;
use crate::page::state::PageState;
use crate::page::{resolve_route_id, unless_cancelled};

/// Page for renaming a league and linking it to a team.
pub struct LeagueEditPage {
    leagues: Arc<dyn EntityGateway<League>>,
    teams_gateway: Arc<dyn EntityGateway<Team>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    cancel: CancelToken,
    id: Signal<EntityId>,
    league_loading: Signal<bool>,
    teams_loading: Signal<bool>,
    saving: Signal<bool>,
    error: Signal<Option<String>>,
    teams_error: Signal<Option<String>>,
    name: Signal<String>,
    team_id: Signal<Option<EntityId>>,
    teams: Signal<Vec<Team>>,
    state: Signal<PageState>,
}

impl LeagueEditPage {
    /// Creates an inactive page.
    pub fn new(
        leagues: Arc<dyn EntityGateway<League>>,
        teams: Arc<dyn EntityGateway<Team>>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            leagues,
            teams_gateway: teams,
            notifier,
            navigator,
            cancel: CancelToken::new(),
            id: Signal::default(),
            league_loading: Signal::new(true),
            teams_loading: Signal::new(true),
            saving: Signal::new(false),
            error: Signal::new(None),
            teams_error: Signal::new(None),
            name: Signal::default(),
            team_id: Signal::new(None),
            teams: Signal::default(),
            state: Signal::default(),
        }
    }

    /// Resolves `route_id`, then loads the league and the teams concurrently.
    ///
    /// The result reflects the league load; a team list failure only shows
    /// up in [`teams_error`](Self::teams_error).
    pub async fn activate(&self, route_id: Option<&str>) -> Result<()> {
        self.state.set(PageState::ResolvingId);
        let id = match resolve_route_id(route_id, messages::ID_INVALID, messages::ID_INVALID) {
            Ok(id) => id,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                self.league_loading.set(false);
                self.teams_loading.set(false);
                self.state.set(PageState::InvalidId);
                return Err(e);
            }
        };

        self.id.set(id);
        self.state.set(PageState::Loading);

        let (league, _teams) = tokio::join!(self.load_league(id), self.load_teams());
        if self.cancel.is_cancelled() {
            return Err(EditorError::Cancelled);
        }

        self.state.set(if league.is_ok() {
            PageState::Loaded
        } else {
            PageState::LoadError
        });
        league
    }

    async fn load_league(&self, id: EntityId) -> Result<()> {
        let Some(result) = unless_cancelled(&self.cancel, self.leagues.get(id)).await else {
            tracing::debug!(league_id = %id, "League load dropped after deactivation");
            return Err(EditorError::Cancelled);
        };

        match result {
            Ok(league) => {
                let team_id = resolve_relation_id(league.team.as_ref());
                tracing::debug!(league_id = %id, team_id = ?team_id, "League loaded");
                self.name.set(league.name.unwrap_or_default());
                self.team_id.set(team_id);
                self.league_loading.set(false);
                Ok(())
            }
            Err(e) => {
                tracing::error!(league_id = %id, error = %e, "Failed to load league");
                self.error.set(Some(messages::LEAGUE_LOAD_FAILED.to_string()));
                self.notifier.notify(messages::LEAGUE_LOAD_FAILED);
                self.league_loading.set(false);
                Err(EditorError::load(messages::LEAGUE_LOAD_FAILED, e))
            }
        }
    }

    async fn load_teams(&self) -> Result<()> {
        let request = PageRequest::candidates();
        let load = self.teams_gateway.get_page(&request);
        let Some(result) = unless_cancelled(&self.cancel, load).await else {
            tracing::debug!("Team list load dropped after deactivation");
            return Err(EditorError::Cancelled);
        };

        match result {
            Ok(page) => {
                tracing::debug!(count = page.content.len(), "Teams loaded");
                self.teams.set(page.content);
                self.teams_loading.set(false);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load teams");
                self.teams_error.set(Some(messages::TEAMS_LOAD_FAILED.to_string()));
                self.notifier.notify(messages::TEAMS_LOAD_FAILED);
                self.teams_loading.set(false);
                Err(EditorError::load(messages::TEAMS_LOAD_FAILED, e))
            }
        }
    }

    /// Sets the league name as typed.
    pub fn set_name(&self, name: impl Into<String>) {
        self.name.set(name.into());
    }

    /// Selects the related team.
    pub fn select_team(&self, team: Option<EntityId>) {
        self.team_id.set(team);
    }

    /// Validates and stores the name and team link, then goes back.
    ///
    /// Does nothing but return [`EditorError::Busy`] while a save is running,
    /// and [`EditorError::NotReady`] unless the league loaded. On failure the
    /// page stays editable.
    pub async fn do_save(&self) -> Result<()> {
        if self.saving.get() {
            return Err(EditorError::Busy);
        }

        let state = self.state.get();
        if !state.is_editable() {
            tracing::debug!(%state, "League save ignored before load");
            return Err(EditorError::NotReady);
        }
        let id = self.id.get();

        let name = self.name.get();
        if name.trim().is_empty() {
            return Err(self.reject(messages::NAME_REQUIRED));
        }

        let Some(team) = self.team_id.get().filter(|team| team.is_persisted()) else {
            return Err(self.reject(messages::TEAM_REQUIRED));
        };

        if !self.saving.update_if(|s| !std::mem::replace(s, true)) {
            return Err(EditorError::Busy);
        }
        self.error.set(None);
        self.state.set(PageState::Saving);

        let draft = LeagueDraft {
            id,
            name: name.trim().to_string(),
            team: build_relation_payload(team),
        };

        match self.leagues.update(&draft).await {
            Ok(_) => {
                tracing::info!(league_id = %id, team_id = %team, "League updated");
                self.saving.set(false);
                self.state.set(PageState::Saved);
                self.navigator.back();
                Ok(())
            }
            Err(e) => {
                tracing::error!(league_id = %id, error = %e, "Failed to update league");
                self.error.set(Some(messages::LEAGUE_UPDATE_FAILED.to_string()));
                self.notifier.notify(messages::LEAGUE_UPDATE_FAILED);
                self.saving.set(false);
                self.state.set(PageState::Loaded);
                Err(EditorError::save(messages::LEAGUE_UPDATE_FAILED, e))
            }
        }
    }

    fn reject(&self, message: &'static str) -> EditorError {
        self.error.set(Some(message.to_string()));
        self.notifier.notify(message);
        EditorError::validation(message)
    }

    /// Leaves without saving.
    pub fn do_cancel(&self) {
        self.state.set(PageState::Cancelled);
        self.navigator.back();
    }

    /// Cancels loads still in flight.
    pub fn deactivate(&self) {
        self.cancel.cancel();
    }

    /// Resolved league id, `0` until resolved.
    pub fn id(&self) -> &Signal<EntityId> {
        &self.id
    }

    /// `true` until the league load settles.
    pub fn league_loading(&self) -> &Signal<bool> {
        &self.league_loading
    }

    /// `true` until the team list load settles.
    pub fn teams_loading(&self) -> &Signal<bool> {
        &self.teams_loading
    }

    /// `true` while a save is in flight.
    pub fn saving(&self) -> &Signal<bool> {
        &self.saving
    }

    /// League load, validation and save errors.
    pub fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }

    /// Team list load error.
    pub fn teams_error(&self) -> &Signal<Option<String>> {
        &self.teams_error
    }

    /// Editable league name.
    pub fn name(&self) -> &Signal<String> {
        &self.name
    }

    /// Selected team.
    pub fn team_id(&self) -> &Signal<Option<EntityId>> {
        &self.team_id
    }

    /// Candidate teams.
    pub fn teams(&self) -> &Signal<Vec<Team>> {
        &self.teams
    }

    /// Lifecycle state.
    pub fn state(&self) -> &Signal<PageState> {
        &self.state
    }
}
