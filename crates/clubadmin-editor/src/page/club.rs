//! Club edit and create pages.

use clubadmin_core::{CancelToken, Club, EntityGateway, EntityId, Signal};
use std::sync::Arc;

use crate::error::{EditorError, Result};
use crate::form::{ClubForm, FormExit, FormMode};
use crate::messages;
use crate::navigation::Navigator;
use crate::notify::Notifier;
use crate::page::state::PageState;
use crate::page::{resolve_route_id, unless_cancelled};
use crate::routes;

/// Page for editing an existing club, routed by id.
pub struct ClubEditPage {
    gateway: Arc<dyn EntityGateway<Club>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    cancel: CancelToken,
    id: Signal<EntityId>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    club: Signal<Option<Club>>,
    state: Signal<PageState>,
}

impl ClubEditPage {
    /// Creates an inactive page.
    pub fn new(
        gateway: Arc<dyn EntityGateway<Club>>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            navigator,
            cancel: CancelToken::new(),
            id: Signal::default(),
            loading: Signal::new(true),
            error: Signal::new(None),
            club: Signal::new(None),
            state: Signal::default(),
        }
    }

    /// Resolves `route_id` and loads the club.
    ///
    /// An id that is missing, `"0"` or not a positive number fails without
    /// contacting the backend.
    pub async fn activate(&self, route_id: Option<&str>) -> Result<()> {
        self.state.set(PageState::ResolvingId);
        let id = match resolve_route_id(route_id, messages::CLUB_ID_INVALID, messages::ID_INVALID)
        {
            Ok(id) => id,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                self.loading.set(false);
                self.state.set(PageState::InvalidId);
                return Err(e);
            }
        };

        self.id.set(id);
        self.state.set(PageState::Loading);

        let Some(result) = unless_cancelled(&self.cancel, self.gateway.get(id)).await else {
            tracing::debug!(club_id = %id, "Club load dropped after deactivation");
            return Err(EditorError::Cancelled);
        };

        match result {
            Ok(club) => {
                tracing::debug!(club_id = %id, "Club loaded");
                self.club.set(Some(club));
                self.loading.set(false);
                self.state.set(PageState::Loaded);
                Ok(())
            }
            Err(e) => {
                tracing::error!(club_id = %id, error = %e, "Failed to load club");
                self.error.set(Some(messages::CLUB_LOAD_FAILED.to_string()));
                self.notifier.notify(messages::CLUB_LOAD_FAILED);
                self.loading.set(false);
                self.state.set(PageState::LoadError);
                Err(EditorError::load(messages::CLUB_LOAD_FAILED, e))
            }
        }
    }

    /// Edit-mode form for the loaded club.
    pub fn form(&self) -> Result<ClubForm> {
        let club = self.club.get().ok_or(EditorError::NotReady)?;
        Ok(ClubForm::mount(
            self.gateway.clone(),
            self.notifier.clone(),
            Some(club),
            FormMode::Edit,
        ))
    }

    /// Resolved club id, `0` until resolved.
    pub fn id(&self) -> &Signal<EntityId> {
        &self.id
    }

    /// `true` until the load settles.
    pub fn loading(&self) -> &Signal<bool> {
        &self.loading
    }

    /// Inline error message.
    pub fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }

    /// Loaded club.
    pub fn club(&self) -> &Signal<Option<Club>> {
        &self.club
    }

    /// Lifecycle state.
    pub fn state(&self) -> &Signal<PageState> {
        &self.state
    }

    /// The form saved the club.
    pub fn on_form_success(&self) {
        leave_to_club_list(self.navigator.as_ref(), &self.state, PageState::Saved);
    }

    /// The form was abandoned.
    pub fn on_form_cancel(&self) {
        leave_to_club_list(self.navigator.as_ref(), &self.state, PageState::Cancelled);
    }

    /// Dispatches a form exit to the matching handler.
    pub fn handle_exit(&self, exit: FormExit) {
        match exit {
            FormExit::Saved { .. } => self.on_form_success(),
            FormExit::Cancelled => self.on_form_cancel(),
        }
    }

    /// Cancels a load still in flight.
    pub fn deactivate(&self) {
        self.cancel.cancel();
    }
}

/// Page for creating a club.
pub struct ClubNewPage {
    gateway: Arc<dyn EntityGateway<Club>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: Signal<PageState>,
}

impl ClubNewPage {
    /// Creates the page; there is nothing to load.
    pub fn new(
        gateway: Arc<dyn EntityGateway<Club>>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            navigator,
            state: Signal::new(PageState::Loaded),
        }
    }

    /// Create-mode form with default values.
    pub fn form(&self) -> ClubForm {
        ClubForm::mount(
            self.gateway.clone(),
            self.notifier.clone(),
            None,
            FormMode::Create,
        )
    }

    /// Lifecycle state.
    pub fn state(&self) -> &Signal<PageState> {
        &self.state
    }

    /// The form created the club.
    pub fn on_form_success(&self) {
        leave_to_club_list(self.navigator.as_ref(), &self.state, PageState::Saved);
    }

    /// The form was abandoned.
    pub fn on_form_cancel(&self) {
        leave_to_club_list(self.navigator.as_ref(), &self.state, PageState::Cancelled);
    }

    /// Dispatches a form exit to the matching handler.
    pub fn handle_exit(&self, exit: FormExit) {
        match exit {
            FormExit::Saved { .. } => self.on_form_success(),
            FormExit::Cancelled => self.on_form_cancel(),
        }
    }
}

fn leave_to_club_list(navigator: &dyn Navigator, state: &Signal<PageState>, end: PageState) {
    state.set(end);
    navigator.navigate(routes::CLUB_LIST);
}
