//! Club form controller.
//!
//! The form is composed by a page: it receives the club to edit (or none) and
//! the mode, and reports how it ended through [`FormExit`]. It never
//! navigates.
//!
//! ```text
//!  mount ──► Ready ──submit──► Submitting ──ok──► Exited
//!   │          ▲                   │
//!  load        └───── error ◄──────┘
//!   ▼
//! Loading
//! ```

use clubadmin_core::{
    Club, ClubDraft, DateValue, EntityGateway, EntityId, NewClubCollections, Signal,
    to_editable_date, to_storage_date_time,
};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{EditorError, Result};
use crate::form::validation::{Rule, Validation};
use crate::messages;
use crate::notify::Notifier;

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(255)];
const DATE_RULES: &[Rule] = &[Rule::Required];

/// Whether the form creates a new club or updates the supplied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit with `create`
    Create,
    /// Submit with `update`
    Edit,
}

/// How the form ended; the parent decides where to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormExit {
    /// Club stored under `id`
    Saved {
        /// Id returned by the backend
        id: EntityId,
    },
    /// User abandoned the form
    Cancelled,
}

/// Lifecycle phase, derived from the form's signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fetching the club
    Loading,
    /// Editable, no error shown
    Ready,
    /// Waiting for the backend
    Submitting,
    /// Editable, last attempt failed
    ReadyWithError,
    /// Saved; the parent takes over
    Exited,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormPhase::Loading => "loading",
            FormPhase::Ready => "ready",
            FormPhase::Submitting => "submitting",
            FormPhase::ReadyWithError => "ready-with-error",
            FormPhase::Exited => "exited",
        };
        f.write_str(name)
    }
}

/// Editable club field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClubField {
    /// `nombre`
    Name,
    /// `direccion`
    Address,
    /// `telefono`
    Phone,
    /// `fechaAlta`
    RegistrationDate,
    /// `imagen`
    Image,
}

impl ClubField {
    /// Every field, in display order.
    pub const ALL: [ClubField; 5] = [
        ClubField::Name,
        ClubField::Address,
        ClubField::Phone,
        ClubField::RegistrationDate,
        ClubField::Image,
    ];
}

/// Current values of the club form.
///
/// `registration_date` holds the editable `YYYY-MM-DD` form; it is widened
/// to a date-time only when submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubFields {
    /// Read-only id, `0` for a new club
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// Registration date, `YYYY-MM-DD`
    pub registration_date: String,
    /// Image reference
    pub image: Option<String>,
}

impl ClubFields {
    /// Defaults for a new club: registered today.
    pub fn blank() -> Self {
        Self {
            id: EntityId::NEW,
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            registration_date: to_editable_date(DateValue::Empty),
            image: None,
        }
    }

    /// Values patched in from a fetched club.
    pub fn from_club(club: &Club) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            address: club.address.clone().unwrap_or_default(),
            phone: club.phone.clone().unwrap_or_default(),
            registration_date: to_editable_date(club.registration_date.as_deref()),
            image: club.image.clone().filter(|image| !image.is_empty()),
        }
    }

    /// Checks the values against the form rules.
    pub fn validate(&self) -> Validation<ClubField> {
        let mut validation = Validation::new();
        validation
            .check(ClubField::Name, &self.name, NAME_RULES)
            .check(ClubField::RegistrationDate, &self.registration_date, DATE_RULES);
        validation
    }

    /// Builds the submission payload.
    ///
    /// `id` is only sent in edit mode; creates carry empty owned collections
    /// instead.
    pub fn to_draft(&self, mode: FormMode, id: Option<EntityId>) -> ClubDraft {
        let (id, collections) = match mode {
            FormMode::Edit => (id, None),
            FormMode::Create => (None, Some(NewClubCollections::default())),
        };
        ClubDraft {
            id,
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            registration_date: to_storage_date_time(&self.registration_date),
            image: self.image.clone().filter(|image| !image.is_empty()),
            collections,
        }
    }
}

impl Default for ClubFields {
    fn default() -> Self {
        Self::blank()
    }
}

/// Form controller for creating or editing one club.
pub struct ClubForm {
    gateway: Arc<dyn EntityGateway<Club>>,
    notifier: Arc<dyn Notifier>,
    mode: FormMode,
    club: Signal<Option<Club>>,
    fields: Signal<ClubFields>,
    touched: Signal<BTreeSet<ClubField>>,
    loading: Signal<bool>,
    submitting: Signal<bool>,
    error: Signal<Option<String>>,
    saved: Signal<Option<EntityId>>,
}

impl ClubForm {
    /// Initializes the form, patching in `club` when one is supplied.
    pub fn mount(
        gateway: Arc<dyn EntityGateway<Club>>,
        notifier: Arc<dyn Notifier>,
        club: Option<Club>,
        mode: FormMode,
    ) -> Self {
        let fields = club.as_ref().map_or_else(ClubFields::blank, ClubFields::from_club);
        Self {
            gateway,
            notifier,
            mode,
            club: Signal::new(club),
            fields: Signal::new(fields),
            touched: Signal::default(),
            loading: Signal::new(false),
            submitting: Signal::new(false),
            error: Signal::new(None),
            saved: Signal::new(None),
        }
    }

    /// Fetches the club and patches its values in.
    pub async fn load(&self, id: EntityId) -> Result<()> {
        self.loading.set(true);
        let result = self.gateway.get(id).await;
        self.loading.set(false);

        match result {
            Ok(club) => {
                tracing::debug!(club_id = %id, "Club loaded into form");
                self.fields.set(ClubFields::from_club(&club));
                self.club.set(Some(club));
                Ok(())
            }
            Err(e) => {
                tracing::error!(club_id = %id, error = %e, "Failed to load club");
                self.fail(messages::CLUB_LOAD_FAILED);
                Err(EditorError::load(messages::CLUB_LOAD_FAILED, e))
            }
        }
    }

    /// Mode the form was mounted in.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Club the form was mounted with or loaded.
    pub fn club(&self) -> &Signal<Option<Club>> {
        &self.club
    }

    /// Current field values.
    pub fn fields(&self) -> &Signal<ClubFields> {
        &self.fields
    }

    /// Fields the user has interacted with.
    pub fn touched(&self) -> &Signal<BTreeSet<ClubField>> {
        &self.touched
    }

    /// `true` while [`load`](Self::load) is running.
    pub fn loading(&self) -> &Signal<bool> {
        &self.loading
    }

    /// `true` while a submission is in flight.
    pub fn submitting(&self) -> &Signal<bool> {
        &self.submitting
    }

    /// Inline error message.
    pub fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }

    /// Edits the field values.
    pub fn edit(&self, f: impl FnOnce(&mut ClubFields)) {
        self.fields.update(f);
    }

    /// Marks one field as touched.
    pub fn touch(&self, field: ClubField) {
        self.touched.update_if(|touched| touched.insert(field));
    }

    /// Marks every field as touched so all violations show.
    pub fn mark_all_touched(&self) {
        self.touched.set(ClubField::ALL.into_iter().collect());
    }

    /// Returns `true` once `field` has been touched.
    pub fn is_touched(&self, field: ClubField) -> bool {
        self.touched.with(|touched| touched.contains(&field))
    }

    /// Validates the current values.
    pub fn validate(&self) -> Validation<ClubField> {
        self.fields.with(ClubFields::validate)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        if self.loading.get() {
            FormPhase::Loading
        } else if self.submitting.get() {
            FormPhase::Submitting
        } else if self.saved.with(Option::is_some) {
            FormPhase::Exited
        } else if self.error.with(Option::is_some) {
            FormPhase::ReadyWithError
        } else {
            FormPhase::Ready
        }
    }

    /// Validates and stores the club.
    ///
    /// Returns [`EditorError::Busy`] without any remote call while a previous
    /// submission is still in flight. On failure the values stay in place
    /// so the user can retry.
    pub async fn submit(&self) -> Result<FormExit> {
        if self.submitting.get() {
            tracing::debug!("Submit ignored, already submitting");
            return Err(EditorError::Busy);
        }

        self.error.set(None);

        let fields = self.fields.get();
        let validation = fields.validate();
        if !validation.is_valid() {
            tracing::debug!(
                invalid = ?validation.invalid_fields().collect::<Vec<_>>(),
                "Club form rejected"
            );
            self.fail(messages::FORM_INVALID);
            self.mark_all_touched();
            return Err(EditorError::validation(messages::FORM_INVALID));
        }

        if !self.submitting.update_if(|s| !std::mem::replace(s, true)) {
            return Err(EditorError::Busy);
        }

        let club_id = self.club.with(|club| club.as_ref().map(|c| c.id));
        let draft = fields.to_draft(self.mode, club_id);
        let (result, saved_msg, failed_msg) = match self.mode {
            FormMode::Create => (
                self.gateway.create(&draft).await,
                messages::CLUB_CREATED,
                messages::CLUB_CREATE_FAILED,
            ),
            FormMode::Edit => (
                self.gateway.update(&draft).await,
                messages::CLUB_UPDATED,
                messages::CLUB_UPDATE_FAILED,
            ),
        };

        match result {
            Ok(id) => {
                tracing::info!(club_id = %id, mode = ?self.mode, "Club saved");
                self.notifier.notify(saved_msg);
                self.submitting.set(false);
                self.saved.set(Some(id));
                Ok(FormExit::Saved { id })
            }
            Err(e) => {
                tracing::error!(mode = ?self.mode, error = %e, "Failed to save club");
                self.fail(failed_msg);
                self.submitting.set(false);
                Err(EditorError::save(failed_msg, e))
            }
        }
    }

    /// Abandons the form. Touches nothing.
    pub fn cancel(&self) -> FormExit {
        FormExit::Cancelled
    }

    fn fail(&self, message: &str) {
        self.error.set(Some(message.to_string()));
        self.notifier.notify(message);
    }
}

impl fmt::Debug for ClubForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClubForm")
            .field("mode", &self.mode)
            .field("fields", &self.fields)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
