//! User-facing texts shown by the editors.

use std::time::Duration;

/// Dismiss label on every notification.
pub const DISMISS_LABEL: &str = "Cerrar";

/// How long a notification stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_millis(4000);

/// Club form failed validation.
pub const FORM_INVALID: &str = "Por favor, complete todos los campos correctamente";
/// Club created.
pub const CLUB_CREATED: &str = "Club creado exitosamente";
/// Club updated.
pub const CLUB_UPDATED: &str = "Club actualizado exitosamente";
/// Club create failed.
pub const CLUB_CREATE_FAILED: &str = "Error creando el club";
/// Club update failed.
pub const CLUB_UPDATE_FAILED: &str = "Error actualizando el club";
/// Club fetch failed.
pub const CLUB_LOAD_FAILED: &str = "Error cargando el club";
/// Club route carried no id, or the `0` placeholder.
pub const CLUB_ID_INVALID: &str = "ID de club no válido";

/// Route id is not a usable number.
pub const ID_INVALID: &str = "ID no válido";

/// League fetch failed.
pub const LEAGUE_LOAD_FAILED: &str = "Error cargando la liga";
/// Team list fetch failed.
pub const TEAMS_LOAD_FAILED: &str = "Error cargando equipos";
/// League name is blank.
pub const NAME_REQUIRED: &str = "El nombre es obligatorio";
/// No usable team selected.
pub const TEAM_REQUIRED: &str = "Selecciona un equipo válido";
/// League update failed.
pub const LEAGUE_UPDATE_FAILED: &str = "Error actualizando la liga";

/// A submit or save is already running.
pub const OPERATION_IN_PROGRESS: &str = "Ya hay una operación en curso";
/// The page has nothing loaded to edit yet.
pub const NOT_READY: &str = "Los datos todavía no están disponibles";
/// The page was left before the operation finished.
pub const CANCELLED: &str = "Operación cancelada";
