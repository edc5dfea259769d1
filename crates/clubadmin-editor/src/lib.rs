#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod form;
pub mod messages;
pub mod navigation;
pub mod notify;
pub mod page;
pub mod routes;

pub use error::{EditorError, Result};
pub use form::{
    ClubField, ClubFields, ClubForm, FormExit, FormMode, FormPhase, Validation, Violation,
};
pub use navigation::{HistoryNavigator, Navigator};
pub use notify::{Notice, Notifier, RecordingNotifier, TracingNotifier};
pub use page::{ClubEditPage, ClubNewPage, LeagueEditPage, PageState};
