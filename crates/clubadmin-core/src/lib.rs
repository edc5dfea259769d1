#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! clubadmin Core Library
//!
//! Core types, normalizers and traits shared by the gateway and editor crates.

pub mod cancel;
pub mod dates;
pub mod error;
pub mod gateway;
pub mod relation;
pub mod signal;
pub mod types;

mod proptests;

// Re-exports for convenience
pub use cancel::CancelToken;
pub use dates::{DateValue, to_editable_date, to_storage_date_time};
pub use error::{Error, Result};
pub use gateway::{EntityGateway, Resource};
pub use relation::{RelationPayload, build_relation_payload, resolve_relation_id};
pub use signal::Signal;
pub use types::{
    Club, ClubDraft, EntityId, League, LeagueDraft, NewClubCollections, Page, PageRequest,
    RouteIdError, SortDirection, Team,
};
