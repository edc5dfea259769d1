//! Wire models and identifiers.

mod club;
mod ids;
mod league;
mod page;

pub use club::{Club, ClubDraft, NewClubCollections};
pub use ids::{EntityId, RouteIdError};
pub use league::{League, LeagueDraft, Team};
pub use page::{CANDIDATE_PAGE_SIZE, Page, PageRequest, SortDirection};
