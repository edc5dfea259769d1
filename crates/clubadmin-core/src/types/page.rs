//! Paged results and page requests.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Page size used when a selection control needs every candidate.
pub const CANDIDATE_PAGE_SIZE: u32 = 1000;

/// One page of a remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Entities on this page, in server order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Vec<T>,

    /// Total matching entities across all pages
    #[serde(default)]
    pub total_elements: u64,

    /// Number of pages at this page size
    #[serde(default)]
    pub total_pages: u32,

    /// Requested page size
    #[serde(default)]
    pub size: u32,

    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
}

impl<T> Page<T> {
    /// Wraps a full result set as a single page.
    pub fn single(content: Vec<T>) -> Self {
        let len = content.len();
        Self {
            content,
            total_elements: len as u64,
            total_pages: u32::from(len > 0),
            size: len as u32,
            number: 0,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sort direction of a page request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Page index, size and sort order for a collection fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Entities per page
    pub size: u32,
    /// Field to sort by
    pub sort_field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl PageRequest {
    /// Creates a page request sorted by `id` ascending.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort_field: "id".to_string(),
            direction: SortDirection::Asc,
        }
    }

    /// The request used to fill a selection control: first page,
    /// [`CANDIDATE_PAGE_SIZE`] entries, by id ascending.
    pub fn candidates() -> Self {
        Self::new(0, CANDIDATE_PAGE_SIZE)
    }

    /// Sets the sort field and direction.
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = field.into();
        self.direction = direction;
        self
    }

    /// Value of the `sort` query parameter, e.g. `id,asc`.
    pub fn sort_param(&self) -> String {
        format!("{},{}", self.sort_field, self.direction)
    }
}
