//! Read-only overview of driver types per profile.
//!
//! Columns are addressed by the profile identity carried in their header, not
//! by a stable index, so every update first resolves the column ordinal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::copy_request::CopiedType;
use crate::domain::types::{DriverTypeId, ProfileId};

/// Header cell of the overview; label columns carry no profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub profile: Option<ProfileId>,
    pub label: String,
}

impl ColumnHeader {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            profile: None,
            label: label.into(),
        }
    }

    pub fn profile(profile: ProfileId, label: impl Into<String>) -> Self {
        Self {
            profile: Some(profile),
            label: label.into(),
        }
    }
}

/// Body cell; `link` holds the plain label of the type link shown in the cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub link: Option<String>,
}

impl GridCell {
    /// The link label escaped for insertion into page markup.
    pub fn link_html(&self) -> Option<String> {
        self.link.as_deref().map(ammonia::clean_text)
    }
}

/// One row of the overview, keyed by the profile type it lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub type_id: DriverTypeId,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    /// Builds a row with one empty cell per column.
    pub fn empty(type_id: DriverTypeId, columns: usize) -> Self {
        Self {
            type_id,
            cells: vec![GridCell::default(); columns],
        }
    }
}

/// Row and column of a cell touched by an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("no column header for profile {0}")]
    UnknownProfile(ProfileId),
    #[error("no row for type {0}")]
    UnknownType(DriverTypeId),
    #[error("row for type {type_id} has no cell at column {column}")]
    MissingCell {
        type_id: DriverTypeId,
        column: usize,
    },
}

/// Returns the ordinal of the header carrying `profile` among all sibling
/// columns, or `None` when no header matches.
pub fn resolve_column_index(headers: &[ColumnHeader], profile: ProfileId) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.profile == Some(profile))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileGrid {
    pub headers: Vec<ColumnHeader>,
    pub rows: Vec<GridRow>,
}

impl ProfileGrid {
    #[must_use]
    pub fn new(headers: Vec<ColumnHeader>, rows: Vec<GridRow>) -> Self {
        Self { headers, rows }
    }

    pub fn cell(&self, type_id: DriverTypeId, profile: ProfileId) -> Option<&GridCell> {
        let column = resolve_column_index(&self.headers, profile)?;
        self.rows
            .iter()
            .find(|row| row.type_id == type_id)
            .and_then(|row| row.cells.get(column))
    }

    /// Shows the copied type as a link in the single cell at the row of the
    /// target type and the column of the reporting profile.
    ///
    /// The label is stored as given; [`GridCell::link_html`] escapes it for
    /// the page. Nothing changes when the row, the column or the cell cannot
    /// be found.
    pub fn apply_copy(&mut self, copied: &CopiedType) -> Result<CellPosition, GridError> {
        let column = resolve_column_index(&self.headers, copied.profile)
            .ok_or(GridError::UnknownProfile(copied.profile))?;
        let row = self
            .rows
            .iter()
            .position(|row| row.type_id == copied.target_type_id)
            .ok_or(GridError::UnknownType(copied.target_type_id))?;
        let cell = self.rows[row]
            .cells
            .get_mut(column)
            .ok_or(GridError::MissingCell {
                type_id: copied.target_type_id,
                column,
            })?;

        cell.link = Some(copied.type_name.as_str().to_string());
        Ok(CellPosition { row, column })
    }
}
