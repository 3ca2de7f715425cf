//! Parameterized song query descriptor.
//!
//! A [`SongQuery`] is a conjunction of `(column, operator, value)`
//! predicates plus an offset/limit window. Stores translate it to their own
//! parameter binding; values are never spliced into SQL text and columns
//! come from the closed [`Column`] enum.

#[cfg(test)]
use crate::model::Song;
use crate::model::{Pagination, SongFilters};

/// Case folding applied to names and filter values before matching.
///
/// Stores must fold both sides with this function so that matching agrees
/// across implementations, including for non-ASCII names.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Filterable song columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    GroupName,
    SongName,
}

impl Column {
    /// Column of the `songs` table holding the folded name, used for matching
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::GroupName => "group_name_folded",
            Self::SongName => "song_name_folded",
        }
    }

    /// The field of `song` this column maps to
    #[cfg(test)]
    pub fn value_of(self, song: &Song) -> &str {
        match self {
            Self::GroupName => &song.group_name,
            Self::SongName => &song.song_name,
        }
    }
}

/// Comparison applied by a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Case-insensitive substring match
    Contains,
}

/// One `column <op> value` condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: Column,
    pub operator: Operator,
    pub value: String,
}

impl Predicate {
    /// Evaluate against an in-memory song.
    #[cfg(test)]
    pub fn matches(&self, song: &Song) -> bool {
        let field = self.column.value_of(song);
        match self.operator {
            Operator::Contains => fold(field).contains(&fold(&self.value)),
        }
    }
}

/// Filter + pagination request handed to a song store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongQuery {
    predicates: Vec<Predicate>,
    pagination: Pagination,
}

impl SongQuery {
    /// An unfiltered query over one page.
    pub fn new(pagination: Pagination) -> Self {
        Self {
            predicates: Vec::new(),
            pagination,
        }
    }

    /// Add a predicate. Empty values add nothing.
    pub fn and(mut self, column: Column, operator: Operator, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.predicates.push(Predicate {
                column,
                operator,
                value,
            });
        }
        self
    }

    /// Build the listing query for the given filters and page.
    pub fn from_filters(filters: &SongFilters, pagination: Pagination) -> Self {
        let mut query = Self::new(pagination);
        if let Some(group) = &filters.group {
            query = query.and(Column::GroupName, Operator::Contains, group.as_str());
        }
        if let Some(song) = &filters.song {
            query = query.and(Column::SongName, Operator::Contains, song.as_str());
        }
        query
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Rows to take
    pub fn limit(&self) -> u32 {
        self.pagination.limit()
    }

    /// Rows to skip
    pub fn offset(&self) -> u64 {
        self.pagination.offset()
    }

    /// True when every predicate holds for `song`.
    #[cfg(test)]
    pub fn matches(&self, song: &Song) -> bool {
        self.predicates.iter().all(|p| p.matches(song))
    }
}
