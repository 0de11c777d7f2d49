//! Wire types shared by every server-driven list endpoint.
//!
//! The backend speaks the Django REST conventions: `page` is 1-based,
//! `ordering` carries a `-` prefix for descending order, and filters are
//! encoded as `field__operator=value`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// `ordering` query value for a sort key: `field` or `-field`.
pub fn ordering_param(field: &str, direction: SortDirection) -> String {
    match direction {
        SortDirection::Ascending => field.to_string(),
        SortDirection::Descending => format!("-{}", field),
    }
}

/// Lookup operators the backend filter sets accept.
pub const FILTER_OPERATORS: &[&str] = &[
    "exact",
    "iexact",
    "contains",
    "icontains",
    "startswith",
    "gt",
    "gte",
    "lt",
    "lte",
    "in",
    "isnull",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("filter field must not be empty")]
    EmptyField,
    #[error("filter field '{0}' contains invalid characters")]
    InvalidField(String),
    #[error("unsupported filter operator '{0}'")]
    UnknownOperator(String),
    #[error("isnull filter on '{0}' expects true or false")]
    InvalidNullFlag(String),
}

/// One (field, operator, value) triple, forwarded to the server as-is once
/// it has passed [`ListFilter::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl ListFilter {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, "exact", value)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.field.is_empty() {
            return Err(FilterError::EmptyField);
        }
        // Related lookups (`route__name`) are allowed, but not a trailing
        // operator smuggled into the field name.
        let valid_chars = self
            .field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_chars || self.field.starts_with('_') || self.field.ends_with('_') {
            return Err(FilterError::InvalidField(self.field.clone()));
        }
        if !FILTER_OPERATORS.contains(&self.operator.as_str()) {
            return Err(FilterError::UnknownOperator(self.operator.clone()));
        }
        if self.operator == "isnull" && self.value != "true" && self.value != "false" {
            return Err(FilterError::InvalidNullFlag(self.field.clone()));
        }
        Ok(())
    }

    /// Query parameter name: `field` for `exact`, `field__op` otherwise.
    pub fn param_name(&self) -> String {
        if self.operator == "exact" {
            self.field.clone()
        } else {
            format!("{}__{}", self.field, self.operator)
        }
    }
}

/// List endpoint response body.
///
/// Paginated endpoints answer `{ "results": [...], "count": N }`; plain
/// endpoints answer a bare array, treated as one complete page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListPage<T> {
    Paginated { results: Vec<T>, count: u64 },
    Bare(Vec<T>),
}

impl<T> ListPage<T> {
    /// Rows plus the server-side total.
    pub fn into_parts(self) -> (Vec<T>, u64) {
        match self {
            ListPage::Paginated { results, count } => (results, count),
            ListPage::Bare(rows) => {
                let count = rows.len() as u64;
                (rows, count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ordering_param() {
        assert_eq!(ordering_param("name", SortDirection::Ascending), "name");
        assert_eq!(ordering_param("name", SortDirection::Descending), "-name");
    }

    #[test]
    fn test_filter_param_name() {
        assert_eq!(ListFilter::exact("route", "7").param_name(), "route");
        assert_eq!(
            ListFilter::new("name", "icontains", "ravi").param_name(),
            "name__icontains"
        );
    }

    #[test]
    fn test_filter_validation() {
        assert!(ListFilter::new("route__name", "startswith", "N").validate().is_ok());
        assert_eq!(
            ListFilter::new("", "exact", "1").validate(),
            Err(FilterError::EmptyField)
        );
        assert_eq!(
            ListFilter::new("name&x", "exact", "1").validate(),
            Err(FilterError::InvalidField("name&x".to_string()))
        );
        assert_eq!(
            ListFilter::new("name", "regex", ".*").validate(),
            Err(FilterError::UnknownOperator("regex".to_string()))
        );
        assert_eq!(
            ListFilter::new("phone", "isnull", "maybe").validate(),
            Err(FilterError::InvalidNullFlag("phone".to_string()))
        );
    }

    #[test]
    fn test_paginated_page_parses() {
        let body = json!({ "results": [1, 2, 3], "count": 42 });
        let page: ListPage<u32> = serde_json::from_value(body).unwrap();
        assert_eq!(page.into_parts(), (vec![1, 2, 3], 42));
    }

    #[test]
    fn test_bare_array_is_one_full_page() {
        let body = json!(["a", "b"]);
        let page: ListPage<String> = serde_json::from_value(body).unwrap();
        assert_eq!(
            page.into_parts(),
            (vec!["a".to_string(), "b".to_string()], 2)
        );
    }
}
