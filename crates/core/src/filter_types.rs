//! Filter types for catalog queries.
//!
//! Defines the declarative `(field, action, value)` filter triple evaluated
//! by the query engine, and the boundary validation that is the authoritative
//! rejection point for illegal action/field combinations and malformed value
//! shapes. After validation, evaluation never errors.

use crate::error::FilterError;
use crate::field::{Field, FieldKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison/matching action for a filter.
///
/// Legality is partitioned by [`FieldKind`]:
/// - numeric fields accept the five ordering comparisons;
/// - category-set fields accept `INCLUDES_ALL`, `INCLUDES_ANY`, `EXCLUDES`
///   over distinct set elements;
/// - text fields accept `EQUALS`, `CONTAINS`, and the includes/excludes
///   actions interpreted over substrings of one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Equals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    Contains,
    IncludesAll,
    IncludesAny,
    Excludes,
}

impl Action {
    /// Wire name of the action, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Equals => "EQUALS",
            Action::GreaterThan => "GREATER_THAN",
            Action::LessThan => "LESS_THAN",
            Action::GreaterThanOrEquals => "GREATER_THAN_OR_EQUALS",
            Action::LessThanOrEquals => "LESS_THAN_OR_EQUALS",
            Action::Contains => "CONTAINS",
            Action::IncludesAll => "INCLUDES_ALL",
            Action::IncludesAny => "INCLUDES_ANY",
            Action::Excludes => "EXCLUDES",
        }
    }

    /// Whether this action is legal for fields of the given kind.
    pub fn supports(&self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Numeric => matches!(
                self,
                Action::Equals
                    | Action::GreaterThan
                    | Action::LessThan
                    | Action::GreaterThanOrEquals
                    | Action::LessThanOrEquals
            ),
            FieldKind::CategorySet => matches!(
                self,
                Action::IncludesAll | Action::IncludesAny | Action::Excludes
            ),
            FieldKind::Text => matches!(
                self,
                Action::Equals
                    | Action::Contains
                    | Action::IncludesAll
                    | Action::IncludesAny
                    | Action::Excludes
            ),
        }
    }

    /// All actions legal for the given field kind, for field metadata.
    pub fn for_kind(kind: FieldKind) -> Vec<Action> {
        [
            Action::Equals,
            Action::GreaterThan,
            Action::LessThan,
            Action::GreaterThanOrEquals,
            Action::LessThanOrEquals,
            Action::Contains,
            Action::IncludesAll,
            Action::IncludesAny,
            Action::Excludes,
        ]
        .into_iter()
        .filter(|a| a.supports(kind))
        .collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filter value: a scalar number, one string, or a list of strings.
///
/// The legal shape is constrained by the field's kind and checked in
/// [`Filter::validate`]; the evaluator additionally resolves any residual
/// mismatch to a non-match instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FilterValue {
    /// Scalar numeric view of the value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Scalar string view of the value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// List view of the value; a scalar string becomes a singleton list.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            FilterValue::Text(s) => Some(vec![s.as_str()]),
            FilterValue::List(items) => Some(items.iter().map(String::as_str).collect()),
            FilterValue::Number(_) => None,
        }
    }
}

/// One `(field, action, value)` predicate.
///
/// `weight` is an optional attribute for score-based ranking schemes; it is
/// carried through the schema but has no effect on matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: Field,
    pub action: Action,
    pub value: FilterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Filter {
    /// Validates action legality and value shape against the field's kind.
    ///
    /// This is the single authoritative rejection point: the engine assumes
    /// pre-validated input and never re-raises for shape problems.
    pub fn validate(&self) -> Result<(), FilterError> {
        let kind = self.field.kind();
        if !self.action.supports(kind) {
            return Err(FilterError::UnsupportedAction {
                field: self.field,
                action: self.action,
                kind,
            });
        }
        let shape_ok = match kind {
            FieldKind::Numeric => self.value.as_number().is_some(),
            FieldKind::CategorySet => self.value.as_list().is_some(),
            FieldKind::Text => match self.action {
                // Exact and substring matches compare against one string.
                Action::Equals | Action::Contains => self.value.as_text().is_some(),
                _ => self.value.as_list().is_some(),
            },
        };
        if !shape_ok {
            return Err(FilterError::InvalidValue {
                field: self.field,
                action: self.action,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter(field: Field, action: Action, value: FilterValue) -> Filter {
        Filter {
            field,
            action,
            value,
            weight: None,
        }
    }

    #[test]
    fn action_names_round_trip_through_serde() {
        let parsed: Action = serde_json::from_str("\"GREATER_THAN_OR_EQUALS\"").unwrap();
        assert_eq!(parsed, Action::GreaterThanOrEquals);
        assert_eq!(
            serde_json::to_string(&Action::IncludesAny).unwrap(),
            "\"INCLUDES_ANY\""
        );
    }

    #[test]
    fn filter_deserializes_from_request_shape() {
        let f: Filter = serde_json::from_value(json!({
            "field": "score",
            "action": "GREATER_THAN",
            "value": 7.5
        }))
        .unwrap();
        assert_eq!(f.field, Field::Score);
        assert_eq!(f.value, FilterValue::Number(7.5));
        assert_eq!(f.weight, None);
    }

    #[test]
    fn filter_value_list_shape_deserializes() {
        let f: Filter = serde_json::from_value(json!({
            "field": "genres",
            "action": "INCLUDES_ALL",
            "value": ["Action", "Drama"],
            "weight": 2.0
        }))
        .unwrap();
        assert_eq!(
            f.value.as_list().unwrap(),
            vec!["Action", "Drama"]
        );
        assert_eq!(f.weight, Some(2.0));
    }

    #[test]
    fn scalar_text_coerces_to_singleton_list() {
        let value = FilterValue::Text("Action".into());
        assert_eq!(value.as_list().unwrap(), vec!["Action"]);
    }

    #[test]
    fn numeric_field_rejects_set_actions() {
        let f = filter(Field::Score, Action::IncludesAny, FilterValue::Number(5.0));
        assert_eq!(
            f.validate(),
            Err(FilterError::UnsupportedAction {
                field: Field::Score,
                action: Action::IncludesAny,
                kind: FieldKind::Numeric,
            })
        );
    }

    #[test]
    fn category_set_rejects_comparisons() {
        let f = filter(Field::Genres, Action::GreaterThan, FilterValue::Number(1.0));
        assert!(f.validate().is_err());
    }

    #[test]
    fn numeric_field_rejects_string_value() {
        let f = filter(Field::Score, Action::Equals, FilterValue::Text("8".into()));
        assert_eq!(
            f.validate(),
            Err(FilterError::InvalidValue {
                field: Field::Score,
                action: Action::Equals,
            })
        );
    }

    #[test]
    fn text_contains_requires_scalar_string() {
        let f = filter(
            Field::Title,
            Action::Contains,
            FilterValue::List(vec!["a".into()]),
        );
        assert!(f.validate().is_err());
    }

    #[test]
    fn text_excludes_accepts_scalar_or_list() {
        let scalar = filter(
            Field::Synopsis,
            Action::Excludes,
            FilterValue::Text("war".into()),
        );
        let list = filter(
            Field::Synopsis,
            Action::Excludes,
            FilterValue::List(vec!["war".into(), "space".into()]),
        );
        assert!(scalar.validate().is_ok());
        assert!(list.validate().is_ok());
    }

    #[test]
    fn valid_filters_pass() {
        assert!(filter(Field::Score, Action::LessThanOrEquals, FilterValue::Number(9.0))
            .validate()
            .is_ok());
        assert!(filter(
            Field::Genres,
            Action::Excludes,
            FilterValue::Text("Horror".into())
        )
        .validate()
        .is_ok());
        assert!(filter(
            Field::Title,
            Action::Contains,
            FilterValue::Text("monogatari".into())
        )
        .validate()
        .is_ok());
    }
}
