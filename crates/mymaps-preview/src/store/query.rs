//! Builder for Firestore `runQuery` structured queries.
//!
//! Only the subset the gateway needs: a single collection, equality filters
//! (combined with AND) and a limit. Queries never order results, so
//! equality-only queries are served by Firestore's single-field indexes.
//!
//! The read accessors (`collection_id`, `filter`, `max_results`,
//! `equality_value`) let [`DocumentStore`](super::DocumentStore)
//! implementations other than Firestore evaluate a query in memory.

use serde::Serialize;

use super::document::Value;

/// A structured query, serialized as the `structuredQuery` member of a
/// `runQuery` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

/// A query filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    FieldFilter(FieldFilter),
    CompositeFilter(CompositeFilter),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFilter {
    pub field: FieldReference,
    pub op: FieldOperator,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeFilter {
    pub op: CompositeOperator,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldOperator {
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositeOperator {
    And,
}

impl Filter {
    /// `field == value` on a string field.
    pub fn equal(field: &str, value: &str) -> Self {
        Self::FieldFilter(FieldFilter {
            field: FieldReference {
                field_path: field.to_string(),
            },
            op: FieldOperator::Equal,
            value: Value::string(value),
        })
    }

    /// Field filters contained in this filter, flattening AND composites.
    pub fn field_filters(&self) -> Vec<&FieldFilter> {
        match self {
            Self::FieldFilter(f) => vec![f],
            Self::CompositeFilter(c) => c.filters.iter().flat_map(Filter::field_filters).collect(),
        }
    }
}

impl StructuredQuery {
    /// Start a query over a single collection.
    pub fn collection(collection_id: &str) -> Self {
        Self {
            from: vec![CollectionSelector {
                collection_id: collection_id.to_string(),
            }],
            filter: None,
            limit: None,
        }
    }

    /// Add an equality filter. A second filter turns the query's `where`
    /// clause into an AND composite; later filters join that composite.
    pub fn where_equal(mut self, field: &str, value: &str) -> Self {
        let next = Filter::equal(field, value);
        self.filter = Some(match self.filter.take() {
            None => next,
            Some(Filter::CompositeFilter(mut composite)) => {
                composite.filters.push(next);
                Filter::CompositeFilter(composite)
            }
            Some(existing) => Filter::CompositeFilter(CompositeFilter {
                op: CompositeOperator::And,
                filters: vec![existing, next],
            }),
        });
        self
    }

    /// Cap the number of returned documents.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The collection this query reads from.
    pub fn collection_id(&self) -> &str {
        self.from
            .first()
            .map(|c| c.collection_id.as_str())
            .unwrap_or_default()
    }

    /// The `where` clause, if any.
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// The result cap set by [`limit`](Self::limit).
    pub fn max_results(&self) -> Option<u32> {
        self.limit
    }

    /// Look up the string an equality filter compares `field` against.
    pub fn equality_value(&self, field: &str) -> Option<&str> {
        self.filter
            .as_ref()?
            .field_filters()
            .into_iter()
            .find(|f| f.field.field_path == field && f.op == FieldOperator::Equal)
            .and_then(|f| f.value.string_value.as_deref())
    }

    /// `runQuery` request body.
    pub fn to_request_body(&self) -> serde_json::Value {
        serde_json::json!({ "structuredQuery": self })
    }
}
