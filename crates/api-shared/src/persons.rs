//! Person payloads.
//!
//! `Person` is both the stored record and the response body. `PersonReq` is what clients send
//! on create and update; the identifier never comes from the body.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A person record as stored and returned by the API.
///
/// JSON shape: `{"id": string, "name": string, "age": integer}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: i64,
}

/// Body of `POST /persons` and `PUT /persons/{id}`.
///
/// Missing fields decode to their zero values so a missing name is reported by validation
/// rather than as malformed JSON. Unknown fields, including `id`, are ignored. Capitalised keys
/// (`"Name"`, `"Age"`) are accepted as well, so `{"name": "John Doe", "Age": 22}` stores age 22.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonReq {
    #[serde(alias = "Name", alias = "NAME")]
    pub name: String,
    #[serde(alias = "Age", alias = "AGE")]
    pub age: i64,
}

/// Query string of `GET /persons`.
///
/// Kept as raw strings: an unparseable value falls back to its default instead of rejecting
/// the request.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPersonsQuery {
    /// 1-based page index (default 1)
    pub page_number: Option<String>,
    /// Records per page (default 100)
    pub page_size: Option<String>,
}

impl ListPersonsQuery {
    /// Builds the query from raw `(key, value)` pairs.
    ///
    /// A repeated key keeps its first value. Unrelated keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            page_number: first("pageNumber"),
            page_size: first("pageSize"),
        }
    }
}
