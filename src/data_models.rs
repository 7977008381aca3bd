use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::SearchForm;

/// Snapshot of the form's named fields at submit time, in document order.
/// Built once per submission and discarded when the request completes.
#[derive(Serialize, Debug, Clone)]
#[serde(transparent)]
pub struct SearchRequest {
    fields: Vec<(String, String)>,
}

impl SearchRequest {
    pub fn from_form(form: &SearchForm) -> SearchRequest {
        SearchRequest {
            fields: form.snapshot(),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Body of a `/search` reply. Only `success` is ever inspected for
/// branching; the rest is rendered as-is.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cases: Option<CaseCount>,
    #[serde(default)]
    pub graph_url: Option<String>,
}

/// The server reports `cases` as whatever its storage held, a number or a
/// string. Both render the same way.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CaseCount {
    Number(i64),
    Text(String),
}

impl fmt::Display for CaseCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseCount::Number(n) => write!(f, "{n}"),
            CaseCount::Text(s) => write!(f, "{s}"),
        }
    }
}
