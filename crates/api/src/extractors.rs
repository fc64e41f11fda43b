//! Request extractors.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// Query string parameters where the first occurrence of a name wins.
///
/// Never rejects: repeated names keep their first value and a query string
/// that cannot be decoded is treated as empty, so handlers fall back to their
/// defaults instead of answering with a plain-text 400.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Returns the first value given for `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first value for `name`, or `default` when it is absent.
    ///
    /// A parameter given with an empty value is returned as is.
    pub fn first_or(&self, name: &str, default: &str) -> String {
        self.first(name).unwrap_or(default).to_string()
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| Self(pairs))
            .unwrap_or_default();

        Ok(params)
    }
}
