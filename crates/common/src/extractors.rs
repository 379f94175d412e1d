//! Custom axum extractors for Crowdfund

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer,
};
use std::{fmt, str::FromStr};
use validator::Validate;

use crate::Error;

/// Path extractor that validates the deserialized value automatically.
///
/// Malformed segments and validation failures both return 400 with the
/// standard error envelope.
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

/// Query-string extractor with the same rejection behaviour as [`ValidatedPath`].
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

/// Deserialize an optional query value, treating `?key=` like an absent key.
///
/// Use with `#[serde(default, deserialize_with = "empty_string_as_none")]`.
/// Non-empty values that fail to parse are still rejected.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

fn validate<T: Validate>(value: &T) -> Result<(), Error> {
    value
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))
}

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        validate(&value)?;
        Ok(ValidatedPath(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        validate(&value)?;
        Ok(ValidatedQuery(value))
    }
}
