//! # Environment Variables
//!
//! Helpers for reading optional, typed and list-valued environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, treating unset or blank values as `None`.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get and parse an optional environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

/// Get and parse a comma-separated environment variable.
///
/// Empty items are skipped, so `"a,,b,"` yields two items.
pub fn get_env_list<T: FromStr>(name: &'static str) -> Result<Option<Vec<T>>, Error> {
    let Some(val) = get_env_opt(name) else {
        return Ok(None);
    };

    val.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>().map_err(|_| Error::WrongFormat(name)))
        .collect::<Result<Vec<T>, Error>>()
        .map(Some)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
