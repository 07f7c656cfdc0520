//! Typed access to the host command's flag store

use crate::error::{FlagError, FlagResult};
use clap::parser::MatchesError;
use clap::ArgMatches;
use std::any::Any;

/// A store of named, already-typed flag values.
///
/// Each getter either yields the flag's current value or a [`FlagError`]
/// describing why there is none. Binding treats every error as "leave the
/// field alone".
pub trait FlagSource {
    /// Get a string flag
    fn get_string(&self, name: &str) -> FlagResult<String>;

    /// Get an integer flag
    fn get_int(&self, name: &str) -> FlagResult<i64>;

    /// Get a boolean flag
    fn get_bool(&self, name: &str) -> FlagResult<bool>;

    /// Get a 32-bit float flag
    fn get_f32(&self, name: &str) -> FlagResult<f32>;

    /// Get a 64-bit float flag
    fn get_f64(&self, name: &str) -> FlagResult<f64>;

    /// Get a repeated or delimited string flag
    fn get_string_slice(&self, name: &str) -> FlagResult<Vec<String>>;

    /// Get a repeated or delimited integer flag
    fn get_int_slice(&self, name: &str) -> FlagResult<Vec<i64>>;

    /// Get a repeated or delimited boolean flag
    fn get_bool_slice(&self, name: &str) -> FlagResult<Vec<bool>>;
}

/// Flags parsed by clap.
///
/// Integer flags must be declared with `value_parser!(i64)`, floats with
/// `value_parser!(f32)` / `value_parser!(f64)`, and boolean flags with
/// `ArgAction::SetTrue`/`SetFalse` or `value_parser!(bool)`.
impl FlagSource for ArgMatches {
    fn get_string(&self, name: &str) -> FlagResult<String> {
        one(self, name)
    }

    fn get_int(&self, name: &str) -> FlagResult<i64> {
        one(self, name)
    }

    fn get_bool(&self, name: &str) -> FlagResult<bool> {
        one(self, name)
    }

    fn get_f32(&self, name: &str) -> FlagResult<f32> {
        one(self, name)
    }

    fn get_f64(&self, name: &str) -> FlagResult<f64> {
        one(self, name)
    }

    fn get_string_slice(&self, name: &str) -> FlagResult<Vec<String>> {
        many(self, name)
    }

    fn get_int_slice(&self, name: &str) -> FlagResult<Vec<i64>> {
        many(self, name)
    }

    fn get_bool_slice(&self, name: &str) -> FlagResult<Vec<bool>> {
        many(self, name)
    }
}

fn one<T>(matches: &ArgMatches, name: &str) -> FlagResult<T>
where
    T: Any + Clone + Send + Sync + 'static,
{
    matches
        .try_get_one::<T>(name)
        .map_err(|e| matches_error(name, e))?
        .cloned()
        .ok_or_else(|| FlagError::Absent(name.to_string()))
}

fn many<T>(matches: &ArgMatches, name: &str) -> FlagResult<Vec<T>>
where
    T: Any + Clone + Send + Sync + 'static,
{
    matches
        .try_get_many::<T>(name)
        .map_err(|e| matches_error(name, e))?
        .map(|values| values.cloned().collect())
        .ok_or_else(|| FlagError::Absent(name.to_string()))
}

fn matches_error(name: &str, err: MatchesError) -> FlagError {
    match err {
        MatchesError::UnknownArgument { .. } => FlagError::Unknown(name.to_string()),
        other => FlagError::TypeMismatch {
            name: name.to_string(),
            detail: other.to_string(),
        },
    }
}
