//! Log parameters and their loggable string form.
//!
//! Every parameter is reduced to text when it is built, so a log call never
//! has to serialize anything and cannot fail halfway through.

use std::fmt;

use serde::Serialize;

/// Separator placed between the message and its parameters.
pub const PARAMS_SEPARATOR: &str = " \u{2014} ";

/// A single log parameter, already rendered to its loggable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogParam {
    /// Plain text, passed through unchanged.
    Text(String),
    /// An error value, reduced to its message.
    Error(String),
    /// A structured value rendered as indented JSON, or its fallback form
    /// when serialization failed.
    Structured(String),
    /// Any other value, in its default string form.
    Value(String),
}

impl LogParam {
    pub fn text(value: impl Into<String>) -> Self {
        LogParam::Text(value.into())
    }

    pub fn error(err: &(dyn std::error::Error + '_)) -> Self {
        LogParam::Error(err.to_string())
    }

    pub fn error_message(message: impl Into<String>) -> Self {
        LogParam::Error(message.into())
    }

    /// Renders `value` as JSON with two-space indentation. If serialization
    /// fails the `Debug` form is used instead.
    pub fn structured<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        match serde_json::to_string_pretty(value) {
            Ok(json) => LogParam::Structured(json),
            Err(_) => LogParam::Structured(format!("{value:?}")),
        }
    }

    pub fn display(value: &(impl fmt::Display + ?Sized)) -> Self {
        LogParam::Value(value.to_string())
    }

    /// The text this parameter contributes to a log line.
    pub fn to_loggable(&self) -> &str {
        match self {
            LogParam::Text(s)
            | LogParam::Error(s)
            | LogParam::Structured(s)
            | LogParam::Value(s) => s,
        }
    }
}

impl fmt::Display for LogParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_loggable())
    }
}

impl From<&str> for LogParam {
    fn from(value: &str) -> Self {
        LogParam::Text(value.to_string())
    }
}

impl From<String> for LogParam {
    fn from(value: String) -> Self {
        LogParam::Text(value)
    }
}

impl From<&String> for LogParam {
    fn from(value: &String) -> Self {
        LogParam::Text(value.clone())
    }
}

impl From<serde_json::Value> for LogParam {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => LogParam::Text(s),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                LogParam::structured(&value)
            }
            other => LogParam::Value(other.to_string()),
        }
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogParam {
                fn from(value: $ty) -> Self {
                    LogParam::Value(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Second argument of [`Logger::error`](super::Logger::error): either the
/// error that caused the failure, or an ordinary first parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    Error(String),
    Param(LogParam),
}

impl Cause {
    pub fn error(err: &(dyn std::error::Error + '_)) -> Self {
        Cause::Error(err.to_string())
    }

    pub fn error_message(message: impl Into<String>) -> Self {
        Cause::Error(message.into())
    }
}

impl<E: std::error::Error> From<&E> for Cause {
    fn from(err: &E) -> Self {
        Cause::Error(err.to_string())
    }
}

impl From<LogParam> for Cause {
    fn from(param: LogParam) -> Self {
        Cause::Param(param)
    }
}

/// Joins rendered parameters with `", "` and prefixes the separator.
/// Returns an empty string when there is nothing to show.
pub fn format_params(params: &[LogParam]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let joined = params
        .iter()
        .map(LogParam::to_loggable)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        String::new()
    } else {
        format!("{PARAMS_SEPARATOR}{joined}")
    }
}

/// Builds a `Vec<LogParam>` from heterogeneous values.
///
/// ```
/// use gistmate::log_params;
///
/// let params = log_params!["a", 42, true];
/// assert_eq!(params.len(), 3);
/// ```
#[macro_export]
macro_rules! log_params {
    () => {
        ::std::vec::Vec::<$crate::domain::logging::LogParam>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::domain::logging::LogParam::from($value)),+]
    };
}
