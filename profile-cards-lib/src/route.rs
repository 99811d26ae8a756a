use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::profile::ProfileId;

/// Name of the route showing every profile.
pub const USERS_LIST: &str = "users_list";
/// Name of the route showing a single profile, parameterized by `{userId}`.
pub const USERS_DETAILS: &str = "users_details";

/// An addressable screen together with its parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    List,
    Detail { profile_id: ProfileId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route `{0}`")]
    UnknownRoute(String),
    #[error("Route `{0}` is missing its `userId` parameter")]
    MissingParameter(String),
    #[error("`{0}` is not a valid `userId`")]
    InvalidParameter(String),
}

impl Route {
    pub fn detail(profile_id: impl Into<ProfileId>) -> Self {
        Self::Detail {
            profile_id: profile_id.into(),
        }
    }

    /// The route pattern this route was built from, e.g. `users_details/{userId}`.
    pub fn pattern(&self) -> &'static str {
        match self {
            Route::List => USERS_LIST,
            Route::Detail { .. } => "users_details/{userId}",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str(USERS_LIST),
            Route::Detail { profile_id } => write!(f, "{USERS_DETAILS}/{profile_id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim().trim_matches('/');
        let (name, parameter) = match path.split_once('/') {
            Some((name, parameter)) => (name, Some(parameter)),
            None => (path, None),
        };

        match (name, parameter) {
            (USERS_LIST, None) => Ok(Route::List),
            (USERS_DETAILS, None) | (USERS_DETAILS, Some("")) => {
                Err(RouteError::MissingParameter(path.to_string()))
            }
            (USERS_DETAILS, Some(parameter)) => parameter
                .parse::<i32>()
                .map(Route::detail)
                .map_err(|_| RouteError::InvalidParameter(parameter.to_string())),
            _ => Err(RouteError::UnknownRoute(path.to_string())),
        }
    }
}
