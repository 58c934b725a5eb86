use crate::error::QcError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Dashboard,
    Board,
    Calendar,
    Sprints,
    Settings,
    Login,
}

impl Route {
    /// Entries in the sidebar, in display order
    pub const NAVIGATION: [Route; 5] = [
        Self::Dashboard,
        Self::Board,
        Self::Calendar,
        Self::Sprints,
        Self::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Board => "/board",
            Self::Calendar => "/calendar",
            Self::Sprints => "/sprints",
            Self::Settings => "/settings",
            Self::Login => "/login",
        }
    }

    /// Maps a URL path to a screen; anything unknown lands on the dashboard
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            _ => trimmed
                .strip_prefix('/')
                .and_then(|name| name.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Screen actually shown; signed-out users always get the login page
    pub fn resolve(self, is_logged_in: bool) -> Self {
        if is_logged_in {
            self
        } else {
            Self::Login
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Board => write!(f, "Board"),
            Self::Calendar => write!(f, "Calendar"),
            Self::Sprints => write!(f, "Sprints"),
            Self::Settings => write!(f, "Settings"),
            Self::Login => write!(f, "Login"),
        }
    }
}

impl FromStr for Route {
    type Err = QcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "board" => Ok(Self::Board),
            "calendar" => Ok(Self::Calendar),
            "sprints" => Ok(Self::Sprints),
            "settings" => Ok(Self::Settings),
            "login" => Ok(Self::Login),
            _ => Err(QcError::InvalidRoute(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/board"), Route::Board);
        assert_eq!(Route::from_path("/sprints/"), Route::Sprints);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
        assert_eq!(Route::from_path("board"), Route::Dashboard);

        for route in Route::NAVIGATION {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_login_guard() {
        assert_eq!(Route::Board.resolve(false), Route::Login);
        assert_eq!(Route::Board.resolve(true), Route::Board);
        assert_eq!(Route::Login.resolve(false), Route::Login);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Calendar".parse::<Route>().unwrap(), Route::Calendar);
        assert!("reports".parse::<Route>().is_err());
    }
}
