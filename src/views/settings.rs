use crate::domain::User;
use crate::error::{QcError, Result};
use crate::store::AppState;
use crate::views::navigation::Route;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Page sizes offered in the display settings.
///
/// Serialized as the select's string value (`"20"`), not as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketsPerPage(u32);

impl TicketsPerPage {
    pub const CHOICES: [u32; 4] = [10, 20, 50, 100];

    pub fn new(value: u32) -> Result<Self> {
        if Self::CHOICES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(QcError::InvalidTicketsPerPage(value.to_string()))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for TicketsPerPage {
    fn default() -> Self {
        Self(20)
    }
}

impl TryFrom<u32> for TicketsPerPage {
    type Error = QcError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TicketsPerPage> for u32 {
    fn from(value: TicketsPerPage) -> Self {
        value.0
    }
}

impl FromStr for TicketsPerPage {
    type Err = QcError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| QcError::InvalidTicketsPerPage(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<String> for TicketsPerPage {
    type Error = QcError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TicketsPerPage> for String {
    fn from(value: TicketsPerPage) -> Self {
        value.0.to_string()
    }
}

/// Notification and display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub is_dark_mode: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_digest: bool,
    pub tickets_per_page: TicketsPerPage,
    pub default_view: Route,
    pub compact_view: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            email_notifications: true,
            push_notifications: true,
            weekly_digest: true,
            tickets_per_page: TicketsPerPage::default(),
            default_view: Route::Board,
            compact_view: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSettings {
    pub full_name: String,
    pub email: String,
}

/// State behind the settings screen.
///
/// Saving only acknowledges; nothing here is written back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub account: AccountSettings,
    pub preferences: Preferences,
}

impl Settings {
    pub const DEFAULT_EMAIL: &'static str = "user@example.com";

    /// Settings prefilled for whoever is currently selected
    pub fn for_state(state: &AppState) -> Self {
        Self {
            account: AccountSettings {
                full_name: state
                    .current_user()
                    .map(|u| u.name.clone())
                    .unwrap_or_default(),
                email: Self::DEFAULT_EMAIL.to_string(),
            },
            preferences: Preferences::default(),
        }
    }

    /// "Reset All Settings": preferences only, account fields are kept
    pub fn reset(&mut self) {
        self.preferences = Preferences::default();
    }

    /// Snapshot for "Export My Data"
    pub fn export(&self, state: &AppState, now: DateTime<Utc>) -> SettingsExport {
        SettingsExport {
            export_date: now,
            user: state.current_user().cloned(),
            settings: self.preferences.clone(),
        }
    }
}

/// Downloadable settings snapshot. Informational only, never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsExport {
    pub export_date: DateTime<Utc>,
    pub user: Option<User>,
    pub settings: Preferences,
}

impl SettingsExport {
    pub fn file_name(&self) -> String {
        format!(
            "qc-lite-settings-{}.json",
            self.export_date.timestamp_millis()
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppStore;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(prefs.email_notifications);
        assert!(!prefs.compact_view);
        assert_eq!(prefs.tickets_per_page.get(), 20);
        assert_eq!(prefs.default_view, Route::Board);
    }

    #[test]
    fn test_tickets_per_page_choices() {
        assert!(TicketsPerPage::new(50).is_ok());
        assert!(matches!(
            TicketsPerPage::new(25),
            Err(QcError::InvalidTicketsPerPage(v)) if v == "25"
        ));
        assert_eq!("100".parse::<TicketsPerPage>().unwrap().get(), 100);
        assert!("lots".parse::<TicketsPerPage>().is_err());
    }

    #[test]
    fn test_tickets_per_page_serializes_as_string() {
        let value = TicketsPerPage::new(50).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"50\"");
        assert_eq!(
            serde_json::from_str::<TicketsPerPage>("\"10\"").unwrap(),
            TicketsPerPage::new(10).unwrap()
        );
        assert!(serde_json::from_str::<TicketsPerPage>("\"30\"").is_err());
        assert!(serde_json::from_str::<TicketsPerPage>("20").is_err());
    }

    #[test]
    fn test_reset_keeps_account() {
        let store = AppStore::demo();
        let mut settings = Settings::for_state(store.state());
        settings.account.full_name = "Alice J.".to_string();
        settings.preferences.compact_view = true;
        settings.preferences.tickets_per_page = TicketsPerPage::new(100).unwrap();

        settings.reset();

        assert_eq!(settings.preferences, Preferences::default());
        assert_eq!(settings.account.full_name, "Alice J.");
    }

    #[test]
    fn test_export_snapshot() {
        let store = AppStore::demo();
        let settings = Settings::for_state(store.state());
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();

        let export = settings.export(store.state(), now);
        assert_eq!(export.file_name(), "qc-lite-settings-1710072000000.json");

        let json: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
        assert_eq!(json["user"]["name"], "Alice Johnson");
        assert_eq!(json["settings"]["ticketsPerPage"], "20");
        assert_eq!(json["settings"]["defaultView"], "board");
        assert_eq!(json["exportDate"], "2024-03-10T12:00:00Z");
    }
}
