use crate::domain::id::AlertId;
use crate::error::QcError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Info,
    Warning,
    Error,
    Success,
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
        }
    }
}

impl FromStr for AlertType {
    type Err = QcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(QcError::InvalidAlertType(s.to_string())),
        }
    }
}

/// An ephemeral, dismissible notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub alert_type: AlertType,
}

impl NewAlert {
    pub fn new(
        alert_type: AlertType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            alert_type,
        }
    }
}

impl Alert {
    pub fn from_new(id: AlertId, data: NewAlert, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            message: data.message,
            alert_type: data.alert_type,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name() {
        let alert = Alert::from_new(
            AlertId::new("a1"),
            NewAlert::new(AlertType::Warning, "High CPU Usage", "Server CPU usage is at 92%."),
            Utc::now(),
        );
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "warning");
        assert!(json.get("alert_type").is_none());
    }

    #[test]
    fn test_alert_type_parsing() {
        assert_eq!(AlertType::from_str("error").unwrap(), AlertType::Error);
        assert!(AlertType::from_str("fatal").is_err());
    }
}
