//! Well-known asset and maintenance status values.
//!
//! Stored as plain text columns; these enums give string conversions and a
//! closed list for request validation.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    InService,
    InStorage,
    UnderRepair,
    Retired,
    Lost,
}

impl AssetStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InService => "in_service",
            Self::InStorage => "in_storage",
            Self::UnderRepair => "under_repair",
            Self::Retired => "retired",
            Self::Lost => "lost",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in_service" => Some(Self::InService),
            "in_storage" => Some(Self::InStorage),
            "under_repair" => Some(Self::UnderRepair),
            "retired" => Some(Self::Retired),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] =
        &["in_service", "in_storage", "under_repair", "retired", "lost"];
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a maintenance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(Self::Scheduled),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] =
        &["scheduled", "in_progress", "completed", "cancelled"];
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate an asset status string against the closed list.
pub fn validate_asset_status(status: &str) -> Result<(), String> {
    if AssetStatus::from_str(status).is_some() {
        Ok(())
    } else {
        Err(format!(
            "Invalid asset status '{}'. Must be one of: {}",
            status,
            AssetStatus::ALL.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_status_round_trip() {
        for s in AssetStatus::ALL {
            let status = AssetStatus::from_str(s).unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn asset_status_unknown_returns_none() {
        assert!(AssetStatus::from_str("broken").is_none());
    }

    #[test]
    fn maintenance_status_round_trip() {
        for s in MaintenanceStatus::ALL {
            let status = MaintenanceStatus::from_str(s).unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn validate_rejects_unknown_status() {
        let result = validate_asset_status("destroyed");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("in_service"));
    }

    #[test]
    fn validate_accepts_all_known() {
        for s in AssetStatus::ALL {
            assert!(validate_asset_status(s).is_ok());
        }
    }
}
