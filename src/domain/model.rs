use crate::utils::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed status vocabulary. Declaration order is the order rendered in the
/// allowed-values error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planned,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planned,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|status| status.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| TrackerError::InvalidProject {
                reason: format!("status must be one of {}", Self::allowed_values()),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub status: ProjectStatus,
}

impl Project {
    /// Fallible constructor: trims the name, rejects empty names and unknown
    /// status strings. The HTTP validator runs the same membership check, so
    /// this boundary only fires if the two drift apart.
    pub fn new(project_name: &str, status: &str) -> Result<Self> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(TrackerError::InvalidProject {
                reason: "projectName must be a non-empty string".to_string(),
            });
        }

        Ok(Self {
            project_name: project_name.to_string(),
            status: status.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
        assert!("Unknown".parse::<ProjectStatus>().is_err());
        assert!("planned".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_allowed_values_order() {
        assert_eq!(ProjectStatus::allowed_values(), "Planned, Ongoing, Completed");
    }

    #[test]
    fn test_project_new_trims_name() {
        let project = Project::new("  Clean Water  ", "Ongoing").unwrap();
        assert_eq!(project.project_name, "Clean Water");
        assert_eq!(project.status, ProjectStatus::Ongoing);
    }

    #[test]
    fn test_project_new_rejects_blank_name() {
        assert!(Project::new("   ", "Planned").is_err());
        assert!(Project::new("", "Planned").is_err());
    }

    #[test]
    fn test_project_serializes_with_wire_field_names() {
        let project = Project::new("Solar Grid", "Completed").unwrap();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"projectName": "Solar Grid", "status": "Completed"})
        );
    }
}
