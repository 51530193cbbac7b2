//! Container data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Container lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    #[default]
    Running,
    Stopped,
    Error,
}

impl ContainerStatus {
    /// Status text as shown in the table's status cell.
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerStatus::Running => "running",
            ContainerStatus::Stopped => "stopped",
            ContainerStatus::Error => "error",
        }
    }
}

/// A provisioned container as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    /// Owning panel user
    pub user: String,
    pub name: String,
    pub image: String,
    pub status: ContainerStatus,
    /// Published host port
    pub port: u16,
    pub created_at: DateTime<Utc>,
}

impl Container {
    /// Creates a container with a fresh id, stamped now.
    pub fn new(
        user: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        status: ContainerStatus,
        port: u16,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user: user.into(),
            name: name.into(),
            image: image.into(),
            status,
            port,
            created_at: Utc::now(),
        }
    }

    /// host:port endpoint string (for clipboard copy).
    pub fn endpoint(&self) -> String {
        format!("localhost:{}", self.port)
    }

    pub fn is_running(&self) -> bool {
        self.status == ContainerStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cell_text() {
        assert_eq!(ContainerStatus::Running.as_str(), "running");
        assert_eq!(ContainerStatus::Stopped.as_str(), "stopped");
        assert_eq!(ContainerStatus::Error.as_str(), "error");
    }

    #[test]
    fn endpoint_includes_port() {
        let c = Container::new("alice", "web1", "nginx:1.27", ContainerStatus::Running, 8080);
        assert_eq!(c.endpoint(), "localhost:8080");
        assert!(c.is_running());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ContainerStatus::Stopped).unwrap();
        assert_eq!(json, "\"stopped\"");
    }
}
