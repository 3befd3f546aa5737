#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn from_backend() -> Self {
        Self {
            message: "Hello from the backend!".to_string(),
        }
    }
}
