//! Shared types for capability traits.

use serde::{Deserialize, Serialize};

/// Health status of a generative capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Capability is fully operational
    Healthy,
    /// Capability is operational but with reduced performance
    Degraded {
        /// Description of the degradation
        message: String,
    },
    /// Capability is not operational
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}
