//! Error types for the simulation and scenario loading.

/// Errors raised while running a simulation tick.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// A component carried data the damage rule cannot work with
    /// (NaN or infinite values). Fatal for the tick.
    #[error("malformed {component} on entity {entity}: {reason}")]
    MalformedComponent {
        /// Entity id bits, as returned by `hecs::Entity::to_bits`.
        entity: u64,
        component: &'static str,
        reason: String,
    },

    #[error("scenario error: {0}")]
    Scenario(#[from] ScenarioError),
}

/// Errors raised while loading or validating a scenario definition.
#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Structurally valid but unusable values
    #[error("invalid scenario: {0}")]
    Invalid(String),
}
