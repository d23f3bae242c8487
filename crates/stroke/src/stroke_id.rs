use serde::Serialize;
use std::fmt;

/// Unique identifier for a stroke.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StrokeId(uuid::Uuid);

impl StrokeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrokeId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}
