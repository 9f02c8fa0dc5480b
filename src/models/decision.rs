// Classifier output delivered by the "Think" stage

use serde::{Deserialize, Serialize};

/// Exercise state classified from the tracked joint angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Flexion,
    Extension,
    Unknown,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Flexion => "flexion",
            Decision::Extension => "extension",
            Decision::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_as_str() {
        assert_eq!(Decision::Flexion.as_str(), "flexion");
        assert_eq!(Decision::Extension.as_str(), "extension");
        assert_eq!(Decision::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&Decision::Flexion).unwrap();
        assert_eq!(json, "\"flexion\"");
        let back: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Decision::Flexion);
    }
}
