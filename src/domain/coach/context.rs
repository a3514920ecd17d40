use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Number of life pillars a caller reports
pub const PILLAR_COUNT: usize = 5;

/// One life-pillar metric reported by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarStatus {
    pub name: String,
    /// Current score, 0-100
    pub value: f32,
    /// Target score, 0-100
    pub goal: f32,
}

/// The caller's current life-balance state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub pillars: Vec<PillarStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_pillar: Option<String>,
}

impl UserContext {
    /// Validate the context shape before any external call is made
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.pillars.len() != PILLAR_COUNT {
            return Err(DomainError::validation(format!(
                "context must contain exactly {} pillars, got {}",
                PILLAR_COUNT,
                self.pillars.len()
            )));
        }

        for pillar in &self.pillars {
            if pillar.name.trim().is_empty() {
                return Err(DomainError::validation("pillar name must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn five_pillars() -> Vec<PillarStatus> {
        ["Financial", "Health", "Relationships", "Growth", "Purpose"]
            .iter()
            .enumerate()
            .map(|(i, name)| PillarStatus {
                name: name.to_string(),
                value: 40.0 + 10.0 * i as f32,
                goal: 80.0,
            })
            .collect()
    }

    #[test]
    fn test_five_pillars_validate() {
        let context = UserContext {
            pillars: five_pillars(),
            overall_score: Some(60.0),
            lowest_pillar: Some("Financial".to_string()),
        };

        assert!(context.validate().is_ok());
    }

    #[test]
    fn test_wrong_pillar_count_is_rejected() {
        let mut pillars = five_pillars();
        pillars.pop();

        let context = UserContext {
            pillars,
            overall_score: None,
            lowest_pillar: None,
        };

        let err = context.validate().unwrap_err();
        assert!(err.to_string().contains("exactly 5 pillars"));
    }

    #[test]
    fn test_blank_pillar_name_is_rejected() {
        let mut pillars = five_pillars();
        pillars[2].name = "  ".to_string();

        let context = UserContext {
            pillars,
            overall_score: None,
            lowest_pillar: None,
        };

        assert!(context.validate().is_err());
    }

    #[test]
    fn test_camel_case_deserialization() {
        let json = r#"{
            "pillars": [
                {"name": "Financial", "value": 40, "goal": 80},
                {"name": "Health", "value": 50, "goal": 80},
                {"name": "Relationships", "value": 60, "goal": 80},
                {"name": "Growth", "value": 70, "goal": 80},
                {"name": "Purpose", "value": 80, "goal": 80}
            ],
            "overallScore": 60,
            "lowestPillar": "Financial"
        }"#;

        let context: UserContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.overall_score, Some(60.0));
        assert_eq!(context.lowest_pillar.as_deref(), Some("Financial"));
        assert!(context.validate().is_ok());
    }
}
