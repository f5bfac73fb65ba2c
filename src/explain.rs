use crate::constants::{FITNESS_INVALID_DELTA, FITNESS_VALID_DELTA, JOBCARD_PENALTY};
use crate::models::{format_fixed, format_number, BrandingTier, TrainRecord};

/// Value column of one explanation row
#[derive(Debug, Clone, PartialEq)]
pub enum FactorValue {
    /// Signed delta, always printed with its sign
    SignedDelta(i64),
    /// Delta printed as a plain integer
    Delta(i64),
    /// Plain number
    Number(f64),
    /// Categorical label
    Label(BrandingTier),
}

impl std::fmt::Display for FactorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignedDelta(delta) => write!(f, "{delta:+}"),
            Self::Delta(delta) => write!(f, "{delta}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Label(tier) => f.write_str(tier.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub label: &'static str,
    pub value: FactorValue,
}

/// Why a train sits where it does in the ranking
///
/// These are fixed display figures; they are not a decomposition of
/// `priority_score` and need not add up to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub train_name: String,
    pub score: f64,
    pub factors: Vec<Factor>,
}

impl Explanation {
    #[must_use]
    pub fn for_train(train: &TrainRecord) -> Self {
        let fitness = if train.fitness_valid {
            FITNESS_VALID_DELTA
        } else {
            FITNESS_INVALID_DELTA
        };

        Self {
            train_name: train.name.clone(),
            score: train.priority_score,
            factors: vec![
                Factor {
                    label: "Fitness valid",
                    value: FactorValue::SignedDelta(fitness),
                },
                Factor {
                    label: "Jobcards open",
                    value: FactorValue::Delta(JOBCARD_PENALTY * i64::from(train.jobcards_open)),
                },
                Factor {
                    label: "Branding priority",
                    value: FactorValue::Label(train.branding_priority),
                },
                Factor {
                    label: "Cleaning score",
                    value: FactorValue::Number(train.cleaning_score),
                },
            ],
        }
    }

    /// Panel heading, e.g. `Why 7 scored 81.5`
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Why {} scored {}", self.train_name, format_fixed(self.score, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTrainRow;
    use serde_json::json;

    fn train(value: serde_json::Value) -> TrainRecord {
        let row: RawTrainRow = serde_json::from_value(value).expect("valid row");
        TrainRecord::from_raw(&row, 0)
    }

    fn rendered(explanation: &Explanation) -> Vec<(String, String)> {
        explanation
            .factors
            .iter()
            .map(|f| (f.label.to_string(), f.value.to_string()))
            .collect()
    }

    #[test]
    fn test_invalid_fitness_shows_minus_eighty() {
        let explanation = Explanation::for_train(&train(json!({
            "Trainset": 4,
            "Rolling_Cert": 1,
            "Signal_Cert": 0,
            "Telecom_Cert": 1
        })));
        assert_eq!(explanation.factors[0].value.to_string(), "-80");
    }

    #[test]
    fn test_all_rows_rendered() {
        let explanation = Explanation::for_train(&train(json!({
            "Trainset": 11,
            "Rolling_Cert": 1,
            "Signal_Cert": 1,
            "Telecom_Cert": 1,
            "Job_Card_Open": 3,
            "Branding_Priority": 18,
            "Cleaning_Status": 0.75,
            "Priority_Score": 72.24
        })));

        assert_eq!(
            rendered(&explanation),
            vec![
                ("Fitness valid".to_string(), "+45".to_string()),
                ("Jobcards open".to_string(), "-24".to_string()),
                ("Branding priority".to_string(), "Critical".to_string()),
                ("Cleaning score".to_string(), "37.5".to_string()),
            ]
        );
        assert_eq!(explanation.heading(), "Why 11 scored 72.2");
    }

    #[test]
    fn test_heading_rounds_half_up() {
        let explanation = Explanation::for_train(&train(json!({"Trainset": 7, "Priority_Score": 72.25})));
        assert_eq!(explanation.heading(), "Why 7 scored 72.3");

        let explanation = Explanation::for_train(&train(json!({"Trainset": 8, "Priority_Score": 0.15})));
        assert_eq!(explanation.heading(), "Why 8 scored 0.1");
    }

    #[test]
    fn test_zero_jobcards_shows_zero() {
        let explanation = Explanation::for_train(&train(json!({"Trainset": 1})));
        assert_eq!(explanation.factors[1].value.to_string(), "0");
    }

    #[test]
    fn test_explanation_does_not_recompute_score() {
        let record = train(json!({"Trainset": 1, "Priority_Score": 3}));
        let explanation = Explanation::for_train(&record);
        assert_eq!(explanation.score, 3.0);
    }
}
