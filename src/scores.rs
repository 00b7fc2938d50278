//! Score records produced by the analyzer, plus the coarse polarity label
//! derived from the compound score.

use serde::{Deserialize, Serialize};

/// Half-width of the neutral band on the compound scale. Compounds within
/// `(-0.05, 0.05)` exclusive are classified as neutral.
pub const NEUTRAL_BAND: f64 = 0.05;

/// Sentiment proportions and compound score for a single text.
///
/// `neg`, `neu` and `pos` are shares of the total signal and sum to roughly
/// 1.0 (each is rounded to three decimals independently). `compound` is the
/// normalized overall valence in `[-1.0, 1.0]`, rounded to four decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Coarse three-way label using the conventional `±0.05` thresholds.
    pub fn polarity(&self) -> Polarity {
        if self.compound >= NEUTRAL_BAND {
            Polarity::Positive
        } else if self.compound <= -NEUTRAL_BAND {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_compound(compound: f64) -> SentimentScores {
        SentimentScores {
            compound,
            ..SentimentScores::default()
        }
    }

    #[test]
    fn polarity_thresholds_are_inclusive() {
        assert_eq!(with_compound(0.05).polarity(), Polarity::Positive);
        assert_eq!(with_compound(0.0499).polarity(), Polarity::Neutral);
        assert_eq!(with_compound(0.0).polarity(), Polarity::Neutral);
        assert_eq!(with_compound(-0.0499).polarity(), Polarity::Neutral);
        assert_eq!(with_compound(-0.05).polarity(), Polarity::Negative);
        assert_eq!(with_compound(-0.9).polarity(), Polarity::Negative);
    }

    #[test]
    fn default_record_is_neutral() {
        assert_eq!(SentimentScores::default().polarity(), Polarity::Neutral);
    }

    #[test]
    fn serializes_with_short_field_names() {
        let scores = SentimentScores {
            neg: 0.1,
            neu: 0.6,
            pos: 0.3,
            compound: 0.25,
        };
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["neg"], 0.1);
        assert_eq!(json["neu"], 0.6);
        assert_eq!(json["pos"], 0.3);
        assert_eq!(json["compound"], 0.25);
        assert_eq!(serde_json::to_value(Polarity::Negative).unwrap(), "negative");

        let back: SentimentScores = serde_json::from_value(json).unwrap();
        assert_eq!(back, scores);
    }
}
