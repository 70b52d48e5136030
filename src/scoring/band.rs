/// Qualitative reading of a total score out of 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpretationBand {
    Excellent,
    Good,
    Moderate,
    BelowAverage,
    Low,
}

impl InterpretationBand {
    /// Every band, highest threshold first. Selection walks this order.
    pub const DESCENDING: [InterpretationBand; 5] = [
        InterpretationBand::Excellent,
        InterpretationBand::Good,
        InterpretationBand::Moderate,
        InterpretationBand::BelowAverage,
        InterpretationBand::Low,
    ];

    /// Lowest total (inclusive) that falls into this band
    pub fn min_score(self) -> u32 {
        match self {
            InterpretationBand::Excellent => 80,
            InterpretationBand::Good => 70,
            InterpretationBand::Moderate => 60,
            InterpretationBand::BelowAverage => 50,
            InterpretationBand::Low => 0,
        }
    }

    /// Pick the band for a total; the first (highest) matching threshold wins.
    pub fn for_score(total: u32) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|band| total >= band.min_score())
            .unwrap_or(InterpretationBand::Low)
    }

    pub fn label(self) -> &'static str {
        match self {
            InterpretationBand::Excellent => "excellent",
            InterpretationBand::Good => "good",
            InterpretationBand::Moderate => "moderate",
            InterpretationBand::BelowAverage => "below average",
            InterpretationBand::Low => "low",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            InterpretationBand::Excellent => {
                "🔥 Excellent! This idea scores very highly - strong candidate for your next project!"
            }
            InterpretationBand::Good => {
                "✅ Good score! This idea has strong potential and is worth pursuing."
            }
            InterpretationBand::Moderate => {
                "🤔 Moderate score. Consider if you can improve weak areas or if passion overrides concerns."
            }
            InterpretationBand::BelowAverage => {
                "⚠️  Below average score. Might be worth reconsidering or significantly refining this idea."
            }
            InterpretationBand::Low => {
                "🛑 Low score. This idea may not be the best use of your limited time right now."
            }
        }
    }
}
