//! Flood-risk scoring.
//!
//! A pure, additive model over four categorical factors. Each factor
//! contributes independently and unrecognized form values contribute
//! nothing, so scoring is total over arbitrary input and never fails.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    Low,
    Medium,
    High,
}

impl Elevation {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Elevation::Low),
            "medium" => Some(Elevation::Medium),
            "high" => Some(Elevation::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterProximity {
    VeryClose,
    Close,
    Far,
}

impl WaterProximity {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "very-close" => Some(WaterProximity::VeryClose),
            "close" => Some(WaterProximity::Close),
            "far" => Some(WaterProximity::Far),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drainage {
    Poor,
    Average,
    Good,
}

impl Drainage {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "poor" => Some(Drainage::Poor),
            "average" => Some(Drainage::Average),
            "good" => Some(Drainage::Good),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloodHistory {
    Frequent,
    Occasional,
    Never,
}

impl FloodHistory {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "frequent" => Some(FloodHistory::Frequent),
            "occasional" => Some(FloodHistory::Occasional),
            "never" => Some(FloodHistory::Never),
            _ => None,
        }
    }
}

/// Highest possible score (every factor at its worst value).
pub const MAX_SCORE: u8 = 12;

/// Parsed factor selections. `None` means the raw value was missing or not
/// one of the known options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskFactors {
    pub elevation: Option<Elevation>,
    pub water_proximity: Option<WaterProximity>,
    pub drainage: Option<Drainage>,
    pub flood_history: Option<FloodHistory>,
}

impl RiskFactors {
    /// Parse raw form values.
    pub fn from_values(
        elevation: &str,
        water_proximity: &str,
        drainage: &str,
        flood_history: &str,
    ) -> Self {
        Self {
            elevation: Elevation::from_value(elevation),
            water_proximity: WaterProximity::from_value(water_proximity),
            drainage: Drainage::from_value(drainage),
            flood_history: FloodHistory::from_value(flood_history),
        }
    }
}

/// Three-level classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Score >= 8 is high, 5..=7 medium, below 5 low.
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            RiskLevel::High
        } else if score >= 5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "low-risk",
            RiskLevel::Medium => "medium-risk",
            RiskLevel::High => "high-risk",
        }
    }

    /// CSS variable used to color the result heading.
    pub fn color_token(self) -> &'static str {
        match self {
            RiskLevel::Low => "var(--success)",
            RiskLevel::Medium => "var(--warning)",
            RiskLevel::High => "var(--danger)",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Immediate action recommended. Consider flood protection measures \
                 and stay alert to weather warnings."
            }
            RiskLevel::Medium => {
                "Monitor weather conditions closely and have an emergency plan ready."
            }
            RiskLevel::Low => {
                "Your area appears to be at lower risk, but staying prepared is still important."
            }
        }
    }
}

/// Outcome of scoring one set of factors.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    /// One bullet per factor sitting at its highest-risk value.
    pub key_factors: Vec<&'static str>,
}

/// Score a set of factor selections.
pub fn assess(factors: &RiskFactors) -> RiskAssessment {
    let mut score: u8 = 0;

    score += match factors.elevation {
        Some(Elevation::Low) => 3,
        Some(Elevation::Medium) => 2,
        _ => 0,
    };
    score += match factors.water_proximity {
        Some(WaterProximity::VeryClose) => 3,
        Some(WaterProximity::Close) => 2,
        _ => 0,
    };
    score += match factors.drainage {
        Some(Drainage::Poor) => 3,
        Some(Drainage::Average) => 1,
        _ => 0,
    };
    score += match factors.flood_history {
        Some(FloodHistory::Frequent) => 3,
        Some(FloodHistory::Occasional) => 2,
        _ => 0,
    };

    let mut key_factors = Vec::new();
    if factors.elevation == Some(Elevation::Low) {
        key_factors.push("Your area's low elevation increases flood risk");
    }
    if factors.water_proximity == Some(WaterProximity::VeryClose) {
        key_factors.push("Close proximity to water body is a significant risk factor");
    }
    if factors.drainage == Some(Drainage::Poor) {
        key_factors.push("Poor drainage system increases vulnerability");
    }
    if factors.flood_history == Some(FloodHistory::Frequent) {
        key_factors.push("History of frequent flooding indicates high risk");
    }

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        key_factors,
    }
}
