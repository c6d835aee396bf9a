//! Risk-assessment form handling and result rendering.

use crate::helpers::escape_html;
use crate::services::risk::{assess, RiskAssessment, RiskFactors, MAX_SCORE};
use crate::ui::PageSurface;

const RISK_RESULT: &str = "riskResult";

/// Raw values read from the risk form.
#[derive(Debug, Clone, Default)]
pub struct RiskFormInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Hidden fields filled by the location picker.
    pub latitude: String,
    pub longitude: String,
    pub elevation: String,
    pub water_distance: String,
    pub drainage: String,
    pub history: String,
    pub notes: String,
}

/// Address and coordinate metadata captured with an assessment.
///
/// Informational only: the scoring formula never reads it.
/// TODO: derive elevation/water-proximity defaults from the selected
/// coordinates via an elevation/hydrology data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationMetadata {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationMetadata {
    fn from_input(input: &RiskFormInput) -> Self {
        Self {
            street: input.street.trim().to_string(),
            city: input.city.trim().to_string(),
            state: input.state.trim().to_string(),
            country: input.country.trim().to_string(),
            latitude: input.latitude.trim().parse().ok(),
            longitude: input.longitude.trim().parse().ok(),
        }
    }
}

/// A completed assessment: the score plus the metadata that came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    pub assessment: RiskAssessment,
    pub location: LocationMetadata,
    pub notes: String,
}

/// The risk-assessment form component.
#[derive(Debug, Default)]
pub struct RiskForm;

impl RiskForm {
    pub fn new() -> Self {
        Self
    }

    /// Submit handler: scores the factors and renders the result block.
    pub fn submit(&self, input: &RiskFormInput, page: &mut impl PageSurface) -> RiskReport {
        let factors = RiskFactors::from_values(
            &input.elevation,
            &input.water_distance,
            &input.drainage,
            &input.history,
        );
        let assessment = assess(&factors);
        let notes = input.notes.trim().to_string();

        page.set_class(
            RISK_RESULT,
            &format!("risk-result {}", assessment.level.css_class()),
        );
        page.set_content(RISK_RESULT, &render_assessment(&assessment, &notes));
        page.reveal(RISK_RESULT);

        RiskReport {
            assessment,
            location: LocationMetadata::from_input(input),
            notes,
        }
    }
}

/// Result block markup: heading, score, key factors, notes, advice.
pub fn render_assessment(assessment: &RiskAssessment, notes: &str) -> String {
    let mut out = format!(
        "<h3 style=\"color: {color}; margin-top: 0;\">{label}</h3>\
         <p><strong>Risk Assessment Score:</strong> {score}/{max}</p>\
         <p><strong>Key Factors:</strong></p><ul>",
        color = assessment.level.color_token(),
        label = assessment.level.label(),
        score = assessment.score,
        max = MAX_SCORE,
    );

    for factor in &assessment.key_factors {
        out.push_str(&format!("<li>{}</li>", factor));
    }
    out.push_str("</ul>");

    if !notes.is_empty() {
        out.push_str(&format!(
            "<p><strong>Additional Notes:</strong> {}</p>",
            escape_html(notes)
        ));
    }

    out.push_str(&format!(
        "<p class=\"risk-advice\">{}</p>",
        assessment.level.advice()
    ));
    out
}
