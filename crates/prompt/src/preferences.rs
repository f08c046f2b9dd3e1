//! Learning preferences and the personalized instruction built from them.

use serde::{Deserialize, Serialize};

/// Instruction used when the user has no stored preferences.
pub const NO_PREFERENCES_MESSAGE: &str = "You are a helpful learning assistant.";

const PERSONALIZED_BASE: &str = "You are a personalized tutor. Ensure responses are in paragraph format with full sentences. Format responses without using special characters like newlines, bullet points, or bold text.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseLength {
    Short,
    Long,
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceStyle {
    StepByStep,
    RealWorld,
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFocus {
    Process,
    Direct,
    #[serde(other)]
    Unspecified,
}

/// A user's stored learning preferences. Every field is optional; unknown
/// values deserialize as `Unspecified` and add nothing to the instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_length: Option<ResponseLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance_style: Option<GuidanceStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_focus: Option<ValueFocus>,
}

impl LearningPreferences {
    /// True when no preference field is set.
    pub fn is_empty(&self) -> bool {
        self.response_length.is_none() && self.guidance_style.is_none() && self.value_focus.is_none()
    }

    /// Builds the personalized-tutor instruction. Missing preferences, or a
    /// record with no field set, give [`NO_PREFERENCES_MESSAGE`]. A field set to
    /// an unknown value still selects the personalized base sentence.
    pub fn instruction_for(preferences: Option<&LearningPreferences>) -> String {
        match preferences {
            Some(prefs) if !prefs.is_empty() => prefs.instruction(),
            _ => NO_PREFERENCES_MESSAGE.to_string(),
        }
    }

    fn instruction(&self) -> String {
        let mut parts = vec![PERSONALIZED_BASE];

        match self.response_length {
            Some(ResponseLength::Short) => parts.push("Keep your answers short and concise."),
            Some(ResponseLength::Long) => parts.push("Provide detailed explanations."),
            _ => {}
        }
        match self.guidance_style {
            Some(GuidanceStyle::StepByStep) => {
                parts.push("Explain concepts using step-by-step guidance.")
            }
            Some(GuidanceStyle::RealWorld) => {
                parts.push("Use real-world examples to make concepts relatable.")
            }
            _ => {}
        }
        match self.value_focus {
            Some(ValueFocus::Process) => {
                parts.push("Focus on helping the user understand the learning process.")
            }
            Some(ValueFocus::Direct) => parts.push("Focus on delivering direct, actionable answers."),
            _ => {}
        }

        parts.join(" ")
    }
}
