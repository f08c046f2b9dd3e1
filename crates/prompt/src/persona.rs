//! Chat personas and their system instructions.

use crate::preferences::LearningPreferences;

/// Instruction used for unknown persona labels.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant. If the user's request seems vague, reference their last message or your most recent answer.";

const TUTOR_MESSAGE: &str = "Provide structured, step-by-step explanations in full sentences without using special characters like newlines, bullet points, or bold text. Keep explanations concise, ensuring readability in a continuous paragraph format. Encourage follow-up questions for further elaboration.";

const MENTOR_MESSAGE: &str = "Combine concise answers with practical steps and or real-life examples where applicable. Maintain a balance between elaboration and clarity. Ensure responses are in full sentences without using special characters like newlines, bullet points, or bold text.";

const CO_LEARNER_MESSAGE: &str = "Provide quick, digestible answers that summarize key points without excessive detail. Your tone should be friendly, casual, and straight to the point. Provide quick definitions describing only the most important facts. Ensure responses are in full sentences without using special characters like newlines, bullet points, or bold text.";

/// Bot persona selected by the client (`botType`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Persona {
    #[default]
    Tutor,
    Mentor,
    CoLearner,
    /// Instruction generated from the user's stored learning preferences.
    Custom,
    /// Any label without a dedicated instruction.
    Other(String),
}

impl Persona {
    /// Parses a client label. Labels are case-sensitive, as the web client sends them.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Tutor" => Persona::Tutor,
            "Mentor" => Persona::Mentor,
            "Co-Learner" => Persona::CoLearner,
            "Custom" => Persona::Custom,
            other => Persona::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Persona::Tutor => "Tutor",
            Persona::Mentor => "Mentor",
            Persona::CoLearner => "Co-Learner",
            Persona::Custom => "Custom",
            Persona::Other(label) => label,
        }
    }

    /// True when the system message depends on the user's preferences.
    pub fn needs_preferences(&self) -> bool {
        matches!(self, Persona::Custom)
    }
}

/// System instruction for `persona`. `preferences` is only read for [`Persona::Custom`].
pub fn system_message_for(persona: &Persona, preferences: Option<&LearningPreferences>) -> String {
    match persona {
        Persona::Tutor => TUTOR_MESSAGE.to_string(),
        Persona::Mentor => MENTOR_MESSAGE.to_string(),
        Persona::CoLearner => CO_LEARNER_MESSAGE.to_string(),
        Persona::Custom => LearningPreferences::instruction_for(preferences),
        Persona::Other(_) => DEFAULT_SYSTEM_MESSAGE.to_string(),
    }
}
