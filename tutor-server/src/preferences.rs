//! Read-only source of users' learning preferences for the `Custom` persona.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use prompt::LearningPreferences;
use tracing::info;

#[async_trait]
pub trait PreferenceSource: Send + Sync {
    /// Stored preferences of `user_id`, or `None` when the user has none.
    async fn learning_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<LearningPreferences>, anyhow::Error>;
}

/// Preferences held in memory, optionally loaded from a JSON file of the form
/// `{"<user_id>": {"response_length": "short", ...}, ...}`.
#[derive(Debug, Clone, Default)]
pub struct StaticPreferences {
    by_user: HashMap<String, LearningPreferences>,
}

impl StaticPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<String>, prefs: LearningPreferences) -> Self {
        self.by_user.insert(user_id.into(), prefs);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, anyhow::Error> {
        let by_user: HashMap<String, LearningPreferences> =
            serde_json::from_str(json).context("preferences JSON is not a map of user id to preferences")?;
        Ok(Self { by_user })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading preferences file {}", path.display()))?;
        let prefs = Self::from_json_str(&json)?;
        info!(path = %path.display(), users = prefs.len(), "Loaded learning preferences");
        Ok(prefs)
    }

    pub fn len(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}

#[async_trait]
impl PreferenceSource for StaticPreferences {
    async fn learning_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<LearningPreferences>, anyhow::Error> {
        Ok(self.by_user.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt::ResponseLength;
    use std::io::Write;

    #[tokio::test]
    async fn test_lookup_by_user() {
        let prefs = StaticPreferences::new().with_user(
            "42",
            LearningPreferences {
                response_length: Some(ResponseLength::Short),
                ..Default::default()
            },
        );
        assert!(prefs.learning_preferences("42").await.unwrap().is_some());
        assert!(prefs.learning_preferences("7").await.unwrap().is_none());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"alice": {{"guidance_style": "real_world"}}, "bob": {{}}}}"#
        )
        .unwrap();

        let prefs = StaticPreferences::from_json_file(file.path()).unwrap();
        assert_eq!(prefs.len(), 2);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(StaticPreferences::from_json_str("[1, 2]").is_err());
        assert!(StaticPreferences::from_json_file("/nonexistent/prefs.json").is_err());
    }
}
