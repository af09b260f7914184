//! API key resolution
//!
//! The key is resolved on every generation attempt, not captured at startup.

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 3] = ["HYPE_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Where the API key comes from
#[derive(Debug, Clone, Default)]
pub struct ApiKeySource {
    env_vars: Vec<String>,
    fallback: Option<String>,
}

impl ApiKeySource {
    /// Environment variables first, then the config file value
    pub fn new(env_vars: &[&str], fallback: Option<String>) -> Self {
        Self {
            env_vars: env_vars.iter().map(|v| v.to_string()).collect(),
            fallback,
        }
    }

    /// Standard lookup: [`API_KEY_ENV_VARS`] then `fallback`
    pub fn standard(fallback: Option<String>) -> Self {
        Self::new(&API_KEY_ENV_VARS, fallback)
    }

    /// Fixed key with no environment lookup
    #[cfg(test)]
    pub fn fixed(key: Option<&str>) -> Self {
        Self {
            env_vars: Vec::new(),
            fallback: key.map(str::to_string),
        }
    }

    /// Resolve the key now; blank values count as missing
    pub fn resolve(&self) -> Option<String> {
        self.env_vars
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .chain(self.fallback.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fallback_is_missing() {
        assert_eq!(ApiKeySource::fixed(Some("  ")).resolve(), None);
        assert_eq!(ApiKeySource::fixed(None).resolve(), None);
    }

    #[test]
    fn fixed_key_is_trimmed() {
        assert_eq!(
            ApiKeySource::fixed(Some(" abc \n")).resolve().as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn unset_env_var_falls_through_to_fallback() {
        let source = ApiKeySource::new(
            &["HYPE_TEST_VAR_THAT_IS_NEVER_SET_4711"],
            Some("from-file".to_string()),
        );
        assert_eq!(source.resolve().as_deref(), Some("from-file"));
    }
}
