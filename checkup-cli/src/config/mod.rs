use std::time::Duration;

use envconfig::Envconfig;

/// Environment-supplied harness settings. Explicit CLI flags take
/// precedence over these.
#[derive(Envconfig, Debug, Clone)]
pub struct CheckupConfig {
    /// Base URL of the deployment under verification.
    #[envconfig(from = "CHECKUP_URL", default = "http://localhost:5000")]
    pub target_url: String,

    /// Per-probe deadline. Expiry counts as a transport failure.
    #[envconfig(from = "CHECKUP_TIMEOUT_SECS", default = "10")]
    pub timeout_secs: u64,
}

impl CheckupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_the_local_deployment() {
        let config = CheckupConfig::init_from_hashmap(&HashMap::new()).unwrap();
        assert_eq!(config.target_url, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut env = HashMap::new();
        env.insert(
            "CHECKUP_URL".to_string(),
            "https://staging.rently.dev".to_string(),
        );
        env.insert("CHECKUP_TIMEOUT_SECS".to_string(), "3".to_string());

        let config = CheckupConfig::init_from_hashmap(&env).unwrap();
        assert_eq!(config.target_url, "https://staging.rently.dev");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let mut env = HashMap::new();
        env.insert("CHECKUP_TIMEOUT_SECS".to_string(), "soon".to_string());
        assert!(CheckupConfig::init_from_hashmap(&env).is_err());
    }
}
