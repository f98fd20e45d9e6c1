use serde::{Deserialize, Serialize};

use crate::game::{Game, Rules};

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// rules:
///   strict: true
/// display:
///   colors: auto
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: Option<RulesConfig>,

    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Effective rules, strict unless the file says otherwise.
    pub fn rules(&self) -> Rules {
        self.rules.as_ref().map(Rules::from).unwrap_or_default()
    }

    /// Effective color setting (default: auto).
    pub fn colors(&self) -> ColorChoice {
        self.display
            .as_ref()
            .and_then(|d| d.colors)
            .unwrap_or_default()
    }

    /// Start an empty game under the configured rules.
    pub fn new_game(&self) -> Game {
        Game::with_rules(self.rules())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Reject impossible frames and unresolved scores (default: true)
    #[serde(default)]
    pub strict: Option<bool>,
}

impl From<&RulesConfig> for Rules {
    fn from(config: &RulesConfig) -> Self {
        match config.strict {
            Some(false) => Rules::lenient(),
            _ => Rules::strict(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub colors: Option<ColorChoice>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rules(), Rules::strict());
        assert_eq!(config.colors(), ColorChoice::Auto);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.rules.is_none());
        assert!(config.display.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
rules:
  strict: false
display:
  colors: never
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.rules(), Rules::lenient());
        assert_eq!(config.colors(), ColorChoice::Never);
        assert_eq!(config.new_game().rules(), Rules::lenient());
    }

    #[test]
    fn test_rules_without_strict_stay_strict() {
        let yaml = "rules: {}";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.rules(), Rules::strict());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
rules:
  strikt: true
"#;
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let yaml = r#"
display:
  colors: sometimes
"#;
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            rules: Some(RulesConfig { strict: Some(false) }),
            display: Some(DisplayConfig {
                colors: Some(ColorChoice::Always),
            }),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
