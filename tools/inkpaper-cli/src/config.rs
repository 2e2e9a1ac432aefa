//! CLI configuration.

use anyhow::{Context, Result};
use inkpaper_advisor::gemini::{
    GeminiConfig, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use inkpaper_commerce::cart::ShippingPolicy;
use inkpaper_commerce::Money;
use serde::{Deserialize, Serialize};

/// Config file names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["inkpaper.toml", ".inkpaper.toml", "inkpaper.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity and catalog source.
    #[serde(default)]
    pub store: StoreSection,

    /// Shipping charges.
    #[serde(default)]
    pub shipping: ShippingSection,

    /// Stationery advisor.
    #[serde(default)]
    pub advisor: AdvisorSection,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::new(
            Money::new(self.shipping.free_threshold),
            Money::new(self.shipping.flat_rate),
        )
    }

    /// Gemini settings, with the API key read from the configured variable.
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig::default()
            .with_endpoint(&self.advisor.endpoint)
            .with_model(&self.advisor.model)
            .with_temperature(self.advisor.temperature)
            .with_api_key_from_env(&self.advisor.api_key_env)
    }
}

/// Store identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Store name shown in headers and given to the advisor.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Catalog JSON file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_store_name() -> String {
    "Ink & Paper".to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog: None,
        }
    }
}

/// Shipping charges, in whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingSection {
    /// Orders above this subtotal ship free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold: u64,

    /// Charge for everything else.
    #[serde(default = "default_flat_rate")]
    pub flat_rate: u64,
}

fn default_free_threshold() -> u64 {
    999
}

fn default_flat_rate() -> u64 {
    99
}

impl Default for ShippingSection {
    fn default() -> Self {
        Self {
            free_threshold: default_free_threshold(),
            flat_rate: default_flat_rate(),
        }
    }
}

/// Advisor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorSection {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_assistant_name() -> String {
    "Penelope".to_string()
}

impl Default for AdvisorSection {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            assistant_name: default_assistant_name(),
        }
    }
}

/// Generate a default inkpaper.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Ink & Paper storefront configuration

[store]
name = "Ink & Paper"
# catalog = "catalog.json"

[shipping]
# Orders above this subtotal ship free
free_threshold = 999
flat_rate = 99

[advisor]
assistant_name = "Penelope"
model = "{model}"
temperature = {temperature}
endpoint = "{endpoint}"
api_key_env = "{key_env}"
"#,
        model = DEFAULT_MODEL,
        temperature = DEFAULT_TEMPERATURE,
        endpoint = DEFAULT_ENDPOINT,
        key_env = DEFAULT_API_KEY_ENV,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: StoreConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, StoreConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: StoreConfig = toml::from_str(
            r#"
[shipping]
free_threshold = 1499

[advisor]
assistant_name = "Quill"
"#,
        )
        .unwrap();

        assert_eq!(parsed.store.name, "Ink & Paper");
        assert_eq!(parsed.shipping.flat_rate, 99);
        assert_eq!(parsed.advisor.assistant_name, "Quill");
        assert_eq!(parsed.advisor.model, DEFAULT_MODEL);

        let policy = parsed.shipping_policy();
        assert_eq!(policy.shipping_for(Money::new(1499)), Money::new(99));
        assert_eq!(policy.shipping_for(Money::new(1500)), Money::zero());
    }

    #[test]
    fn test_json_config() {
        let parsed: StoreConfig =
            serde_json::from_str(r#"{"store": {"catalog": "extra.json"}}"#).unwrap();
        assert_eq!(parsed.store.catalog.as_deref(), Some("extra.json"));
        assert_eq!(parsed.shipping, ShippingSection::default());
    }
}
