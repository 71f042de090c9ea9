use std::any::type_name;

use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to write {} as YAML: {}", short_type_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to read {} from YAML: {}", short_type_name::<TConfig>(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Window {
        width: u32,
    }

    #[test]
    fn test_error_names_the_config_type() {
        let result: Result<Window, String> = YamlConfigSerializer::new().deserialize("width: wide\n");
        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to read Window from YAML"));
    }

    #[test]
    fn test_reads_plain_yaml() {
        let window: Window = YamlConfigSerializer::new().deserialize("width: 640\n").unwrap();
        assert_eq!(window, Window { width: 640 });
    }
}
