use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::ShimError, types::MarshalCategory, utils::quote};

/// Names the generated code refers to, and the builtin category seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimConfig {
    pub base_class:      String,
    pub global_dispatch: String,
    pub method_dispatch: String,
    pub binary_type:     String,
    pub transfer_type:   String,
    pub skip:            Vec<String>,
    /// Extra `type name -> category tag` seeds.
    pub builtins:        BTreeMap<String, String>,
    pub indent:          String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        ShimConfig {
            base_class:      "RemoteObj".to_string(),
            global_dispatch: "workerCall".to_string(),
            method_dispatch: "this.callMethod".to_string(),
            binary_type:     "Uint8Array".to_string(),
            transfer_type:   "ArrayBuffer".to_string(),
            skip:            vec!["free".to_string()],
            builtins:        BTreeMap::new(),
            indent:          "  ".to_string(),
        }
    }
}

impl ShimConfig {
    pub fn from_json(text: &str) -> Result<Self, ShimError> {
        let config: ShimConfig =
            serde_json::from_str(text).map_err(|e| ShimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ShimError> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShimError> {
        let required = [
            ("base_class", &self.base_class),
            ("global_dispatch", &self.global_dispatch),
            ("method_dispatch", &self.method_dispatch),
            ("binary_type", &self.binary_type),
            ("transfer_type", &self.transfer_type),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ShimError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        for (type_name, tag) in &self.builtins {
            if MarshalCategory::from_tag(tag).is_none() {
                return Err(ShimError::InvalidConfig(format!(
                    "Unknown category {} for builtin type {}",
                    quote(tag),
                    quote(type_name)
                )));
            }
        }

        Ok(())
    }

    /// Builtin seeds in registration order: the binary type first, then
    /// the configured extras.
    pub fn builtin_categories(&self) -> Vec<(String, MarshalCategory)> {
        let mut seeds = vec![(self.binary_type.clone(), MarshalCategory::Binary)];
        for (type_name, tag) in &self.builtins {
            if let Some(category) = MarshalCategory::from_tag(tag) {
                seeds.push((type_name.clone(), category));
            }
        }
        seeds
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip.iter().any(|s| s == name)
    }
}
