//! # Config Loader
//!
//! 配置加载模块：将 TOML/JSON 文件与 route URI 转换为经过校验的 `AdapterBlueprint`。
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let blueprint = ConfigLoader::load_from_path(Path::new("rancher-logstash.toml")).unwrap();
//! for route in &blueprint.routes {
//!     println!("{} -> {}", route.name, route.uri());
//! }
//! ```

mod parser;
mod uri;
mod validator;

pub use contracts::AdapterBlueprint;
pub use parser::ConfigFormat;
pub use uri::parse_route_uri;

use contracts::ContractError;
use std::path::Path;

/// Entry point for reading route configuration
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read, parse and validate a `.toml` or `.json` file
    pub fn load_from_path(path: &Path) -> Result<AdapterBlueprint, ContractError> {
        let blueprint = Self::parse_from_path(path)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Parse a config file without validating it
    ///
    /// Used when more routes are merged in before [`ConfigLoader::validate`].
    pub fn parse_from_path(path: &Path) -> Result<AdapterBlueprint, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        parser::parse(&content, format)
    }

    /// Parse and validate config text
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<AdapterBlueprint, ContractError> {
        let blueprint = parser::parse(content, format)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Validate a blueprint assembled outside of a config file
    pub fn validate(blueprint: &AdapterBlueprint) -> Result<(), ContractError> {
        validator::validate(blueprint)
    }

    /// Serialize AdapterBlueprint to TOML string
    pub fn to_toml(blueprint: &AdapterBlueprint) -> Result<String, ContractError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize AdapterBlueprint to JSON string
    pub fn to_json(blueprint: &AdapterBlueprint) -> Result<String, ContractError> {
        serde_json::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
