//! 配置校验模块
//!
//! 规则（遇到第一个错误即返回）：
//! - 至少一条 route
//! - route 名称非空且唯一
//! - adapter 必须是 `logstash`
//! - address 为 `host:port`，端口为数字
//! - queue_capacity > 0，buffer_size > 0

use std::collections::HashSet;

use contracts::{AdapterBlueprint, ContractError, RouteConfig, LOGSTASH_ADAPTER};

/// Validate an AdapterBlueprint
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(blueprint: &AdapterBlueprint) -> Result<(), ContractError> {
    validate_pipeline(blueprint)?;
    validate_route_names(blueprint)?;
    for (idx, route) in blueprint.routes.iter().enumerate() {
        validate_route(idx, route)?;
    }
    Ok(())
}

fn validate_pipeline(blueprint: &AdapterBlueprint) -> Result<(), ContractError> {
    if blueprint.pipeline.buffer_size == 0 {
        return Err(ContractError::config_validation(
            "pipeline.buffer_size",
            "buffer_size must be > 0",
        ));
    }
    Ok(())
}

fn validate_route_names(blueprint: &AdapterBlueprint) -> Result<(), ContractError> {
    if blueprint.routes.is_empty() {
        return Err(ContractError::config_validation(
            "routes",
            "at least one route is required",
        ));
    }

    let mut seen = HashSet::new();
    for (idx, route) in blueprint.routes.iter().enumerate() {
        if route.name.is_empty() {
            return Err(ContractError::config_validation(
                format!("routes[{}].name", idx),
                "route name cannot be empty",
            ));
        }
        if !seen.insert(&route.name) {
            return Err(ContractError::config_validation(
                format!("routes[name={}]", route.name),
                "duplicate route name",
            ));
        }
    }
    Ok(())
}

/// Validate a single route
pub fn validate_route(idx: usize, route: &RouteConfig) -> Result<(), ContractError> {
    if route.adapter != LOGSTASH_ADAPTER {
        return Err(ContractError::config_validation(
            format!("routes[{}].adapter", idx),
            format!("unsupported adapter '{}'", route.adapter),
        ));
    }

    validate_address(&route.address)
        .map_err(|e| ContractError::config_validation(format!("routes[{}].address", idx), e))?;

    if route.queue_capacity == 0 {
        return Err(ContractError::config_validation(
            format!("routes[{}].queue_capacity", idx),
            "queue_capacity must be > 0",
        ));
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), String> {
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| format!("address '{}' must be host:port", address))?;

    if host.is_empty() {
        return Err(format!("address '{}' has an empty host", address));
    }
    port.parse::<u16>()
        .map_err(|_| format!("address '{}' has an invalid port", address))?;
    Ok(())
}
