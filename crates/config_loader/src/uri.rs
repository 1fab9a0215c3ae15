//! Route URI parsing
//!
//! Format: `adapter[+transport]://host:port`, transport defaults to udp.
//! Query options (`?key=value`) are not supported.

use contracts::{ContractError, RouteConfig, TransportKind};

use crate::validator::validate_route;

/// Parse a route URI into a validated RouteConfig
pub fn parse_route_uri(name: impl Into<String>, uri: &str) -> Result<RouteConfig, ContractError> {
    let (scheme, address) = uri
        .split_once("://")
        .ok_or_else(|| ContractError::config_parse(format!("route '{uri}' is missing '://'")))?;

    let (adapter, transport) = match scheme.split_once('+') {
        Some((adapter, transport)) => {
            let kind = TransportKind::from_name(transport).ok_or_else(|| {
                ContractError::config_parse(format!("unknown transport '{transport}' in '{uri}'"))
            })?;
            (adapter, kind)
        }
        None => (scheme, TransportKind::default()),
    };

    if address.contains('?') {
        return Err(ContractError::config_parse(format!(
            "route '{uri}' has query options, which are not supported"
        )));
    }

    let mut route = RouteConfig::new(name, transport, address.trim_end_matches('/'));
    route.adapter = adapter.to_string();

    validate_route(0, &route)?;
    Ok(route)
}
