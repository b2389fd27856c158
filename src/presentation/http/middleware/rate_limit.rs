// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitConfig;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client-IP limiter. `None` when the configuration is rejected by the
/// builder (zero rate or burst).
pub fn rate_limit_layer(
    config: RateLimitConfig,
) -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(config.per_second);
    builder.burst_size(config.burst);
    let governor = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(governor))
}
