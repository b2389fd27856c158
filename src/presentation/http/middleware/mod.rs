pub mod action_filter;
pub mod rate_limit;
