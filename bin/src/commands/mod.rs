//! CLI command implementations.

pub(crate) mod fetch;
pub(crate) mod forecast;
pub(crate) mod view;
