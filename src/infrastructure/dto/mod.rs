//! Data transfer objects crossing the transport boundary.

pub mod http;
