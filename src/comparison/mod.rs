//! Comparison core: domain records, pure calculation services, and
//! resolution policies. Nothing in this module performs I/O.

pub mod domain;
pub mod policies;
pub mod services;
