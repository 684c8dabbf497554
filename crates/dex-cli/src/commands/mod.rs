//! CLI command implementations

pub(crate) mod common;
pub(crate) mod load;
pub(crate) mod ls;
pub(crate) mod serve;
pub(crate) mod status;
