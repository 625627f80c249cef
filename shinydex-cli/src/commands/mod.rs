pub(crate) mod config;
pub(crate) mod games;
pub(crate) mod methods;
pub(crate) mod migrate;
pub(crate) mod odds;
