pub(crate) mod api;
pub(crate) mod ipify;
pub(crate) mod opendns;
