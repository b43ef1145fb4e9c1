pub(crate) mod api;
pub(crate) mod dynv6;
