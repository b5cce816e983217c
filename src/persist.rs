pub(crate) mod project;
pub(crate) mod recent;
pub(crate) mod store;
pub(crate) mod theme;
