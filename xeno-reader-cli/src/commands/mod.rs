pub(crate) mod cat;
pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod info;
pub(crate) mod tree;
