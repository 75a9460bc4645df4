pub(crate) mod emit;
pub(crate) mod inject;
