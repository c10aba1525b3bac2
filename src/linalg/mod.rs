pub(crate) mod lu;

pub use lu::LuDecomposition;
