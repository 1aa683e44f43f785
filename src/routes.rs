pub mod fallback;
pub mod root;
