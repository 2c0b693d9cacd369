pub mod loader;
pub mod luma;
pub mod resize;
