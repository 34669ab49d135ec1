pub mod assets;
pub mod version;
