//! Input handling: file loading for job descriptions and skill lists

pub mod file_detector;
pub mod manager;

pub use file_detector::FileType;
pub use manager::InputManager;
