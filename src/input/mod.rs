//! Document text extraction boundary

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::InputManager;
