mod file_mover;
mod path_validator;
mod video_scanner;

pub use file_mover::move_file;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use video_scanner::{VideoFile, scan_video_files};
