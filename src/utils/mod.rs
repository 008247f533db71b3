pub mod clock;
pub mod file_size;
