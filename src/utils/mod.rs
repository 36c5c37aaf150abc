pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{default_store_path, get_data_dir};
pub use paths::{MAX_IMPORT_FILE_BYTES, format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_cell;
pub use timestamps::{format_age, format_upload_date};
