mod csv_source;

#[cfg(not(target_arch = "wasm32"))]
mod file_io;

pub use csv_source::{RawTable, decode_csv_bytes, load_table, parse_csv};

#[cfg(not(target_arch = "wasm32"))]
pub use file_io::read_csv_file;
