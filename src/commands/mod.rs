pub mod generate;
pub mod ico;
pub mod png_set;
