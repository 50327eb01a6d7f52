pub mod google_maps;
pub mod json_file;
