pub mod image_file_reader;
pub mod tiff_file_writer;
