//! Dataset ingestion from the project's CSV sources

mod csv_converter;

pub use csv_converter::{clean_number, to_json_pretty, ConvertOptions, CsvConverter};
