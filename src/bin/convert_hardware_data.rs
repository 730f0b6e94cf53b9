//! Convert the vendor workbook into data/*.csv tables and data/hardware_specs.json.
//! Run from the directory holding hardware_platforms.xlsx: cargo run --bin convert_hardware_data

fn main() {
    std::process::exit(hwcatalog::cli::run_convert(std::path::Path::new(".")));
}
