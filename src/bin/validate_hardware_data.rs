//! Validate the consolidated hardware catalog; exits non-zero when any error is found.
//! Run: cargo run --bin validate_hardware_data

fn main() {
    std::process::exit(hwcatalog::cli::run_validate(std::path::Path::new(".")));
}
