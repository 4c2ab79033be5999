/// Get the version string for imago and libimago
pub fn get_version_string() -> String {
    format!(
        "imago {}\nlibimago {}",
        env!("CARGO_PKG_VERSION"),
        libimago::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
