//! # Package Commands
//!
//! Lists the fixed-price lesson bundles, or shows one of them by name.

use std::io::Write;

use tracing::debug;

use roadready_core::packages::{find_package, standard_packages};
use roadready_core::LessonPackage;

use crate::error::CliError;
use crate::state::ConfigState;

/// Writes the package price list to `out`.
pub fn list_packages<W: Write>(
    config: &ConfigState,
    json: bool,
    out: &mut W,
) -> Result<Vec<LessonPackage>, CliError> {
    let packages = standard_packages();
    debug!(count = packages.len(), json, "packages command");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&packages)?)?;
        return Ok(packages);
    }

    for package in &packages {
        write_package(config, package, out)?;
    }
    writeln!(out, "* most popular")?;

    Ok(packages)
}

/// Writes a single package, looked up by name.
///
/// ## Errors
/// `NotFound` when no package has that name.
pub fn show_package<W: Write>(
    config: &ConfigState,
    name: &str,
    json: bool,
    out: &mut W,
) -> Result<LessonPackage, CliError> {
    debug!(name, json, "package lookup");
    let package = find_package(name)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&package)?)?;
    } else {
        write_package(config, &package, out)?;
    }

    Ok(package)
}

fn write_package<W: Write>(
    config: &ConfigState,
    package: &LessonPackage,
    out: &mut W,
) -> Result<(), CliError> {
    writeln!(
        out,
        "{:<10}{} {:>2} hours  {:>5}  ({}/hour)",
        package.name,
        if package.popular { "*" } else { " " },
        package.hours,
        config.format_currency(package.price.round_half_up()),
        package.price_per_hour(),
    )?;
    for feature in &package.features {
        writeln!(out, "    - {}", feature)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_packages_text() {
        let mut out = Vec::new();
        let packages = list_packages(&ConfigState::default(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(packages.len(), 3);
        assert!(text.contains("Starter      2 hours    £60  (£30.00/hour)"));
        assert!(text.contains("Standard  * 10 hours   £300  (£30.00/hour)"));
        assert!(text.contains("Intensive   20 hours   £570  (£28.50/hour)"));
        assert!(text.contains("    - Priority booking\n"));
    }

    #[test]
    fn test_list_packages_json() {
        let mut out = Vec::new();
        list_packages(&ConfigState::default(), true, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Starter", "Standard", "Intensive"]);
        assert_eq!(json[1]["popular"], true);
        assert_eq!(json[2]["price"], 57000);
    }

    #[test]
    fn test_show_package_by_name() {
        let mut out = Vec::new();
        let package = show_package(&ConfigState::default(), " INTENSIVE ", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(package.hours, 20);
        assert!(text.starts_with("Intensive   20 hours   £570  (£28.50/hour)\n"));
        assert!(!text.contains("Starter"));
        assert!(!text.contains("most popular"));
    }

    #[test]
    fn test_show_package_json() {
        let mut out = Vec::new();
        show_package(&ConfigState::default(), "standard", true, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["name"], "Standard");
        assert_eq!(json["price"], 30000);
    }

    #[test]
    fn test_show_unknown_package() {
        let mut out = Vec::new();
        let err = show_package(&ConfigState::default(), "Weekend", false, &mut out).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NotFound] Package not found: Weekend");
        assert!(out.is_empty());
    }
}
