//! # Package Catalogue
//!
//! The fixed lesson bundles listed on the pricing page.
//!
//! These are a separate pricing scheme from [`crate::pricing`]: the bundle
//! prices are set by the business and intentionally not derived from the
//! per-hour calculator.
//!
//! ```text
//! ┌──────────────┬───────┬────────┐
//! │  Package     │ Hours │ Price  │
//! ├──────────────┼───────┼────────┤
//! │  Starter     │   2   │  £60   │
//! │  Standard ★  │  10   │  £300  │
//! │  Intensive   │  20   │  £570  │
//! └──────────────┴───────┴────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::LessonPackage;

/// Returns the fixed package price list, cheapest first.
pub fn standard_packages() -> Vec<LessonPackage> {
    vec![
        package(
            "Starter",
            2,
            60,
            &["2 hours of lessons", "Assessment drive", "Progress report"],
            false,
        ),
        package(
            "Standard",
            10,
            300,
            &[
                "10 hours of lessons",
                "Flexible scheduling",
                "Theory test tips",
                "Progress tracking",
            ],
            true,
        ),
        package(
            "Intensive",
            20,
            570,
            &[
                "20 hours of lessons",
                "Priority booking",
                "Mock driving test",
                "Test day car hire",
            ],
            false,
        ),
    ]
}

/// Looks up a package by name, ignoring case and surrounding whitespace.
///
/// ## Example
/// ```rust
/// use roadready_core::packages::find_package;
///
/// let package = find_package("standard").unwrap();
/// assert_eq!(package.hours, 10);
/// assert!(find_package("weekend").is_err());
/// ```
pub fn find_package(name: &str) -> CoreResult<LessonPackage> {
    let wanted = name.trim();
    standard_packages()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::PackageNotFound(wanted.to_string()))
}

fn package(
    name: &str,
    hours: u32,
    price_pounds: i64,
    features: &[&str],
    popular: bool,
) -> LessonPackage {
    LessonPackage {
        name: name.to_string(),
        hours,
        price: Money::from_pounds(price_pounds),
        features: features.iter().map(|f| f.to_string()).collect(),
        popular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_pricing, PricingInput};

    #[test]
    fn test_catalogue_prices() {
        let prices: Vec<(u32, i64)> = standard_packages()
            .iter()
            .map(|p| (p.hours, p.price.round_half_up()))
            .collect();
        assert_eq!(prices, vec![(2, 60), (10, 300), (20, 570)]);
    }

    #[test]
    fn test_exactly_one_popular_package() {
        let popular: Vec<_> = standard_packages().into_iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Standard");
    }

    #[test]
    fn test_find_package_is_case_insensitive() {
        assert_eq!(find_package("  INTENSIVE ").unwrap().hours, 20);
        assert!(matches!(
            find_package("Weekend"),
            Err(CoreError::PackageNotFound(name)) if name == "Weekend"
        ));
    }

    #[test]
    fn test_packages_independent_of_calculator() {
        // The 10-hour bundle and a 10-hour custom quote are priced differently
        let standard = find_package("Standard").unwrap();
        let custom = compute_pricing(PricingInput::new(standard.hours));
        assert_eq!(standard.price.round_half_up(), 300);
        assert_eq!(custom.total_price, 250);
    }
}
