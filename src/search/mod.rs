use crate::models::{Property, PropertyType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive date-added window. Both bounds are required by construction,
/// so a half-open window can never be expressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Search criteria for filtering the catalogue
///
/// Every bound is an explicit `Option`: `None` means "no constraint on this
/// dimension" and `Some(0)` is a real bound, so there is no sentinel value
/// competing with legitimate data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Restrict to houses or flats
    pub property_type: Option<PropertyType>,
    /// Minimum price (GBP, whole pounds)
    pub min_price: Option<i64>,
    /// Maximum price (GBP, whole pounds)
    pub max_price: Option<i64>,
    /// Minimum number of bedrooms
    pub min_bedrooms: Option<u32>,
    /// Maximum number of bedrooms
    pub max_bedrooms: Option<u32>,
    /// Listed on or after this date
    pub added_after: Option<NaiveDate>,
    /// Listed within this window (inclusive on both ends)
    pub added_between: Option<DateRange>,
    /// Postcode area prefix, matched case-insensitively (e.g. "SE13", "br1")
    pub postcode_area: Option<String>,
}

impl SearchCriteria {
    /// True when no filter is active, i.e. a search would return everything
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.max_bedrooms.is_none()
            && self.added_after.is_none()
            && self.added_between.is_none()
            && !self.has_postcode_filter()
    }

    // A blank or whitespace-only area is treated as no filter.
    fn has_postcode_filter(&self) -> bool {
        self.postcode_area
            .as_deref()
            .is_some_and(|area| !area.trim().is_empty())
    }

    fn matches(&self, property: &Property) -> bool {
        if let Some(wanted) = self.property_type {
            if property.property_type != wanted {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }

        if let Some(min) = self.min_bedrooms {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(max) = self.max_bedrooms {
            if property.bedrooms > max {
                return false;
            }
        }

        // "added after" includes the boundary date itself
        if let Some(after) = self.added_after {
            if property.date_added < after {
                return false;
            }
        }
        if let Some(range) = self.added_between {
            if property.date_added < range.start || property.date_added > range.end {
                return false;
            }
        }

        if let Some(area) = self.postcode_area.as_deref() {
            let area = area.trim();
            if !area.is_empty()
                && !property
                    .postcode
                    .to_uppercase()
                    .starts_with(&area.to_uppercase())
            {
                return false;
            }
        }

        true
    }
}

/// Filter a catalogue against the given criteria
///
/// All active criteria must hold at once (strict AND). The result keeps the
/// input order and never fails: contradictory bounds simply match nothing.
pub fn search<'a>(properties: &'a [Property], criteria: &SearchCriteria) -> Vec<&'a Property> {
    let results: Vec<&Property> = properties
        .iter()
        .filter(|property| criteria.matches(property))
        .collect();

    debug!(
        "Search matched {} of {} properties",
        results.len(),
        properties.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn listing(
        id: &str,
        property_type: PropertyType,
        price: i64,
        bedrooms: u32,
        added: NaiveDate,
        postcode: &str,
    ) -> Property {
        Property {
            id: id.to_string(),
            property_type,
            price,
            bedrooms,
            date_added: added,
            postcode: postcode.to_string(),
            location: String::new(),
            description: String::new(),
            images: vec![],
            latitude: None,
            longitude: None,
        }
    }

    fn sample() -> Vec<Property> {
        vec![
            listing("prop1", PropertyType::House, 850_000, 5, date(2024, 11, 28), "SW1A 1AA"),
            listing("prop2", PropertyType::Flat, 325_000, 2, date(2024, 12, 5), "SE13 6LL"),
            listing("prop3", PropertyType::House, 450_000, 3, date(2024, 10, 12), "BR1 2CD"),
        ]
    }

    fn ids(results: &[&Property]) -> Vec<String> {
        results.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let all = sample();
        let criteria = SearchCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop1", "prop2", "prop3"]);
    }

    #[test]
    fn filters_by_type() {
        let all = sample();
        let criteria = SearchCriteria {
            property_type: Some(PropertyType::House),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop1", "prop3"]);
    }

    #[test]
    fn filters_by_min_price() {
        let all = sample();
        let criteria = SearchCriteria {
            min_price: Some(500_000),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop1"]);
    }

    #[test]
    fn filters_by_max_price() {
        let all = sample();
        let criteria = SearchCriteria {
            max_price: Some(400_000),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop2"]);
    }

    #[test]
    fn zero_min_price_is_a_real_bound_not_a_sentinel() {
        let all = sample();
        let criteria = SearchCriteria {
            min_price: Some(0),
            ..Default::default()
        };
        // Every listing costs at least zero, so nothing is excluded, but the
        // bound is genuinely applied rather than skipped.
        assert!(!criteria.is_empty());
        assert_eq!(search(&all, &criteria).len(), 3);
    }

    #[test]
    fn filters_by_bedroom_range() {
        let all = sample();
        let criteria = SearchCriteria {
            min_bedrooms: Some(2),
            max_bedrooms: Some(3),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop2", "prop3"]);
    }

    #[test]
    fn added_after_includes_the_boundary_date() {
        let all = sample();
        let criteria = SearchCriteria {
            added_after: Some(date(2024, 11, 28)),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop1", "prop2"]);
    }

    #[test]
    fn added_between_is_inclusive_on_both_ends() {
        let all = sample();
        let criteria = SearchCriteria {
            added_between: Some(DateRange {
                start: date(2024, 10, 1),
                end: date(2024, 11, 15),
            }),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop3"]);
    }

    #[test]
    fn contradictory_date_window_matches_nothing() {
        let all = sample();
        let criteria = SearchCriteria {
            added_between: Some(DateRange {
                start: date(2025, 1, 1),
                end: date(2024, 1, 1),
            }),
            ..Default::default()
        };
        assert!(search(&all, &criteria).is_empty());
    }

    #[test]
    fn postcode_area_is_a_case_insensitive_prefix_match() {
        let all = sample();
        let criteria = SearchCriteria {
            postcode_area: Some("se13".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop2"]);
    }

    #[test]
    fn blank_postcode_area_is_ignored() {
        let all = sample();
        let criteria = SearchCriteria {
            postcode_area: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(search(&all, &criteria).len(), 3);
    }

    #[test]
    fn combined_filters_are_a_strict_and() {
        let all = sample();
        let criteria = SearchCriteria {
            property_type: Some(PropertyType::House),
            min_bedrooms: Some(4),
            min_price: Some(800_000),
            ..Default::default()
        };
        assert_eq!(ids(&search(&all, &criteria)), vec!["prop1"]);
    }

    #[test]
    fn no_match_returns_an_empty_vec() {
        let all = sample();
        let criteria = SearchCriteria {
            property_type: Some(PropertyType::Flat),
            min_bedrooms: Some(5),
            ..Default::default()
        };
        let results = search(&all, &criteria);
        assert!(results.is_empty());
    }
}
