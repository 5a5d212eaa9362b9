//! Ordering and paging of person listings.
//!
//! The store enumerates records in no particular order. Listings are therefore always sorted
//! here first, with the record id as a final tie-break, so the same store contents produce the
//! same pages on every call.

use crate::page::Page;
use crate::{PersonError, PersonResult};
use api_shared::Person;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort key and direction applied before paging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first. Equal ages are ordered by id.
    #[default]
    AgeDesc,
    /// Alphabetical by name. Equal names are ordered by id.
    NameAsc,
}

impl SortOrder {
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        let primary = match self {
            SortOrder::AgeDesc => b.age.cmp(&a.age),
            SortOrder::NameAsc => a.name.cmp(&b.name),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Stable sort of `records` in this order.
    pub fn sort(&self, records: &mut [Person]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::AgeDesc => write!(f, "age-desc"),
            SortOrder::NameAsc => write!(f, "name-asc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = PersonError;

    fn from_str(s: &str) -> PersonResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age-desc" => Ok(SortOrder::AgeDesc),
            "name-asc" => Ok(SortOrder::NameAsc),
            other => Err(PersonError::InvalidInput(format!(
                "unknown sort order '{}' (expected 'age-desc' or 'name-asc')",
                other
            ))),
        }
    }
}

/// Sorts `records` by `order` and returns the slice selected by `page`.
///
/// A page past the last record, or one with a non-positive size, yields an empty `Vec`.
pub fn paginate(mut records: Vec<Person>, page: &Page, order: SortOrder) -> Vec<Person> {
    order.sort(&mut records);
    let window = page.window(records.len());
    records.drain(window).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str, age: i64) -> Person {
        Person {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    fn ids(persons: &[Person]) -> Vec<&str> {
        persons.iter().map(|p| p.id.as_str()).collect()
    }

    fn sample() -> Vec<Person> {
        vec![
            person("c", "Cleo", 20),
            person("b", "Bo", 30),
            person("a", "Ann", 30),
        ]
    }

    #[test]
    fn test_age_desc_breaks_ties_by_id() {
        let first = paginate(sample(), &Page::new(1, 2), SortOrder::AgeDesc);
        assert_eq!(ids(&first), ["a", "b"]);
        assert!(first.iter().all(|p| p.age == 30));

        let second = paginate(sample(), &Page::new(2, 2), SortOrder::AgeDesc);
        assert_eq!(ids(&second), ["c"]);
    }

    #[test]
    fn test_name_asc_orders_alphabetically() {
        let mut records = sample();
        records.push(person("d", "Ann", 50));

        let page = paginate(records, &Page::new(1, 10), SortOrder::NameAsc);
        assert_eq!(ids(&page), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_order_does_not_depend_on_input_order() {
        let mut reversed = sample();
        reversed.reverse();

        let a = paginate(sample(), &Page::new(1, 10), SortOrder::AgeDesc);
        let b = paginate(reversed, &Page::new(1, 10), SortOrder::AgeDesc);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pages_concatenate_to_full_sorted_sequence() {
        let records: Vec<Person> = (0..23)
            .map(|i| person(&format!("{:02}", i), &format!("n{}", i % 4), (i * 7) % 5))
            .collect();

        let mut expected = records.clone();
        SortOrder::AgeDesc.sort(&mut expected);

        for size in 1..=25_i64 {
            let pages = (23 + size - 1) / size;
            let mut joined = Vec::new();
            for number in 1..=pages {
                let page = paginate(records.clone(), &Page::new(number, size), SortOrder::AgeDesc);
                assert!(page.len() as i64 <= size);
                joined.extend(page);
            }
            assert_eq!(joined, expected, "page size {}", size);
        }
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        assert!(paginate(sample(), &Page::new(3, 2), SortOrder::AgeDesc).is_empty());
        assert!(paginate(sample(), &Page::new(1_000, 100), SortOrder::NameAsc).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_page() {
        assert!(paginate(Vec::new(), &Page::default(), SortOrder::AgeDesc).is_empty());
    }

    #[test]
    fn test_non_positive_page_values_yield_empty_page() {
        assert!(paginate(sample(), &Page::new(1, 0), SortOrder::AgeDesc).is_empty());
        assert!(paginate(sample(), &Page::new(1, -2), SortOrder::AgeDesc).is_empty());
        assert!(paginate(sample(), &Page::new(0, 2), SortOrder::AgeDesc).is_empty());
        assert!(paginate(sample(), &Page::new(-1, 2), SortOrder::AgeDesc).is_empty());
    }

    #[test]
    fn test_sort_order_parses_known_names() {
        assert_eq!("age-desc".parse::<SortOrder>().unwrap(), SortOrder::AgeDesc);
        assert_eq!(" Name-Asc ".parse::<SortOrder>().unwrap(), SortOrder::NameAsc);
        assert_eq!(SortOrder::NameAsc.to_string(), "name-asc");
    }

    #[test]
    fn test_sort_order_rejects_unknown_names() {
        let err = "by-height".parse::<SortOrder>().expect_err("should reject");
        assert!(matches!(err, PersonError::InvalidInput(msg) if msg.contains("by-height")));
    }
}
