/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum EmploymentType {
    #[strum(to_string = "Full Time", serialize = "full-time", serialize = "fulltime")]
    FullTime,
    #[strum(to_string = "Part Time", serialize = "part-time", serialize = "parttime")]
    PartTime,
    #[strum(to_string = "Freelance")]
    Freelance,
    #[strum(to_string = "Internship")]
    Internship,
}

/// Filter state of the job listing view: selected employment types, salary
/// floor, free-text role search and the current page. Changing any filter
/// resets the page to 1; moving pages leaves the filters alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    employment_types: BTreeSet<EmploymentType>,
    salary_floor: Option<u32>,
    search: String,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        FilterState {
            employment_types: BTreeSet::new(),
            salary_floor: None,
            search: String::new(),
            page: 1,
        }
    }

    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType) {
        if !self.employment_types.remove(&employment_type) {
            self.employment_types.insert(employment_type);
        }

        self.page = 1;
    }

    pub fn set_salary_floor(&mut self, floor: Option<u32>) {
        self.salary_floor = floor;
        self.page = 1;
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn salary_floor(&self) -> Option<u32> {
        self.salary_floor
    }

    /// Request parameter for `employmentType`, absent when nothing is
    /// selected.
    pub fn employment_type_param(&self) -> Option<Vec<String>> {
        if self.employment_types.is_empty() {
            None
        } else {
            Some(self.employment_types.iter().map(|t| t.to_string()).collect())
        }
    }

    /// Request parameter for `searchRoleName`, absent when the search box is
    /// empty.
    pub fn search_param(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.clone())
        }
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if let Some(types) = self.employment_type_param() {
            parts.push(types.join(", "));
        }

        if let Some(floor) = self.salary_floor {
            parts.push(format!("{} LPA and above", floor));
        }

        if let Some(search) = self.search_param() {
            parts.push(format!("role ~ \"{}\"", search));
        }

        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle_updates_set_and_resets_page() {
        let mut filters = FilterState::new();
        filters.set_page(4);

        filters.toggle_employment_type(EmploymentType::FullTime);
        assert_eq!(filters.page(), 1);
        assert_eq!(
            filters.employment_type_param(),
            Some(vec!["Full Time".to_string()])
        );

        filters.set_page(3);
        filters.toggle_employment_type(EmploymentType::FullTime);
        assert_eq!(filters.page(), 1);
        assert_eq!(filters.employment_type_param(), None);
    }

    #[test]
    fn test_salary_and_search_reset_page() {
        let mut filters = FilterState::new();

        filters.set_page(7);
        filters.set_salary_floor(Some(30));
        assert_eq!(filters.page(), 1);
        assert_eq!(filters.salary_floor(), Some(30));

        filters.set_page(7);
        filters.set_search("  engineer ");
        assert_eq!(filters.page(), 1);
        assert_eq!(filters.search_param(), Some("engineer".to_string()));
    }

    #[test]
    fn test_page_moves_keep_filters() {
        let mut filters = FilterState::new();
        filters.toggle_employment_type(EmploymentType::Internship);
        filters.set_salary_floor(Some(10));

        filters.set_page(5);
        assert_eq!(filters.page(), 5);
        assert_eq!(filters.salary_floor(), Some(10));
        assert_eq!(
            filters.employment_type_param(),
            Some(vec!["Internship".to_string()])
        );

        filters.set_page(0);
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn test_empty_params_are_absent() {
        let filters = FilterState::new();
        assert_eq!(filters.employment_type_param(), None);
        assert_eq!(filters.search_param(), None);
        assert_eq!(filters.salary_floor(), None);
        assert_eq!(filters.describe(), "no filters");
    }

    #[test]
    fn test_employment_type_parsing() {
        assert_eq!(
            EmploymentType::from_str("full-time").unwrap(),
            EmploymentType::FullTime
        );
        assert_eq!(
            EmploymentType::from_str("Full Time").unwrap(),
            EmploymentType::FullTime
        );
        assert_eq!(
            EmploymentType::from_str("internship").unwrap(),
            EmploymentType::Internship
        );
        assert!(EmploymentType::from_str("contract").is_err());

        assert_eq!(EmploymentType::PartTime.to_string(), "Part Time");
    }
}
