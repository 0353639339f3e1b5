use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::directory::accessor::ChefProfile;
use crate::errors::AppError;

/// Named experience range. `All` matches any year count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBracket {
    #[default]
    All,
    /// Less than 3 years.
    Fresher,
    /// 3 to 6 years, both inclusive.
    Medium,
    /// Over 6 and up to 10 years.
    High,
    /// Over 10 years.
    Pro,
}

impl ExperienceBracket {
    pub fn matches(self, years: f64) -> bool {
        match self {
            ExperienceBracket::All => true,
            ExperienceBracket::Fresher => years < 3.0,
            ExperienceBracket::Medium => (3.0..=6.0).contains(&years),
            ExperienceBracket::High => years > 6.0 && years <= 10.0,
            ExperienceBracket::Pro => years > 10.0,
        }
    }
}

impl FromStr for ExperienceBracket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(ExperienceBracket::All),
            "fresher" => Ok(ExperienceBracket::Fresher),
            "medium" => Ok(ExperienceBracket::Medium),
            "high" => Ok(ExperienceBracket::High),
            "pro" => Ok(ExperienceBracket::Pro),
            other => Err(AppError::Validation(format!(
                "Unknown experience filter '{other}'. Expected one of: all, fresher, medium, high, pro"
            ))),
        }
    }
}

/// Profession filter. Values come from the loaded records, so any string is valid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(untagged)]
pub enum ProfessionFilter {
    #[default]
    All,
    Exact(String),
}

impl ProfessionFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => ProfessionFilter::All,
            other => ProfessionFilter::Exact(other.to_string()),
        }
    }

    /// Case-sensitive equality against the record's profession.
    pub fn matches(&self, profession: &str) -> bool {
        match self {
            ProfessionFilter::All => true,
            ProfessionFilter::Exact(wanted) => wanted == profession,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct FilterState {
    pub query: String,
    pub experience: ExperienceBracket,
    pub profession: ProfessionFilter,
}

impl FilterState {
    /// True when any filter differs from its default (drives "Clear filters").
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.experience != ExperienceBracket::All
            || self.profession != ProfessionFilter::All
    }

    /// Case-insensitive substring match against name, email, phone,
    /// experience and profession. An empty query matches everything.
    pub fn matches_query(&self, chef: &ChefProfile) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [
            chef.name.as_str(),
            chef.email.as_str(),
            chef.phone.as_str(),
            chef.profession.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
            || chef.experience_label().contains(&needle)
    }

    pub fn matches(&self, chef: &ChefProfile) -> bool {
        self.matches_query(chef)
            && self.experience.matches(chef.experience)
            && self.profession.matches(&chef.profession)
    }
}

/// Applies all filters, preserving input order.
pub fn filter_profiles<'a>(chefs: &'a [ChefProfile], filters: &FilterState) -> Vec<&'a ChefProfile> {
    chefs.iter().filter(|chef| filters.matches(chef)).collect()
}

/// Distinct non-empty professions present in the collection, sorted.
pub fn unique_professions(chefs: &[ChefProfile]) -> Vec<String> {
    chefs
        .iter()
        .filter(|chef| !chef.profession.is_empty())
        .map(|chef| chef.profession.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef(id: &str, name: &str, experience: f64, profession: &str) -> ChefProfile {
        ChefProfile {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "9876543210".to_string(),
            location: String::new(),
            experience,
            profession: profession.to_string(),
            education: String::new(),
            skills: Vec::new(),
            salary: String::new(),
            availability: String::new(),
            languages: Vec::new(),
            certifications: Vec::new(),
            last_updated: None,
        }
    }

    fn sample() -> Vec<ChefProfile> {
        vec![
            chef("1", "Anil", 2.0, "Indian Commi"),
            chef("2", "Bela", 4.0, "Head Chef"),
            chef("3", "Chen", 8.0, "Chinese Commi"),
            chef("4", "Divya", 12.0, "Head Chef"),
            chef("5", "Esha", 0.0, ""),
        ]
    }

    #[test]
    fn test_default_filters_are_identity() {
        let chefs = sample();
        let filtered = filter_profiles(&chefs, &FilterState::default());
        assert_eq!(filtered.len(), chefs.len());
        assert!(filtered.iter().zip(chefs.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_bracket_boundaries() {
        let bucket = |years: f64| {
            [
                ExperienceBracket::Fresher,
                ExperienceBracket::Medium,
                ExperienceBracket::High,
                ExperienceBracket::Pro,
            ]
            .into_iter()
            .filter(|b| b.matches(years))
            .collect::<Vec<_>>()
        };
        assert_eq!(bucket(0.0), vec![ExperienceBracket::Fresher]);
        assert_eq!(bucket(2.999), vec![ExperienceBracket::Fresher]);
        assert_eq!(bucket(3.0), vec![ExperienceBracket::Medium]);
        assert_eq!(bucket(6.0), vec![ExperienceBracket::Medium]);
        assert_eq!(bucket(6.0001), vec![ExperienceBracket::High]);
        assert_eq!(bucket(10.0), vec![ExperienceBracket::High]);
        assert_eq!(bucket(10.0001), vec![ExperienceBracket::Pro]);
        assert!(ExperienceBracket::All.matches(42.0));
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let chefs = sample();
        let by_name = FilterState { query: "BELA".to_string(), ..Default::default() };
        assert_eq!(filter_profiles(&chefs, &by_name)[0].id, "2");

        let by_profession = FilterState { query: "commi".to_string(), ..Default::default() };
        let ids: Vec<_> = filter_profiles(&chefs, &by_profession).iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let by_experience = FilterState { query: "12".to_string(), ..Default::default() };
        assert_eq!(filter_profiles(&chefs, &by_experience)[0].id, "4");

        let by_phone = FilterState { query: "98765".to_string(), ..Default::default() };
        assert_eq!(filter_profiles(&chefs, &by_phone).len(), chefs.len());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let chefs = sample();
        let filters = FilterState {
            query: String::new(),
            experience: ExperienceBracket::Pro,
            profession: ProfessionFilter::parse("Head Chef"),
        };
        let filtered = filter_profiles(&chefs, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "4");
    }

    #[test]
    fn test_profession_match_is_case_sensitive() {
        let chefs = sample();
        let filters = FilterState {
            profession: ProfessionFilter::parse("head chef"),
            ..Default::default()
        };
        assert!(filter_profiles(&chefs, &filters).is_empty());
    }

    #[test]
    fn test_unique_professions_sorted_and_non_empty() {
        assert_eq!(
            unique_professions(&sample()),
            vec!["Chinese Commi", "Head Chef", "Indian Commi"]
        );
    }

    #[test]
    fn test_parse_experience_bracket() {
        assert_eq!("medium".parse::<ExperienceBracket>().unwrap(), ExperienceBracket::Medium);
        assert_eq!("".parse::<ExperienceBracket>().unwrap(), ExperienceBracket::All);
        assert!("veteran".parse::<ExperienceBracket>().is_err());
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterState::default().is_active());
        let filters = FilterState { experience: ExperienceBracket::High, ..Default::default() };
        assert!(filters.is_active());
    }
}
