//! The read-only research catalog and its built-in sample data.

use std::collections::{BTreeSet, HashSet};

use crate::dates::PublishedMonth;
use crate::entities::ResearchItem;
use crate::enums::Category;
use crate::errors::CoreError;

/// An immutable, ordered collection of research items with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ResearchItem>,
}

impl Catalog {
    /// Build a catalog, rejecting zero or duplicate ids.
    pub fn from_items(items: Vec<ResearchItem>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(CoreError::Validation(format!(
                    "research item '{}' has id 0; ids must be positive",
                    item.title
                )));
            }
            if !seen.insert(item.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate research item id {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[ResearchItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Result<&ResearchItem, CoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "research item".to_string(),
                id: id.to_string(),
            })
    }

    /// Distinct tags across the catalog, sorted ascending.
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of items per category, in [`Category::ALL`] order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// The nine sample papers shown on the research listing page.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            items: vec![
                sample_item(
                    1,
                    "The Impact of Technology on Student Engagement",
                    "A comprehensive study on how educational technology affects student participation and learning outcomes.",
                    "Johnson, M., Smith, A.",
                    (2023, 1),
                    Category::EducationalTechnology,
                    &["technology", "engagement", "learning outcomes"],
                    42,
                    312,
                ),
                sample_item(
                    2,
                    "Effective Teaching Methods in Online Learning Environments",
                    "This research explores various teaching strategies and their effectiveness in virtual classrooms.",
                    "Williams, R., Brown, J.",
                    (2023, 3),
                    Category::OnlineLearning,
                    &["online learning", "teaching methods", "virtual classroom"],
                    28,
                    245,
                ),
                sample_item(
                    3,
                    "Inclusive Education: Strategies for Diverse Learners",
                    "An analysis of approaches to create inclusive learning environments for students with diverse needs.",
                    "Garcia, L., Chen, H.",
                    (2023, 2),
                    Category::InclusiveEducation,
                    &["inclusion", "diversity", "special education"],
                    35,
                    278,
                ),
                sample_item(
                    4,
                    "Assessment Practices in Higher Education",
                    "This study examines various assessment methods and their impact on student learning in higher education.",
                    "Taylor, S., Anderson, P.",
                    (2023, 4),
                    Category::HigherEducation,
                    &["assessment", "higher education", "evaluation"],
                    19,
                    187,
                ),
                sample_item(
                    5,
                    "The Role of Artificial Intelligence in Education",
                    "An exploration of current and future applications of AI in educational settings.",
                    "Lee, K., Patel, R.",
                    (2023, 5),
                    Category::EducationalTechnology,
                    &["artificial intelligence", "technology", "future of education"],
                    53,
                    426,
                ),
                sample_item(
                    6,
                    "Developing Critical Thinking Skills Through Project-Based Learning",
                    "This research investigates how project-based learning approaches can enhance students' critical thinking abilities.",
                    "Martinez, D., Wilson, T.",
                    (2023, 6),
                    Category::Pedagogy,
                    &["critical thinking", "project-based learning", "skill development"],
                    31,
                    264,
                ),
                sample_item(
                    7,
                    "Digital Learning Resources for Science Education",
                    "This study evaluates the efficacy of interactive digital resources for science education in K-12 schools.",
                    "Roberts, E., Kumar, V.",
                    (2023, 7),
                    Category::EducationalTechnology,
                    &["science education", "digital resources", "K-12"],
                    22,
                    198,
                ),
                sample_item(
                    8,
                    "Student Mental Health: Impact of Learning Environments",
                    "An examination of how different learning environments affect student mental health and academic performance.",
                    "Thompson, K., Nguyen, L.",
                    (2023, 8),
                    Category::EducationalPsychology,
                    &["mental health", "learning environment", "wellbeing"],
                    47,
                    352,
                ),
                sample_item(
                    9,
                    "Peer Learning in Graduate Education",
                    "This research explores the effectiveness of peer learning approaches in graduate-level education.",
                    "Patel, S., Wilson, A.",
                    (2023, 9),
                    Category::HigherEducation,
                    &["peer learning", "graduate education", "collaboration"],
                    18,
                    165,
                ),
            ],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_item(
    id: u32,
    title: &str,
    abstract_text: &str,
    authors: &str,
    (year, month): (i32, u32),
    category: Category,
    tags: &[&str],
    citations: u32,
    downloads: u32,
) -> ResearchItem {
    ResearchItem {
        id,
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        authors: authors.to_string(),
        date: PublishedMonth::from(
            chrono::NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default(),
        ),
        category,
        tags: tags.iter().map(ToString::to_string).collect(),
        citations,
        downloads,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sample_has_nine_unique_items() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 9);
        let rebuilt = Catalog::from_items(catalog.items().to_vec()).expect("ids are unique");
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn sample_dates_span_jan_to_sep_2023() {
        let catalog = Catalog::sample();
        let months: Vec<String> = catalog.items().iter().map(|i| i.date.to_string()).collect();
        assert_eq!(
            months,
            [
                "Jan 2023", "Mar 2023", "Feb 2023", "Apr 2023", "May 2023", "Jun 2023",
                "Jul 2023", "Aug 2023", "Sep 2023"
            ]
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut items = Catalog::sample().items().to_vec();
        items[1].id = items[0].id;
        let err = Catalog::from_items(items).expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate research item id 1"));
    }

    #[test]
    fn rejects_zero_id() {
        let mut items = Catalog::sample().items().to_vec();
        items[0].id = 0;
        assert!(Catalog::from_items(items).is_err());
    }

    #[test]
    fn get_reports_missing_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.get(5).unwrap().downloads, 426);
        let err = catalog.get(42).expect_err("should be missing");
        assert_eq!(err.to_string(), "Entity not found: research item 42");
    }

    #[test]
    fn all_tags_are_sorted_and_distinct() {
        let catalog = Catalog::sample();
        let tags = catalog.all_tags();
        assert_eq!(tags.iter().filter(|t| **t == "technology").count(), 1);
        assert_eq!(
            &tags[..6],
            [
                "K-12",
                "artificial intelligence",
                "assessment",
                "collaboration",
                "critical thinking",
                "digital resources"
            ]
        );
    }

    #[test]
    fn category_counts_cover_every_category() {
        let counts = Catalog::sample().category_counts();
        assert_eq!(
            counts,
            vec![
                (Category::EducationalTechnology, 3),
                (Category::OnlineLearning, 1),
                (Category::InclusiveEducation, 1),
                (Category::HigherEducation, 2),
                (Category::Pedagogy, 1),
                (Category::EducationalPsychology, 1),
            ]
        );
    }
}
