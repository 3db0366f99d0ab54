//! Listing filter engine
//!
//! One generic filter over AND-composed criterion predicates, applied
//! to businesses and to (promotion, parent business) pairs. Pure and
//! synchronous: same inputs, same output; the source collection is
//! never mutated and relative order always survives.
//!
//! An unset criterion (empty term, no category, no weekday) contributes
//! no predicate, so an empty [`Criteria`] is the identity filter.

use shared::models::{Business, Category, PublicPromotion};

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// AND-composition of independent criterion predicates
pub struct Criteria<T> {
    predicates: Vec<Predicate<T>>,
}

impl<T> Criteria<T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a criterion
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// True iff every criterion accepts the item
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }

    /// Reduce a collection to the matching items, preserving order
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|i| self.matches(i)).collect()
    }
}

impl<T> Default for Criteria<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Criteria for the public business list: free-text term against name or
/// description, exact category. Missing descriptions simply never match
/// the term.
pub fn business_criteria(term: &str, category: Option<Category>) -> Criteria<Business> {
    let mut criteria = Criteria::new();

    if !term.is_empty() {
        let needle = term.to_lowercase();
        criteria = criteria.with(move |b: &Business| {
            contains_ci(&b.name, &needle)
                || b.description
                    .as_deref()
                    .is_some_and(|d| contains_ci(d, &needle))
        });
    }

    if let Some(c) = category {
        criteria = criteria.with(move |b: &Business| b.category == c);
    }

    criteria
}

/// Criteria for the public promotions list. The input pairs are already
/// restricted to active businesses (see `join_public_promotions`); the
/// term also searches the parent business name, the category matches the
/// parent's, and a selected weekday must be in `days_of_week`.
pub fn promotion_criteria(
    term: &str,
    category: Option<Category>,
    day: Option<u8>,
) -> Criteria<PublicPromotion> {
    let mut criteria = Criteria::new();

    if !term.is_empty() {
        let needle = term.to_lowercase();
        criteria = criteria.with(move |p: &PublicPromotion| {
            contains_ci(&p.title, &needle)
                || p.description
                    .as_deref()
                    .is_some_and(|d| contains_ci(d, &needle))
                || contains_ci(&p.business_name, &needle)
        });
    }

    if let Some(c) = category {
        criteria = criteria.with(move |p: &PublicPromotion| p.business_category == c);
    }

    if let Some(d) = day {
        criteria = criteria.with(move |p: &PublicPromotion| p.days_of_week.contains(&d));
    }

    criteria
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: &str, name: &str, description: Option<&str>, category: Category) -> Business {
        Business {
            id: id.to_string(),
            owner_id: "profile:u1".to_string(),
            name: name.to_string(),
            category,
            description: description.map(|s| s.to_string()),
            phone: None,
            image_url: None,
            location_lat: None,
            location_lng: None,
            active: true,
            subscription_expires_at: None,
            created_at: 0,
        }
    }

    fn sample_businesses() -> Vec<Business> {
        vec![
            business(
                "business:1",
                "Pizzería Don Mario",
                Some("Pizzas a la piedra"),
                Category::Gastronomia,
            ),
            business("business:2", "Lavadero El Rayo", None, Category::Vehiculo),
            business(
                "business:3",
                "Tienda Mario Moda",
                Some("Ropa de temporada"),
                Category::Moda,
            ),
        ]
    }

    fn promo(title: &str, description: Option<&str>, business_name: &str, category: Category, days: &[u8]) -> PublicPromotion {
        PublicPromotion {
            id: format!("promotion:{title}"),
            business_id: "business:1".to_string(),
            title: title.to_string(),
            description: description.map(|s| s.to_string()),
            image_url: None,
            days_of_week: days.to_vec(),
            business_name: business_name.to_string(),
            business_category: category,
        }
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let items = sample_businesses();
        let out = business_criteria("", None).apply(items.clone());
        assert_eq!(out.len(), items.len());
        let ids: Vec<_> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["business:1", "business:2", "business:3"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = business_criteria("mario", Some(Category::Gastronomia));
        let once = criteria.apply(sample_businesses());
        let twice = criteria.apply(once.clone());
        assert_eq!(once.len(), twice.len());
        assert_eq!(
            once.iter().map(|b| &b.id).collect::<Vec<_>>(),
            twice.iter().map(|b| &b.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_every_survivor_satisfies_all_predicates() {
        let criteria = business_criteria("mario", None);
        for b in criteria.apply(sample_businesses()) {
            let text = format!("{} {}", b.name, b.description.as_deref().unwrap_or(""));
            assert!(text.to_lowercase().contains("mario"));
        }
    }

    #[test]
    fn test_term_is_case_insensitive_and_checks_description() {
        let out = business_criteria("PIEDRA", None).apply(sample_businesses());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "business:1");
    }

    #[test]
    fn test_missing_description_never_matches_but_never_errors() {
        let out = business_criteria("rayo", None).apply(sample_businesses());
        assert_eq!(out.len(), 1);
        let out = business_criteria("inexistente", None).apply(sample_businesses());
        assert!(out.is_empty());
    }

    #[test]
    fn test_category_is_exact_match() {
        let out = business_criteria("", Some(Category::Moda)).apply(sample_businesses());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "business:3");
    }

    #[test]
    fn test_order_among_matches_is_preserved() {
        // both Mario businesses match; their input order must survive
        let out = business_criteria("mario", None).apply(sample_businesses());
        let ids: Vec<_> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["business:1", "business:3"]);
    }

    #[test]
    fn test_weekday_containment() {
        let items = vec![promo("2x1", None, "Bar Uno", Category::Gastronomia, &[1, 3])];

        let hit = promotion_criteria("", None, Some(3)).apply(items.clone());
        assert_eq!(hit.len(), 1);

        let miss = promotion_criteria("", None, Some(0)).apply(items);
        assert!(miss.is_empty());
    }

    #[test]
    fn test_promotion_term_searches_parent_business_name() {
        let items = vec![
            promo("2x1", None, "Pizzería Don Mario", Category::Gastronomia, &[1]),
            promo("Descuento", None, "Lavadero El Rayo", Category::Vehiculo, &[1]),
        ];
        let out = promotion_criteria("mario", None, None).apply(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "2x1");
    }

    #[test]
    fn test_promotion_all_criteria_compose_with_and() {
        let items = vec![
            promo("2x1 en Pizzas", Some("solo en el local"), "Don Mario", Category::Gastronomia, &[1, 5]),
            promo("2x1 en Pizzas", None, "Don Mario", Category::Gastronomia, &[2]),
            promo("2x1 en Cafés", None, "La Esquina", Category::Gastronomia, &[1]),
        ];
        let out =
            promotion_criteria("pizzas", Some(Category::Gastronomia), Some(5)).apply(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].days_of_week, vec![1, 5]);
    }
}
