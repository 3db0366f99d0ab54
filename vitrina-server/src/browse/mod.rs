//! Public browse views
//!
//! Pure reduction of in-memory collections to what the visitor asked
//! for: the generic criteria filter ([`filter`]) plus the
//! promotion/business join feeding the public promotions view.

pub mod filter;

pub use filter::{Criteria, business_criteria, promotion_criteria};

use shared::models::{Business, Promotion, PublicPromotion};
use std::collections::HashMap;

/// Join promotions with their parent businesses for the public view.
///
/// Only promotions whose parent is present AND `active` survive; a
/// promotion of a hidden business never reaches the filter stage at
/// all. Promotion order is preserved.
pub fn join_public_promotions(
    businesses: &[Business],
    promotions: Vec<Promotion>,
) -> Vec<PublicPromotion> {
    let active: HashMap<&str, &Business> = businesses
        .iter()
        .filter(|b| b.active)
        .map(|b| (b.id.as_str(), b))
        .collect();

    promotions
        .into_iter()
        .filter_map(|p| {
            let parent = active.get(p.business_id.as_str())?;
            Some(PublicPromotion {
                id: p.id,
                business_id: p.business_id,
                title: p.title,
                description: p.description,
                image_url: p.image_url,
                days_of_week: p.days_of_week,
                business_name: parent.name.clone(),
                business_category: parent.category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Category;

    fn business(id: &str, name: &str, active: bool) -> Business {
        Business {
            id: id.to_string(),
            owner_id: "profile:u1".to_string(),
            name: name.to_string(),
            category: Category::Gastronomia,
            description: None,
            phone: None,
            image_url: None,
            location_lat: None,
            location_lng: None,
            active,
            subscription_expires_at: None,
            created_at: 0,
        }
    }

    fn promotion(id: &str, business_id: &str, title: &str, days: &[u8]) -> Promotion {
        Promotion {
            id: id.to_string(),
            business_id: business_id.to_string(),
            title: title.to_string(),
            description: None,
            image_url: None,
            days_of_week: days.to_vec(),
            created_at: 0,
        }
    }

    #[test]
    fn test_join_drops_inactive_parents() {
        let businesses = vec![
            business("business:a", "Bar Uno", true),
            business("business:b", "Bar Dos", false),
        ];
        let promotions = vec![
            promotion("promotion:1", "business:a", "2x1", &[1]),
            promotion("promotion:2", "business:b", "Happy hour", &[1]),
        ];

        let joined = join_public_promotions(&businesses, promotions);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].id, "promotion:1");
        assert_eq!(joined[0].business_name, "Bar Uno");
    }

    #[test]
    fn test_join_drops_orphan_promotions() {
        let businesses = vec![business("business:a", "Bar Uno", true)];
        let promotions = vec![promotion("promotion:9", "business:gone", "2x1", &[1])];
        assert!(join_public_promotions(&businesses, promotions).is_empty());
    }

    /// A hidden business with a promotion matching every criterion must
    /// never surface in the public promotions view.
    #[test]
    fn test_inactive_business_promotion_never_surfaces() {
        let businesses = vec![business("business:x", "Pizzería Oculta", false)];
        let promotions = vec![promotion("promotion:1", "business:x", "2x1 en Pizzas", &[1])];

        let joined = join_public_promotions(&businesses, promotions);
        let filtered = promotion_criteria("pizza", Some(Category::Gastronomia), Some(1))
            .apply(joined);
        assert!(filtered.is_empty());
    }
}
