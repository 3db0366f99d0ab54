//! Business Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 商家分类（固定集合，与站点展示文案一致）
///
/// The wire form is the Spanish display string; `FromStr` accepts the
/// same strings for query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Gastronomía")]
    Gastronomia,
    #[serde(rename = "Moda")]
    Moda,
    #[serde(rename = "Salud")]
    Salud,
    #[serde(rename = "Para el hogar")]
    ParaElHogar,
    #[serde(rename = "Vehículo")]
    Vehiculo,
    #[serde(rename = "Servicios")]
    Servicios,
    #[serde(rename = "Otros")]
    Otros,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Gastronomia,
        Category::Moda,
        Category::Salud,
        Category::ParaElHogar,
        Category::Vehiculo,
        Category::Servicios,
        Category::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gastronomia => "Gastronomía",
            Category::Moda => "Moda",
            Category::Salud => "Salud",
            Category::ParaElHogar => "Para el hogar",
            Category::Vehiculo => "Vehículo",
            Category::Servicios => "Servicios",
            Category::Otros => "Otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Business listing as exposed by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    /// Public visibility flag, toggled by an administrator only
    pub active: bool,
    /// End of the paid visibility window (informational, not enforced)
    pub subscription_expires_at: Option<i64>,
    pub created_at: i64,
}

impl Business {
    /// 订阅是否已到期（仅用于展示，不影响 active）
    ///
    /// No expiry date counts as expired; otherwise expired iff the
    /// timestamp is strictly before `now_millis`.
    pub fn is_subscription_expired(&self, now_millis: i64) -> bool {
        match self.subscription_expires_at {
            None => true,
            Some(t) => t < now_millis,
        }
    }
}

/// Row of the administrator's moderation table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminBusiness {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub active: bool,
    pub subscription_expires_at: Option<i64>,
    /// Derived at read time, see [`Business::is_subscription_expired`]
    pub is_expired: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_business(expires_at: Option<i64>) -> Business {
        Business {
            id: "business:a1".to_string(),
            owner_id: "profile:u1".to_string(),
            name: "Pizzería Don Mario".to_string(),
            category: Category::Gastronomia,
            description: None,
            phone: None,
            image_url: None,
            location_lat: None,
            location_lng: None,
            active: true,
            subscription_expires_at: expires_at,
            created_at: 0,
        }
    }

    #[test]
    fn test_no_expiry_date_counts_as_expired() {
        let b = make_business(None);
        assert!(b.is_subscription_expired(1_700_000_000_000));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let now = 1_700_000_000_000;
        let b = make_business(Some(now - 1_000));
        assert!(b.is_subscription_expired(now));
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        let now = 1_700_000_000_000;
        let b = make_business(Some(now + 1_000));
        assert!(!b.is_subscription_expired(now));
    }

    #[test]
    fn test_expiry_boundary_is_not_expired() {
        // strictly before "now" counts as expired, equal does not
        let now = 1_700_000_000_000;
        let b = make_business(Some(now));
        assert!(!b.is_subscription_expired(now));
    }

    #[test]
    fn test_category_roundtrip() {
        for c in Category::ALL {
            let parsed: Category = c.as_str().parse().unwrap();
            assert_eq!(parsed, c);
        }
        assert!("Gastronomia".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_wire_format_is_display_string() {
        let json = serde_json::to_string(&Category::ParaElHogar).unwrap();
        assert_eq!(json, "\"Para el hogar\"");
        let back: Category = serde_json::from_str("\"Vehículo\"").unwrap();
        assert_eq!(back, Category::Vehiculo);
    }
}
