//! Product records as they appear in a catalog file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique product identifier within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single catalog entry.
///
/// Prices are display strings; the catalog author formats them and the
/// browser never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique key
    pub id: ProductId,
    /// Card and overlay heading
    pub title: String,
    /// Free text description
    pub description: String,
    /// Short glyph shown next to the title
    #[serde(default)]
    pub icon: String,
    /// Current price
    pub price: String,
    /// Struck-through reference price
    #[serde(default)]
    pub compare_price: String,
    /// Discount label, e.g. "-40%"
    #[serde(default)]
    pub discount: String,
    /// Feature bullet points, in display order
    #[serde(default)]
    pub features: Vec<String>,
    /// Call-to-action destination
    #[serde(default)]
    pub buy_link: String,
}

impl Product {
    /// Create a product with only the required text fields set.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: String::new(),
            price: price.into(),
            compare_price: String::new(),
            discount: String::new(),
            features: Vec::new(),
            buy_link: String::new(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_pricing(
        mut self,
        compare_price: impl Into<String>,
        discount: impl Into<String>,
    ) -> Self {
        self.compare_price = compare_price.into();
        self.discount = discount.into();
        self
    }

    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_buy_link(mut self, link: impl Into<String>) -> Self {
        self.buy_link = link.into();
        self
    }

    /// Case-insensitive substring match against title, description and features.
    ///
    /// `term_lower` must already be lowercased.
    #[must_use]
    pub fn matches(&self, term_lower: &str) -> bool {
        if term_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(term_lower)
            || self.description.to_lowercase().contains(term_lower)
            || self
                .features
                .iter()
                .any(|feature| feature.to_lowercase().contains(term_lower))
    }
}
