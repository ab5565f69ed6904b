use serde::{Deserialize, Serialize};

/// A resale listing ingested from the product feed, normalized for the
/// catalog and for deep-link construction.
///
/// Field names serialize in the feed's camelCase wire form (`imageUrl`,
/// `inStock`, `isNew`) so a serialized catalog matches the sheet columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Feed-assigned identifier, required for admission. Uniqueness is
    /// whatever the upstream sheet guarantees; duplicates are not collapsed.
    pub id: String,
    pub title: String,
    pub brand: String,
    /// Free-form size label, e.g. `"M"` or `"42 EU"`.
    pub size: String,
    /// Condition grade on a 1–10 scale; `10` doubles as a "new" signal.
    pub condition: u8,
    /// Price in major currency units (no minor-unit scaling).
    pub price: f64,
    pub description: String,
    /// Primary image reference.
    pub image_url: String,
    /// Additional gallery images, in display order. May be empty; see
    /// [`Product::gallery`] for the display-time fallback.
    #[serde(default)]
    pub images: Vec<String>,
    /// Catalog category, filtered by exact match.
    pub category: String,
    pub in_stock: bool,
    pub is_new: bool,
}

impl Product {
    /// Returns the image sequence to display for this listing.
    ///
    /// When `images` is empty the gallery falls back to a single-element
    /// sequence containing `image_url`; when that is also empty the gallery
    /// is empty. This is the one fallback rule for "no extra images" —
    /// callers never need to special-case an absent gallery.
    #[must_use]
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        if self.image_url.is_empty() {
            return Vec::new();
        }
        vec![self.image_url.clone()]
    }

    /// Returns `true` when the listing should carry a "new" badge: either
    /// the explicit `is_new` flag or a perfect condition grade.
    #[must_use]
    pub fn signals_new(&self) -> bool {
        self.is_new || self.condition == 10
    }

    /// Exact-match category filter used by the catalog views.
    #[must_use]
    pub fn matches_category(&self, category: &str) -> bool {
        self.category == category
    }
}
