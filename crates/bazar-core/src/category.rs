//! Category Inference
//!
//! Product cards carry no category, so one is guessed from keywords in the
//! title. The table is scanned in order and the first hit wins; electronics
//! come before bike brands.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Phone,
    Laptop,
    Watch,
    Audio,
    Tablet,
    Yamaha,
    Honda,
    Suzuki,
    RoyalEnfield,
    Other,
}

/// Keyword table, in match priority order.
const CATEGORY_KEYWORDS: &[(&[&str], Category)] = &[
    (&["iphone", "phone"], Category::Phone),
    (&["macbook", "laptop"], Category::Laptop),
    (&["watch"], Category::Watch),
    (&["airpod", "headphone"], Category::Audio),
    (&["ipad", "tablet"], Category::Tablet),
    (&["yamaha"], Category::Yamaha),
    (&["honda"], Category::Honda),
    (&["suzuki"], Category::Suzuki),
    (&["royal enfield"], Category::RoyalEnfield),
];

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Phone,
        Category::Laptop,
        Category::Watch,
        Category::Audio,
        Category::Tablet,
        Category::Yamaha,
        Category::Honda,
        Category::Suzuki,
        Category::RoyalEnfield,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Phone => "phone",
            Category::Laptop => "laptop",
            Category::Watch => "watch",
            Category::Audio => "audio",
            Category::Tablet => "tablet",
            Category::Yamaha => "yamaha",
            Category::Honda => "honda",
            Category::Suzuki => "suzuki",
            Category::RoyalEnfield => "royal-enfield",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Phone => "Phones",
            Category::Laptop => "Laptops",
            Category::Watch => "Watches",
            Category::Audio => "Audio",
            Category::Tablet => "Tablets",
            Category::Yamaha => "Yamaha",
            Category::Honda => "Honda",
            Category::Suzuki => "Suzuki",
            Category::RoyalEnfield => "Royal Enfield",
            Category::Other => "Other",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer a category from a product title.
pub fn detect_category(title: &str) -> Category {
    let title = title.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
