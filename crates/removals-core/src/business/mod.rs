//! Registry of the businesses the platform serves.
//!
//! Each business carries a four-character reference used as both storage key
//! and URL slug, plus the theme and feature flags its booking pages render
//! with. Lookups are case-insensitive on the reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Brand palette for a business's booking pages, as hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessTheme {
    pub primary: String,
    pub primary_hover: String,
    pub primary_light: String,
    pub primary_border: String,
    pub brand_text: String,
    pub primary_ring: String,
    /// Text color on primary-colored buttons; dark themes need light text
    /// and vice versa.
    pub primary_button_text: String,
}

impl Default for BusinessTheme {
    fn default() -> Self {
        Self {
            primary: "#f97316".to_string(),
            primary_hover: "#ea580c".to_string(),
            primary_light: "#fff7ed".to_string(),
            primary_border: "#fdba74".to_string(),
            brand_text: "#9333ea".to_string(),
            primary_ring: "#fed7aa".to_string(),
            primary_button_text: "#ffffff".to_string(),
        }
    }
}

/// Feature toggles per business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFeatures {
    pub show_trustpilot: bool,
    pub show_newsletter_checkbox: bool,
    pub show_powered_by: bool,
}

impl Default for BusinessFeatures {
    fn default() -> Self {
        Self {
            show_trustpilot: false,
            show_newsletter_checkbox: true,
            show_powered_by: true,
        }
    }
}

/// One registered business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessConfig {
    #[serde(rename = "busRef")]
    pub business_ref: String,
    pub theme: BusinessTheme,
    pub features: BusinessFeatures,
}

/// Closed registry of business configurations, keyed by uppercase reference.
#[derive(Debug, Clone, Default)]
pub struct BusinessDirectory {
    configs: BTreeMap<String, BusinessConfig>,
}

impl BusinessDirectory {
    /// Directory seeded with the built-in businesses.
    pub fn standard() -> Self {
        let mut directory = Self::default();
        directory.register(BusinessConfig {
            business_ref: "DEMO".to_string(),
            theme: BusinessTheme::default(),
            features: BusinessFeatures::default(),
        });
        directory.register(BusinessConfig {
            business_ref: "LNDN".to_string(),
            theme: BusinessTheme {
                primary: "#2563eb".to_string(),
                primary_hover: "#1d4ed8".to_string(),
                primary_light: "#eff6ff".to_string(),
                primary_border: "#93c5fd".to_string(),
                brand_text: "#7c3aed".to_string(),
                primary_ring: "#bfdbfe".to_string(),
                primary_button_text: "#ffffff".to_string(),
            },
            features: BusinessFeatures {
                show_trustpilot: true,
                show_newsletter_checkbox: true,
                show_powered_by: true,
            },
        });
        directory.register(BusinessConfig {
            business_ref: "LIMO".to_string(),
            theme: BusinessTheme {
                primary: "#FACC15".to_string(),
                primary_hover: "#EAB308".to_string(),
                primary_light: "#FEFCE8".to_string(),
                primary_border: "#FDE047".to_string(),
                brand_text: "#CA8A04".to_string(),
                primary_ring: "#FEF08A".to_string(),
                primary_button_text: "#000000".to_string(),
            },
            features: BusinessFeatures {
                show_trustpilot: false,
                show_newsletter_checkbox: true,
                show_powered_by: true,
            },
        });
        directory
    }

    /// Add or replace a business. The reference is stored uppercased.
    pub fn register(&mut self, config: BusinessConfig) {
        self.configs
            .insert(config.business_ref.to_uppercase(), config);
    }

    /// Case-insensitive lookup by reference.
    pub fn lookup(&self, business_ref: &str) -> Option<&BusinessConfig> {
        self.configs.get(&business_ref.to_uppercase())
    }

    pub fn contains(&self, business_ref: &str) -> bool {
        self.lookup(business_ref).is_some()
    }

    /// All registered references, in lexicographic order.
    pub fn references(&self) -> Vec<&str> {
        self.configs.keys().map(String::as_str).collect()
    }
}
