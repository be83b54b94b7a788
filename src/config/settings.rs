use crate::config::{load_merged, save_merged, ConfigError, LoadedConfig};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub const SETTINGS_KEY: &str = "admin_settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRates {
    pub domestic_minor: i64,
    pub international_minor: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub timezone: String,
    pub currency: String,
    pub email_notifications: bool,
    pub order_notifications: bool,
    pub low_stock_alerts: bool,
    pub customer_signup_notifications: bool,
    pub two_factor_auth: bool,
    pub session_timeout_minutes: i64,
    pub password_expiry_days: i64,
    pub login_attempt_limit: i64,
    pub free_shipping_threshold_minor: i64,
    pub shipping_rates: ShippingRates,
    pub processing_time: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub google_analytics: String,
    pub facebook_pixel: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "NoMadWorx".to_string(),
            site_description: "Handcrafted Wood Art & Sculptures".to_string(),
            contact_email: "info@nomadworx.com".to_string(),
            contact_phone: "(555) 123-4567".to_string(),
            address: "123 Nomad Street, Craftsville, MT 59718".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            currency: "USD".to_string(),
            email_notifications: true,
            order_notifications: true,
            low_stock_alerts: true,
            customer_signup_notifications: true,
            two_factor_auth: false,
            session_timeout_minutes: 30,
            password_expiry_days: 90,
            login_attempt_limit: 5,
            free_shipping_threshold_minor: 10_000,
            shipping_rates: ShippingRates {
                domestic_minor: 1_500,
                international_minor: 4_500,
            },
            processing_time: "2-3 business days".to_string(),
            meta_title: "NoMadWorx - Handcrafted Wood Art".to_string(),
            meta_description: "Discover unique, handmade wood carvings and sculptures created with traditional techniques.".to_string(),
            meta_keywords: "wood carving, sculptures, handmade, crafts, art".to_string(),
            google_analytics: String::new(),
            facebook_pixel: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct SettingsRepo {
    store: Arc<dyn KeyValueStore>,
    defaults: SiteSettings,
}

impl SettingsRepo {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            defaults: SiteSettings::default(),
        }
    }

    pub fn load(&self) -> LoadedConfig<SiteSettings> {
        load_merged(&self.store, SETTINGS_KEY, &self.defaults)
    }

    pub fn update(&self, partial: &Value) -> Result<(), ConfigError> {
        save_merged(&self.store, SETTINGS_KEY, &self.defaults, partial)
    }
}
