//! Builtin templates

mod business_card;
mod portfolio;
mod restaurant_menu;
mod saas_landing;

pub use business_card::BusinessCard;
pub use portfolio::Portfolio;
pub use restaurant_menu::RestaurantMenu;
pub use saas_landing::SaasLanding;

use crate::data::accent_alpha;
use crate::error::Result;
use crate::site::template::SiteTemplate;
use serde_json::{Map, Value};

/// Every builtin template, in catalog order
pub fn all() -> Result<Vec<Box<dyn SiteTemplate>>> {
    Ok(vec![
        Box::new(BusinessCard::new()?),
        Box::new(Portfolio::new()?),
        Box::new(RestaurantMenu::new()?),
        Box::new(SaasLanding::new()?),
    ])
}

/// Insert `accent_soft` / `accent_ring` blends of the `accent` field
fn insert_accent_blends(context: &mut Map<String, Value>) {
    let accent = context
        .get("accent")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    for (key, alpha) in [("accent_soft", 0.14), ("accent_ring", 0.35)] {
        let blend = accent_alpha(&accent, alpha).unwrap_or_else(|| "transparent".to_string());
        context.insert(key.to_string(), Value::String(blend));
    }
}
