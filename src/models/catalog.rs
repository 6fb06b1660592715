//! Catalog reference data (barbers and services)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A barber working at the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Barber {
    pub id: i32,
    pub name: String,
    /// Job title (e.g. "Master Barber")
    pub title: String,
    pub bio: String,
    /// Portrait path or URL
    pub image_url: Option<String>,
}

/// A bookable service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: i32,
    pub name: String,
    /// Base price in shop currency units
    pub price: Decimal,
    /// Duration in minutes
    pub duration: i32,
    pub description: String,
}

impl Barber {
    /// Barbers served when the store cannot be reached
    pub fn fallback() -> Vec<Barber> {
        vec![
            Barber {
                id: 1,
                name: "Calvin Berkins".to_string(),
                title: "Master Barber".to_string(),
                bio: "30+ years experience".to_string(),
                image_url: None,
            },
            Barber {
                id: 2,
                name: "Darrien Berkins".to_string(),
                title: "Senior Barber".to_string(),
                bio: "Fade specialist".to_string(),
                image_url: None,
            },
            Barber {
                id: 3,
                name: "Danielle Valentine".to_string(),
                title: "Stylist".to_string(),
                bio: "All styles welcome".to_string(),
                image_url: None,
            },
        ]
    }
}

impl Service {
    /// Services served when the store cannot be reached
    pub fn fallback() -> Vec<Service> {
        [
            (1, "Haircut", 20, 30, "Classic haircut"),
            (2, "Skin Fade", 25, 45, "Sharp skin fade"),
            (3, "Shave", 15, 20, "Hot towel shave"),
            (4, "Haircut & Beard", 35, 45, "Full grooming"),
        ]
        .into_iter()
        .map(|(id, name, price, duration, description)| Service {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
            duration,
            description: description.to_string(),
        })
        .collect()
    }
}
