//! First-run reference data (barbers, logins, services, weekly hours)

use rust_decimal::Decimal;

use super::Repository;
use crate::error::AppResult;

const SEED_BARBERS: [(&str, &str, &str, &str, &str); 3] = [
    (
        "calvin",
        "Calvin Berkins",
        "Owner & Master Barber",
        "Over 30 years of professional experience. Owner and founder of Shear Magic.",
        "/images/calvin.png",
    ),
    (
        "darrien",
        "Darrien Berkins",
        "Barber",
        "Specializing in modern cuts, fades, and precision styling.",
        "/images/darrien.png",
    ),
    (
        "danielle",
        "Danielle Valentine",
        "Stylist & Barber",
        "Expert in styling, coloring, and all hair services.",
        "/images/danielle.png",
    ),
];

const SEED_SERVICES: [(&str, i64, i32, &str); 7] = [
    ("Adult Haircut", 20, 30, "Classic haircut with consultation"),
    ("Kid's Cut", 15, 30, "Haircut for children 12 and under"),
    ("Hot Shave", 25, 30, "Traditional hot towel straight razor shave"),
    ("Beard Trim", 5, 15, "Shape and trim your beard"),
    ("Razor Edge Up", 3, 15, "Clean up your edges"),
    ("Design", 3, 15, "Custom hair design or pattern"),
    ("Coloring", 30, 60, "Full hair coloring service"),
];

/// Weekly hours for day 0 (Sunday) to 6 (Saturday)
fn seed_hours(day_of_week: i16) -> (bool, &'static str, &'static str) {
    match day_of_week {
        1..=5 => (true, "10:00", "17:00"),
        6 => (true, "09:00", "14:00"),
        _ => (false, "10:00", "17:00"),
    }
}

impl Repository {
    /// Populate an empty database. Returns false when barbers already exist.
    pub async fn seed_defaults(&self, password_hash: &str) -> AppResult<bool> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM barbers")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for (username, name, title, bio, image_url) in SEED_BARBERS {
            let user_id: i32 = sqlx::query_scalar(
                "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id"
            )
            .bind(username)
            .bind(password_hash)
            .fetch_one(&mut *tx)
            .await?;

            let barber_id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO barbers (name, title, bio, image_url, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
                "#,
            )
            .bind(name)
            .bind(title)
            .bind(bio)
            .bind(image_url)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

            for day in 0..=6i16 {
                let (is_working, start, end) = seed_hours(day);
                sqlx::query(
                    r#"
                    INSERT INTO schedules (barber_id, day_of_week, is_working, start_time, end_time)
                    VALUES ($1, $2, $3, $4::time, $5::time)
                    "#,
                )
                .bind(barber_id)
                .bind(day)
                .bind(is_working)
                .bind(start)
                .bind(end)
                .execute(&mut *tx)
                .await?;
            }
        }

        for (name, price, duration, description) in SEED_SERVICES {
            sqlx::query(
                "INSERT INTO services (name, price, duration, description) VALUES ($1, $2, $3, $4)"
            )
            .bind(name)
            .bind(Decimal::from(price))
            .bind(duration)
            .bind(description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
