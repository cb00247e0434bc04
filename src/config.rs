use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Origin the frontend is served from, allowed through CORS.
    pub cors_origin: String,
    /// Insert two sample bookings into an empty database at startup.
    pub seed_demo_data: bool,
    /// Re-run the create validation rules on update. Off by default: the
    /// product historically accepted any edit, and some deployments rely
    /// on that.
    pub validate_updates: bool,
    /// Fixed UTC offset for "today" and the stats week window. Unset means
    /// the host's local time zone.
    pub utc_offset_minutes: Option<i32>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "barbershop.db".to_string()),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            seed_demo_data: env_flag("SEED_DEMO_DATA", true),
            validate_updates: env_flag("VALIDATE_UPDATES", false),
            utc_offset_minutes: env::var("UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
