use crate::config::AppConfig;
use crate::db::BookingStore;
use crate::services::clock::Clock;

pub struct AppState {
    pub store: Box<dyn BookingStore>,
    pub clock: Box<dyn Clock>,
    pub config: AppConfig,
}
