use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled appointment. `date` and `time` are kept in their wire form
/// (`YYYY-MM-DD` and `HH:MM`); both are checked on create, but stored rows
/// are never re-validated, so readers must not assume `date` parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub service_type: String,
    pub barber_name: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Fields the caller supplies on create; `id` and `created_at` are assigned
/// by the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub barber_name: String,
    pub notes: Option<String>,
}

/// Partial update. Every field is an explicit present-or-absent marker so
/// the merge can distinguish "not supplied" from "supplied empty". The six
/// string fields treat an empty string as not supplied; `notes` applies
/// whenever present, empty string included.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub service_type: Option<String>,
    pub barber_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_count: i64,
    pub today_count: i64,
    pub week_count: i64,
}
