pub mod queries;
mod store;

pub use store::{BookingStore, SqliteStore};

use anyhow::Context;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::Booking;

/// Opens the database and creates the schema. A single table is all the
/// schema there is, so it is created inline instead of through a migration
/// runner.
pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         CREATE TABLE IF NOT EXISTS bookings (
             id TEXT PRIMARY KEY,
             date TEXT NOT NULL,
             time TEXT NOT NULL,
             client_name TEXT NOT NULL,
             client_phone TEXT NOT NULL,
             service_type TEXT NOT NULL,
             barber_name TEXT NOT NULL,
             notes TEXT,
             created_at TEXT NOT NULL
         );",
    )
    .context("failed to create schema")?;

    Ok(conn)
}

/// Inserts two sample bookings when the table is empty, mirroring the demo
/// data the product ships with. Returns the number of rows added.
pub fn seed_demo_data(
    conn: &Connection,
    today: NaiveDate,
    now: NaiveDateTime,
) -> anyhow::Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    let demo = [
        Booking {
            id: Uuid::new_v4().to_string(),
            date: (today + Duration::days(1)).format("%Y-%m-%d").to_string(),
            time: "10:00".to_string(),
            client_name: "John Doe".to_string(),
            client_phone: "(555) 123-4567".to_string(),
            service_type: "Classic Cut".to_string(),
            barber_name: "Alex".to_string(),
            notes: Some("Regular haircut".to_string()),
            created_at: now,
        },
        Booking {
            id: Uuid::new_v4().to_string(),
            date: (today + Duration::days(2)).format("%Y-%m-%d").to_string(),
            time: "14:30".to_string(),
            client_name: "Jane Smith".to_string(),
            client_phone: "(555) 987-6543".to_string(),
            service_type: "Beard Trim".to_string(),
            barber_name: "Jordan".to_string(),
            notes: None,
            created_at: now,
        },
    ];

    for booking in &demo {
        queries::insert_booking(conn, booking)?;
    }
    Ok(demo.len())
}
