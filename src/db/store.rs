use std::sync::Mutex;

use async_trait::async_trait;
use rusqlite::Connection;

use crate::db::queries;
use crate::models::Booking;

/// Storage contract for bookings. The store owns the canonical copy of
/// every record; callers always get owned clones back. Each operation is
/// atomic with respect to the others.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Adds a record. The caller has already assigned `id` and
    /// `created_at`, so this cannot conflict.
    async fn insert(&self, booking: Booking) -> anyhow::Result<Booking>;

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Booking>>;

    /// All records, in insertion order.
    async fn get_all(&self) -> anyhow::Result<Vec<Booking>>;

    /// Replaces the record with the same id wholesale. Returns false when
    /// the id is unknown.
    async fn update(&self, booking: &Booking) -> anyhow::Result<bool>;

    /// Removes the record if present; a missing id is a no-op returning
    /// false.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;

    async fn exists(&self, id: &str) -> anyhow::Result<bool>;
}

/// SQLite-backed store. The mutex serializes every operation, so readers
/// never observe a partially applied write.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl BookingStore for SqliteStore {
    async fn insert(&self, booking: Booking) -> anyhow::Result<Booking> {
        let conn = self.conn.lock().unwrap();
        queries::insert_booking(&conn, &booking)?;
        Ok(booking)
    }

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Booking>> {
        let conn = self.conn.lock().unwrap();
        queries::get_booking_by_id(&conn, id)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Booking>> {
        let conn = self.conn.lock().unwrap();
        queries::get_all_bookings(&conn)
    }

    async fn update(&self, booking: &Booking) -> anyhow::Result<bool> {
        let conn = self.conn.lock().unwrap();
        queries::update_booking(&conn, booking)
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.conn.lock().unwrap();
        queries::delete_booking(&conn, id)
    }

    async fn exists(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.conn.lock().unwrap();
        queries::booking_exists(&conn, id)
    }
}
