use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::Booking;

const COLUMNS: &str =
    "id, date, time, client_name, client_phone, service_type, barber_name, notes, created_at";

pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    let created_at = booking.created_at.format("%Y-%m-%d %H:%M:%S%.f").to_string();

    conn.execute(
        "INSERT INTO bookings (id, date, time, client_name, client_phone, service_type, barber_name, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            booking.id,
            booking.date,
            booking.time,
            booking.client_name,
            booking.client_phone,
            booking.service_type,
            booking.barber_name,
            booking.notes,
            created_at,
        ],
    )?;
    Ok(())
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM bookings WHERE id = ?1"),
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns every booking in insertion order. Display ordering is the
/// frontend's concern.
pub fn get_all_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM bookings ORDER BY rowid ASC"))?;
    let rows = stmt.query_map([], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

/// Replaces the stored record wholesale. `created_at` is immutable and is
/// not part of the update. Returns false when the id is unknown.
pub fn update_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings
         SET date = ?1, time = ?2, client_name = ?3, client_phone = ?4,
             service_type = ?5, barber_name = ?6, notes = ?7
         WHERE id = ?8",
        params![
            booking.date,
            booking.time,
            booking.client_name,
            booking.client_phone,
            booking.service_type,
            booking.barber_name,
            booking.notes,
            booking.id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_booking(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

pub fn booking_exists(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let date: String = row.get(1)?;
    let time: String = row.get(2)?;
    let client_name: String = row.get(3)?;
    let client_phone: String = row.get(4)?;
    let service_type: String = row.get(5)?;
    let barber_name: String = row.get(6)?;
    let notes: Option<String> = row.get(7)?;
    let created_at_str: String = row.get(8)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S%.f")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        date,
        time,
        client_name,
        client_phone,
        service_type,
        barber_name,
        notes,
        created_at,
    })
}
