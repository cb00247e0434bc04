use uuid::Uuid;

use crate::db::BookingStore;
use crate::errors::AppError;
use crate::models::{Booking, BookingPatch, BookingStats, CreateBooking};
use crate::services::clock::Clock;
use crate::services::{stats, validation};

fn not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}

pub async fn create(
    store: &dyn BookingStore,
    clock: &dyn Clock,
    input: CreateBooking,
) -> Result<Booking, AppError> {
    validation::validate_create(&input, clock.today()).map_err(AppError::Validation)?;

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        date: input.date,
        time: input.time,
        client_name: input.client_name,
        client_phone: input.client_phone,
        service_type: input.service_type,
        barber_name: input.barber_name,
        notes: input.notes,
        created_at: clock.now(),
    };

    Ok(store.insert(booking).await?)
}

pub async fn get_by_id(store: &dyn BookingStore, id: &str) -> Result<Booking, AppError> {
    store.get_by_id(id).await?.ok_or_else(not_found)
}

pub async fn get_all(store: &dyn BookingStore) -> Result<Vec<Booking>, AppError> {
    Ok(store.get_all().await?)
}

/// Merges the supplied fields onto the existing record and writes it back.
/// With `validate` set, the merged record must pass the create rules before
/// it is stored.
pub async fn update(
    store: &dyn BookingStore,
    clock: &dyn Clock,
    validate: bool,
    id: &str,
    patch: BookingPatch,
) -> Result<Booking, AppError> {
    let mut booking = get_by_id(store, id).await?;
    apply_patch(&mut booking, patch);

    if validate {
        let merged = CreateBooking {
            date: booking.date.clone(),
            time: booking.time.clone(),
            client_name: booking.client_name.clone(),
            client_phone: booking.client_phone.clone(),
            service_type: booking.service_type.clone(),
            barber_name: booking.barber_name.clone(),
            notes: booking.notes.clone(),
        };
        validation::validate_create(&merged, clock.today()).map_err(AppError::Validation)?;
    }

    if !store.update(&booking).await? {
        return Err(not_found());
    }
    Ok(booking)
}

pub async fn delete(store: &dyn BookingStore, id: &str) -> Result<(), AppError> {
    if !store.exists(id).await? {
        return Err(not_found());
    }
    store.delete(id).await?;
    Ok(())
}

pub async fn stats(store: &dyn BookingStore, clock: &dyn Clock) -> Result<BookingStats, AppError> {
    let bookings = store.get_all().await?;
    Ok(stats::compute(&bookings, clock.today()))
}

fn apply_patch(booking: &mut Booking, patch: BookingPatch) {
    if let Some(date) = non_empty(patch.date) {
        booking.date = date;
    }
    if let Some(time) = non_empty(patch.time) {
        booking.time = time;
    }
    if let Some(client_name) = non_empty(patch.client_name) {
        booking.client_name = client_name;
    }
    if let Some(client_phone) = non_empty(patch.client_phone) {
        booking.client_phone = client_phone;
    }
    if let Some(service_type) = non_empty(patch.service_type) {
        booking.service_type = service_type;
    }
    if let Some(barber_name) = non_empty(patch.barber_name) {
        booking.barber_name = barber_name;
    }
    // Unlike the fields above, notes applies even as an empty string; a
    // client can clear the note but not the other fields.
    if let Some(notes) = patch.notes {
        booking.notes = Some(notes);
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, SqliteStore};
    use chrono::{NaiveDate, NaiveDateTime};

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn setup() -> (SqliteStore, FixedClock) {
        let conn = db::init_db(":memory:").unwrap();
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2025, 6, 18)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        (SqliteStore::new(conn), clock)
    }

    fn valid_input() -> CreateBooking {
        CreateBooking {
            date: "2999-01-01".to_string(),
            time: "10:00".to_string(),
            client_name: "John Doe".to_string(),
            client_phone: "(555) 123-4567".to_string(),
            service_type: "Classic Cut".to_string(),
            barber_name: "Alex".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let (store, clock) = setup();

        let created = create(&store, &clock, valid_input()).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, clock.now());

        let fetched = get_by_id(&store, &created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_inserting() {
        let (store, clock) = setup();

        let mut input = valid_input();
        input.barber_name = "Unknown".to_string();

        let err = create(&store, &clock, input).await.unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.contains(&"Invalid barber name".to_string()));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(get_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_is_stable_between_calls() {
        let (store, clock) = setup();
        create(&store, &clock, valid_input()).await.unwrap();

        let first = get_all(&store).await.unwrap();
        let second = get_all(&store).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_merges_single_field() {
        let (store, clock) = setup();
        let created = create(&store, &clock, valid_input()).await.unwrap();

        let patch = BookingPatch {
            client_name: Some("New Name".to_string()),
            ..Default::default()
        };
        let updated = update(&store, &clock, false, &created.id, patch)
            .await
            .unwrap();

        assert_eq!(updated.client_name, "New Name");
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.time, created.time);
        assert_eq!(updated.client_phone, created.client_phone);
        assert_eq!(updated.service_type, created.service_type);
        assert_eq!(updated.barber_name, created.barber_name);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_ignores_empty_strings_except_notes() {
        let (store, clock) = setup();
        let mut input = valid_input();
        input.notes = Some("Regular haircut".to_string());
        let created = create(&store, &clock, input).await.unwrap();

        let patch = BookingPatch {
            client_name: Some(String::new()),
            notes: Some(String::new()),
            ..Default::default()
        };
        let updated = update(&store, &clock, false, &created.id, patch)
            .await
            .unwrap();

        assert_eq!(updated.client_name, "John Doe");
        assert_eq!(updated.notes, Some(String::new()));
    }

    #[tokio::test]
    async fn test_update_skips_validation_by_default() {
        let (store, clock) = setup();
        let created = create(&store, &clock, valid_input()).await.unwrap();

        let patch = BookingPatch {
            barber_name: Some("Unknown".to_string()),
            ..Default::default()
        };
        let updated = update(&store, &clock, false, &created.id, patch)
            .await
            .unwrap();
        assert_eq!(updated.barber_name, "Unknown");
    }

    #[tokio::test]
    async fn test_update_validates_when_enabled() {
        let (store, clock) = setup();
        let created = create(&store, &clock, valid_input()).await.unwrap();

        let patch = BookingPatch {
            barber_name: Some("Unknown".to_string()),
            ..Default::default()
        };
        let err = update(&store, &clock, true, &created.id, patch)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Nothing was written back.
        let fetched = get_by_id(&store, &created.id).await.unwrap();
        assert_eq!(fetched.barber_name, "Alex");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (store, clock) = setup();
        let err = update(&store, &clock, false, "missing", BookingPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let (store, clock) = setup();
        let created = create(&store, &clock, valid_input()).await.unwrap();

        delete(&store, &created.id).await.unwrap();
        let err = get_by_id(&store, &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = delete(&store, &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stats_counts_today_and_total() {
        let (store, clock) = setup();

        let mut today_input = valid_input();
        today_input.date = "2025-06-18".to_string();
        create(&store, &clock, today_input).await.unwrap();

        let mut future_input = valid_input();
        future_input.date = "2025-06-28".to_string();
        create(&store, &clock, future_input).await.unwrap();

        let result = stats(&store, &clock).await.unwrap();
        assert_eq!(result.total_count, 2);
        assert_eq!(result.today_count, 1);
        assert_eq!(result.week_count, 1);
    }
}
