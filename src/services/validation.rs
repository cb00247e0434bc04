use chrono::NaiveDate;

use crate::models::CreateBooking;

pub const BARBERS: [&str; 4] = ["Alex", "Jordan", "Sam", "Taylor"];

pub const SERVICES: [&str; 3] = ["Classic Cut", "Beard Trim", "Hot Shave"];

/// Bookable half-hour slots, 09:00 through 19:30.
pub const TIME_SLOTS: [&str; 22] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30", "18:00", "18:30",
    "19:00", "19:30",
];

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 20;
const MAX_NOTES_LEN: usize = 500;

/// Checks a proposed booking against the shop's rules, collecting every
/// violation rather than stopping at the first. Runs on create; updates
/// only go through this when `VALIDATE_UPDATES` is switched on.
pub fn validate_create(input: &CreateBooking, today: NaiveDate) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if input.client_name.is_empty() {
        errors.push("Client name is required".to_string());
    } else if input.client_name.chars().count() > MAX_NAME_LEN {
        errors.push("Client name must not exceed 100 characters".to_string());
    }

    if input.client_phone.is_empty() {
        errors.push("Phone number is required".to_string());
    } else {
        if !input.client_phone.chars().all(is_phone_char) {
            errors.push("Invalid phone number format".to_string());
        }
        if input.client_phone.chars().count() > MAX_PHONE_LEN {
            errors.push("Phone number must not exceed 20 characters".to_string());
        }
    }

    if input.date.is_empty() {
        errors.push("Date is required".to_string());
    } else {
        match parse_date(&input.date) {
            Some(date) if date < today => {
                errors.push("Date cannot be in the past".to_string());
            }
            Some(_) => {}
            None => errors.push("Invalid date format".to_string()),
        }
    }

    if input.time.is_empty() {
        errors.push("Time is required".to_string());
    } else if !TIME_SLOTS.contains(&input.time.as_str()) {
        errors.push("Invalid time slot".to_string());
    }

    if input.service_type.is_empty() {
        errors.push("Service type is required".to_string());
    } else if !SERVICES.contains(&input.service_type.as_str()) {
        errors.push("Invalid service type".to_string());
    }

    if input.barber_name.is_empty() {
        errors.push("Barber name is required".to_string());
    } else if !BARBERS.contains(&input.barber_name.as_str()) {
        errors.push("Invalid barber name".to_string());
    }

    if let Some(notes) = &input.notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            errors.push("Notes must not exceed 500 characters".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '(' | ')' | '-')
}
