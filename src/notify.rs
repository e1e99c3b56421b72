use std::error::Error;
use std::time::Duration;

use chrono::{DateTime, Local};
use colored::Colorize;
use log::debug;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::consts::{ALERT_DURATION_MILLIS, ALERT_FREQUENCY_HZ};
use crate::location::AppointmentLocation;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn announce_appointments(appointments: &[AppointmentLocation]) {
    let headline = findings_headline(Local::now(), appointments.len());
    println!("{}", headline.green().bold());

    for appointment in appointments {
        println!(
            "  {:>6.1} mi  {} at {}, {} ({} open slots)",
            appointment.distance,
            appointment.location.name,
            appointment.location.street,
            appointment.location.city,
            appointment.location.open_appointment_slots(),
        );
    }
}

pub fn notify_booked(appointment: &AppointmentLocation) {
    let banner = booked_banner(Local::now(), appointment);
    println!("{}", banner.green().bold());

    if let Err(e) = alert_chime() {
        debug!("alert chime could not be played: {}", e);
    }
}

fn findings_headline(now: DateTime<Local>, count: usize) -> String {
    format!(
        "[{}] Found {} locations with open appointments",
        now.format(TIMESTAMP_FORMAT),
        count,
    )
}

fn booked_banner(now: DateTime<Local>, appointment: &AppointmentLocation) -> String {
    format!(
        "[{}] Appointment request submitted for {} ({:.1} miles away)",
        now.format(TIMESTAMP_FORMAT),
        appointment.location.name,
        appointment.distance,
    )
}

fn alert_chime() -> Result<(), Box<dyn Error>> {
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;

    let chime = SineWave::new(ALERT_FREQUENCY_HZ)
        .take_duration(Duration::from_millis(ALERT_DURATION_MILLIS))
        .amplify(0.20);
    sink.append(chime);
    sink.sleep_until_end();

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::location::{Location, SlotDetail};

    fn appointment() -> AppointmentLocation {
        AppointmentLocation {
            location: Location {
                name: "H-E-B Mueller".to_string(),
                store_number: 404,
                street: "1801 E 51st St".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip: "78723".to_string(),
                url: "https://heb.example/schedule/404".to_string(),
                latitude: Some(30.3),
                longitude: Some(-97.7),
                slot_details: vec![SlotDetail {
                    open_timeslots: 2,
                    open_appointment_slots: 5,
                    manufacturer: "Moderna".to_string(),
                }],
            },
            distance: 3.14159,
        }
    }

    #[test]
    fn console_summaries_carry_a_local_timestamp() {
        let noon = Local.with_ymd_and_hms(2021, 3, 15, 12, 30, 45).unwrap();

        assert_eq!(
            findings_headline(noon, 3),
            "[2021-03-15 12:30:45] Found 3 locations with open appointments"
        );
        assert_eq!(
            booked_banner(noon, &appointment()),
            "[2021-03-15 12:30:45] Appointment request submitted for H-E-B Mueller (3.1 miles away)"
        );
    }
}
