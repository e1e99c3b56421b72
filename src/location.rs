use serde::Deserialize;
use strum::{Display, IntoStaticStr};

use crate::consts::{EARTH_RADIUS_METERS, METERS_PER_MILE};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn distance_miles(&self, other: Coordinates) -> f64 {
        let from_latitude = self.latitude.to_radians();
        let to_latitude = other.latitude.to_radians();
        let delta_latitude = (other.latitude - self.latitude).to_radians();
        let delta_longitude = (other.longitude - self.longitude).to_radians();

        let half_chord = (delta_latitude / 2.0).sin().powi(2)
            + from_latitude.cos() * to_latitude.cos() * (delta_longitude / 2.0).sin().powi(2);
        let arc = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

        arc * EARTH_RADIUS_METERS / METERS_PER_MILE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Manufacturer {
    Pfizer,
    Moderna,
    Janssen,
}

impl Manufacturer {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl TryFrom<&str> for Manufacturer {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Pfizer" => Ok(Manufacturer::Pfizer),
            "Moderna" => Ok(Manufacturer::Moderna),
            "Janssen" => Ok(Manufacturer::Janssen),
            _ => Err(ParseError::ParseManufacturerError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VaccineLocations {
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDetail {
    pub open_timeslots: u32,
    pub open_appointment_slots: u32,
    pub manufacturer: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub store_number: u32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub url: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub slot_details: Vec<SlotDetail>,
}

impl Location {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn open_appointment_slots(&self) -> u32 {
        self.slot_details
            .iter()
            .map(|slot| slot.open_appointment_slots)
            .sum()
    }

    pub fn has_open_slots(&self) -> bool {
        self.open_appointment_slots() > 0
    }

    pub fn offers_any(&self, types: &[Manufacturer]) -> bool {
        self.slot_details
            .iter()
            .any(|slot| types.iter().any(|accepted| accepted.as_str() == slot.manufacturer))
    }
}

#[derive(Debug, Clone)]
pub struct AppointmentLocation {
    pub location: Location,
    pub distance: f64,
}
