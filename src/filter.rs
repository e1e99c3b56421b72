use crate::location::{AppointmentLocation, Location};
use crate::query::FinderQuery;

pub fn available_appointments(
    locations: Vec<Location>,
    query: &FinderQuery,
) -> Vec<AppointmentLocation> {
    let mut appointments: Vec<AppointmentLocation> = locations
        .into_iter()
        .filter_map(|location| appointment_within_range(location, query))
        .collect();

    appointments.sort_by(|first, second| first.distance.total_cmp(&second.distance));
    appointments
}

fn appointment_within_range(
    location: Location,
    query: &FinderQuery,
) -> Option<AppointmentLocation> {
    let coordinates = location.coordinates()?;
    if !location.has_open_slots() || !location.offers_any(&query.types) {
        return None;
    }

    let distance = query.home.distance_miles(coordinates);
    (distance <= query.max_distance).then(|| AppointmentLocation { location, distance })
}
