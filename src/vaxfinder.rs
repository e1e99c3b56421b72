use std::error::Error;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use tokio::time::sleep;
use url::Url;

use crate::booker::BookingSession;
use crate::consts::{POLL_INTERVAL_MILLIS, POLL_JITTER_MILLIS, TIMED};
use crate::error::FetchError;
use crate::fetcher::SlotsClient;
use crate::filter::available_appointments;
use crate::location::AppointmentLocation;
use crate::methods::jitter_millis;
use crate::notify;
use crate::query::{FinderConfig, FinderQuery, SearchArgs};

#[derive(Debug)]
pub struct VaxFinder {
    config: FinderConfig,
    query: FinderQuery,
    slots: SlotsClient,
}

impl VaxFinder {
    pub fn try_new(args: &SearchArgs) -> Result<Self, Box<dyn Error>> {
        let config = FinderConfig::load()?;
        let query = FinderQuery::try_new(args)?;
        let slots = SlotsClient::new(config.endpoint.clone());

        Ok(Self { config, query, slots })
    }

    pub async fn find_and_book(&self) -> bool {
        let appointments = match self.search().await {
            Ok(appointments) => appointments,
            Err(e) => {
                warn!("availability check failed: {}", e);
                return false;
            }
        };

        let Some(nearest) = appointments.first() else {
            info!("no appointments found");
            return false;
        };

        notify::announce_appointments(&appointments);
        self.try_book(nearest).await
    }

    async fn search(&self) -> Result<Vec<AppointmentLocation>, FetchError> {
        info!(
            "searching for {:?} appointments within {} miles",
            self.query.types, self.query.max_distance
        );
        let locations = self.slots.fetch_locations().await?;
        Ok(available_appointments(locations, &self.query))
    }

    async fn try_book(&self, appointment: &AppointmentLocation) -> bool {
        if let Err(e) = Url::parse(&appointment.location.url) {
            warn!(
                "skipping booking, location url {:?} is invalid: {}",
                appointment.location.url, e
            );
            return false;
        }

        let session = match BookingSession::try_new(&self.config).await {
            Ok(session) => session,
            Err(e) => {
                warn!("could not start a booking session: {}", e);
                return false;
            }
        };

        let outcome = match session.book(&appointment.location.url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("booking attempt abandoned: {}", e);
                session.quit().await;
                return false;
            }
        };
        session.quit().await;

        info!("booking attempt finished: {}", outcome);
        if outcome.is_booked() {
            notify::notify_booked(appointment);
        }
        outcome.is_booked()
    }
}

pub async fn run() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = SearchArgs::parse();
    let finder = VaxFinder::try_new(&args)?;

    loop {
        let booked = if TIMED {
            timeit!(finder.find_and_book().await)
        } else {
            finder.find_and_book().await
        };

        if booked {
            break;
        }

        let delay = POLL_INTERVAL_MILLIS + jitter_millis(POLL_JITTER_MILLIS);
        sleep(Duration::from_millis(delay)).await;
    }

    Ok(())
}
