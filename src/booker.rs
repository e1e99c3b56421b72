use std::process::Child;
use std::time::Duration;

use log::warn;
use strum::Display;
use thirtyfour::prelude::*;
use tokio::time::sleep;

use crate::consts::{
    ARIA_OWNS,
    APPOINTMENTS_GONE_TEXT,
    CHROMEDRIVER_STARTUP_MILLIS,
    DATE_STEP_PACING_MILLIS,
    LOCALHOST,
    NO_TIMESLOTS_TEXT,
    SUBMIT_STEP_PACING_MILLIS,
    TIME_STEP_PACING_MILLIS,
    WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use crate::error::BookingError;
use crate::methods::{chromedriver_process, format_str};
use crate::query::FinderConfig;
use crate::selector::*;

const DATE_LABEL: &str = "date";
const TIME_LABEL: &str = "time";

#[derive(Debug, Clone, Copy, Display)]
pub enum BookingOutcome {
    #[strum(serialize = "appointment request submitted")]
    Submitted,
    #[strum(serialize = "appointments no longer available at this location")]
    NoLongerAvailable,
    #[strum(serialize = "no available time slots at this location")]
    NoTimeslots,
    #[strum(serialize = "the booking form could not be submitted")]
    SubmitFailed,
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Submitted)
    }
}

#[derive(Debug)]
pub struct Interactees {
    pub date_input: WebElement,
    pub time_input: WebElement,
}

#[derive(Debug)]
pub struct BookingSession {
    driver: WebDriver,
    chromedriver: Option<Child>,
}

impl BookingSession {
    pub async fn try_new(config: &FinderConfig) -> Result<Self, BookingError> {
        let chromedriver = if config.run_chromedriver {
            let child = chromedriver_process(config.port)?;
            sleep(Duration::from_millis(CHROMEDRIVER_STARTUP_MILLIS)).await;
            Some(child)
        } else {
            None
        };

        let mut capabilities = DesiredCapabilities::chrome();
        capabilities.add_arg(format!("--window-size={},{}", WINDOW_WIDTH, WINDOW_HEIGHT).as_str())?;
        if config.headless {
            capabilities.add_arg("--headless")?;
        }

        let server_url = format!("http://{}:{}", LOCALHOST, config.port);
        let driver = match WebDriver::new(server_url.as_str(), capabilities).await {
            Ok(driver) => driver,
            Err(e) => {
                if let Some(mut child) = chromedriver {
                    if let Err(kill_error) = child.kill() {
                        warn!("chromedriver process did not exit cleanly: {}", kill_error);
                    }
                }
                return Err(BookingError::from(e));
            }
        };

        Ok(Self { driver, chromedriver })
    }

    pub async fn book(&self, url: &str) -> Result<BookingOutcome, BookingError> {
        self.driver.goto(url).await?;

        if self.banner_matches(UNAVAILABLE_BANNER, APPOINTMENTS_GONE_TEXT).await {
            return Ok(BookingOutcome::NoLongerAvailable);
        }
        if self.banner_matches(NO_TIMESLOTS_NOTICE, NO_TIMESLOTS_TEXT).await {
            return Ok(BookingOutcome::NoTimeslots);
        }

        let interactees = swallow!(self.locate_interactees().await, "booking inputs not found");
        if let Some(interactees) = interactees {
            sleep(Duration::from_millis(DATE_STEP_PACING_MILLIS)).await;
            swallow!(
                self.pick_first_option(&interactees.date_input, DATE_LABEL).await,
                "date selection step failed"
            );

            sleep(Duration::from_millis(TIME_STEP_PACING_MILLIS)).await;
            swallow!(
                self.pick_first_option(&interactees.time_input, TIME_LABEL).await,
                "time selection step failed"
            );
        }

        sleep(Duration::from_millis(SUBMIT_STEP_PACING_MILLIS)).await;
        Ok(match swallow!(self.submit().await, "submit step failed") {
            Some(()) => BookingOutcome::Submitted,
            None => BookingOutcome::SubmitFailed,
        })
    }

    pub async fn quit(self) {
        if let Err(e) = self.driver.quit().await {
            warn!("webdriver did not quit cleanly: {}", e);
        }
        if let Some(mut child) = self.chromedriver {
            if let Err(e) = child.kill() {
                warn!("chromedriver process did not exit cleanly: {}", e);
            }
        }
    }
}

impl BookingSession {
    async fn locate_interactees(&self) -> Result<Interactees, BookingError> {
        let date_input = self.query_by_css(DATE_INPUT).await?;
        let time_input = self.query_by_css(TIME_INPUT).await?;

        Ok(Interactees { date_input, time_input })
    }

    async fn banner_matches(&self, banner: CssStr, text: &str) -> bool {
        match self.driver.find(By::Css(banner)).await {
            Ok(element) => match element.text().await {
                Ok(value) => value.trim() == text,
                Err(_) => false,
            },
            Err(_) => false,
        }
    }

    async fn pick_first_option(
        &self,
        input: &WebElement,
        label: &'static str,
    ) -> Result<(), BookingError> {
        input.click().await?;

        let listbox_id = input
            .attr(ARIA_OWNS)
            .await?
            .ok_or(BookingError::MissingAttributeError(ARIA_OWNS, label))?;

        let option_selector = format_str(OPTION_LIST_FORMAT.as_str(), &listbox_id);
        let option = self.driver.query(By::Css(option_selector)).first().await?;
        Ok(option.click().await?)
    }

    async fn submit(&self) -> Result<(), BookingError> {
        let submit_button = self.query_by_css(SUBMIT_BUTTON).await?;
        submit_button.wait_until().clickable().await?;
        Ok(submit_button.click().await?)
    }

    #[inline]
    async fn query_by_css(&self, css: CssStr) -> WebDriverResult<WebElement> {
        self.driver.query(By::Css(css)).first().await
    }
}
