use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("an invalid JSON value was encountered")]
    ParseJsonError,
    #[error("port {:?} is invalid; ports must be between 1024 and 65535", .0)]
    ParsePortError(u64),
    #[error("latitude {:?} is invalid; latitude must be between -90 and 90", .0)]
    ParseLatitudeError(f64),
    #[error("longitude {:?} is invalid; longitude must be between -180 and 180", .0)]
    ParseLongitudeError(f64),
    #[error("{:?} is not a recognized vaccine manufacturer", .0)]
    ParseManufacturerError(String),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("availability request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("availability endpoint answered with status {0}")]
    StatusError(StatusCode),
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("webdriver command failed: {0}")]
    WebDriverError(#[from] thirtyfour::error::WebDriverError),
    #[error("chromedriver could not be started: {0}")]
    ChromedriverSpawnError(#[from] std::io::Error),
    #[error("attribute {:?} not found on the {} input", .0, .1)]
    MissingAttributeError(&'static str, &'static str),
}
