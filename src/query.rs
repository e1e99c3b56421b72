use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use serde_json::{self, Value};

use crate::consts::{
    CONFIG_FILE,
    DEFAULT_HEADLESS,
    DEFAULT_HOME_LATITUDE,
    DEFAULT_HOME_LONGITUDE,
    DEFAULT_MAX_DISTANCE_MILES,
    DEFAULT_PORT,
    DEFAULT_RUN_CHROMEDRIVER,
    DEFAULT_TYPES,
    MAX_PORT,
    MIN_PORT,
    VACCINE_LOCATIONS_URL,
};
use crate::error::ParseError;
use crate::location::{Coordinates, Manufacturer};

const PORT: &str = "port";
const HEADLESS: &str = "headless";
const RUN_CHROMEDRIVER: &str = "run_chromedriver";
const ENDPOINT: &str = "endpoint";

#[derive(Debug, Parser)]
#[command(name = "vaxfinder")]
#[command(about = "Polls retail vaccine appointment availability and books the nearest open slot")]
pub struct SearchArgs {
    #[arg(long, default_value_t = DEFAULT_HOME_LATITUDE, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, default_value_t = DEFAULT_HOME_LONGITUDE, allow_negative_numbers = true)]
    pub long: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE_MILES)]
    pub distance: f64,

    #[arg(long, value_delimiter = ',', default_value = DEFAULT_TYPES)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FinderQuery {
    pub home: Coordinates,
    pub max_distance: f64,
    pub types: Vec<Manufacturer>,
}

impl FinderQuery {
    pub fn try_new(args: &SearchArgs) -> Result<Self, ParseError> {
        if !(-90.0..=90.0).contains(&args.lat) {
            return Err(ParseError::ParseLatitudeError(args.lat));
        }
        if !(-180.0..=180.0).contains(&args.long) {
            return Err(ParseError::ParseLongitudeError(args.long));
        }

        let types: Vec<Manufacturer> = args
            .types
            .iter()
            .map(|value| Manufacturer::try_from(value.as_str()))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            home: Coordinates::new(args.lat, args.long),
            max_distance: args.distance,
            types,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub port: u16,
    pub headless: bool,
    pub run_chromedriver: bool,
    pub endpoint: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            headless: DEFAULT_HEADLESS,
            run_chromedriver: DEFAULT_RUN_CHROMEDRIVER,
            endpoint: VACCINE_LOCATIONS_URL.to_owned(),
        }
    }
}

impl FinderConfig {
    pub fn try_new(config: &Value) -> Result<Self, ParseError> {
        let port = match &config[PORT] {
            Value::Null => DEFAULT_PORT,
            value => {
                let port = value.as_u64().ok_or(ParseError::ParseJsonError)?;
                if !(MIN_PORT..=MAX_PORT).contains(&port) {
                    return Err(ParseError::ParsePortError(port));
                }
                port as u16
            }
        };

        let headless = match &config[HEADLESS] {
            Value::Null => DEFAULT_HEADLESS,
            value => value.as_bool().ok_or(ParseError::ParseJsonError)?,
        };

        let run_chromedriver = match &config[RUN_CHROMEDRIVER] {
            Value::Null => DEFAULT_RUN_CHROMEDRIVER,
            value => value.as_bool().ok_or(ParseError::ParseJsonError)?,
        };

        let endpoint = match &config[ENDPOINT] {
            Value::Null => VACCINE_LOCATIONS_URL.to_owned(),
            value => value.as_str().ok_or(ParseError::ParseJsonError)?.to_owned(),
        };

        Ok(Self { port, headless, run_chromedriver, endpoint })
    }

    pub fn load() -> Result<Self, Box<dyn Error>> {
        let file = match File::open(CONFIG_FILE) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Box::new(e)),
        };

        let reader = BufReader::new(file);
        let json_config: Value = serde_json::from_reader(reader)?;
        Ok(Self::try_new(&json_config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(lat: f64, long: f64, distance: f64, types: &[&str]) -> SearchArgs {
        SearchArgs {
            lat,
            long,
            distance,
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn query_accepts_the_hardcoded_defaults() {
        let args = args(
            DEFAULT_HOME_LATITUDE,
            DEFAULT_HOME_LONGITUDE,
            DEFAULT_MAX_DISTANCE_MILES,
            &["Pfizer", "Moderna", "Janssen"],
        );
        let query = FinderQuery::try_new(&args).unwrap();

        assert_eq!(query.home, Coordinates::new(30.267153, -97.743057));
        assert_eq!(query.max_distance, 25.0);
        assert_eq!(
            query.types,
            vec![Manufacturer::Pfizer, Manufacturer::Moderna, Manufacturer::Janssen]
        );
    }

    #[test]
    fn query_rejects_out_of_range_coordinates() {
        let bad_lat = args(95.0, -97.0, 25.0, &["Pfizer"]);
        assert!(matches!(
            FinderQuery::try_new(&bad_lat),
            Err(ParseError::ParseLatitudeError(_))
        ));

        let bad_long = args(30.0, -200.0, 25.0, &["Pfizer"]);
        assert!(matches!(
            FinderQuery::try_new(&bad_long),
            Err(ParseError::ParseLongitudeError(_))
        ));
    }

    #[test]
    fn query_accepts_coordinates_at_the_valid_extremes() {
        let southernmost = args(-90.0, 180.0, 25.0, &["Pfizer"]);
        let query = FinderQuery::try_new(&southernmost).unwrap();
        assert_eq!(query.home, Coordinates::new(-90.0, 180.0));

        let northernmost = args(90.0, -180.0, 25.0, &["Pfizer"]);
        let query = FinderQuery::try_new(&northernmost).unwrap();
        assert_eq!(query.home, Coordinates::new(90.0, -180.0));
    }

    #[test]
    fn query_rejects_unknown_manufacturers() {
        let unknown = args(30.0, -97.0, 25.0, &["Pfizer", "Sputnik"]);
        assert!(matches!(
            FinderQuery::try_new(&unknown),
            Err(ParseError::ParseManufacturerError(name)) if name == "Sputnik"
        ));
    }

    #[test]
    fn cli_splits_comma_separated_types() {
        let parsed = SearchArgs::try_parse_from([
            "vaxfinder",
            "--lat",
            "29.424122",
            "--long",
            "-98.493628",
            "--distance",
            "10",
            "--types",
            "Moderna,Janssen",
        ])
        .unwrap();

        assert_eq!(parsed.lat, 29.424122);
        assert_eq!(parsed.long, -98.493628);
        assert_eq!(parsed.distance, 10.0);
        assert_eq!(parsed.types, vec!["Moderna".to_string(), "Janssen".to_string()]);
    }

    #[test]
    fn cli_applies_defaults_when_unset() {
        let parsed = SearchArgs::try_parse_from(["vaxfinder"]).unwrap();

        assert_eq!(parsed.lat, DEFAULT_HOME_LATITUDE);
        assert_eq!(parsed.long, DEFAULT_HOME_LONGITUDE);
        assert_eq!(parsed.distance, DEFAULT_MAX_DISTANCE_MILES);
        assert_eq!(
            parsed.types,
            vec!["Pfizer".to_string(), "Moderna".to_string(), "Janssen".to_string()]
        );
    }

    #[test]
    fn config_defaults_apply_to_missing_keys() {
        let config = FinderConfig::try_new(&json!({})).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.headless, DEFAULT_HEADLESS);
        assert_eq!(config.run_chromedriver, DEFAULT_RUN_CHROMEDRIVER);
        assert_eq!(config.endpoint, VACCINE_LOCATIONS_URL);
    }

    #[test]
    fn config_reads_every_knob() {
        let config = FinderConfig::try_new(&json!({
            "port": 4444,
            "headless": true,
            "run_chromedriver": true,
            "endpoint": "http://127.0.0.1:8080/vaccine_locations.json"
        }))
        .unwrap();

        assert_eq!(config.port, 4444);
        assert!(config.headless);
        assert!(config.run_chromedriver);
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/vaccine_locations.json");
    }

    #[test]
    fn config_rejects_wrong_typed_values() {
        assert!(matches!(
            FinderConfig::try_new(&json!({ "headless": "yes" })),
            Err(ParseError::ParseJsonError)
        ));
        assert!(matches!(
            FinderConfig::try_new(&json!({ "endpoint": 8080 })),
            Err(ParseError::ParseJsonError)
        ));
        assert!(matches!(
            FinderConfig::try_new(&json!({ "port": "9515" })),
            Err(ParseError::ParseJsonError)
        ));
    }

    #[test]
    fn config_rejects_out_of_range_ports() {
        assert!(matches!(
            FinderConfig::try_new(&json!({ "port": 80 })),
            Err(ParseError::ParsePortError(80))
        ));
        assert!(matches!(
            FinderConfig::try_new(&json!({ "port": 70000 })),
            Err(ParseError::ParsePortError(70000))
        ));
    }
}
