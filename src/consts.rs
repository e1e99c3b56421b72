pub const TIMED: bool = true;

pub const DEFAULT_RUN_CHROMEDRIVER: bool = false;
pub const DEFAULT_HEADLESS: bool = false;
// chromedriver --port={port}
pub const DEFAULT_PORT: u16 = 9515;

pub const MIN_PORT: u64 = 1024;
pub const MAX_PORT: u64 = 65535;
pub const LOCALHOST: &str = "127.0.0.1";

pub const CONFIG_FILE: &str = "config.json";

pub const VACCINE_LOCATIONS_URL: &str =
    "https://heb-ecom-covid-vaccine.hebdigital-prd.com/vaccine_locations.json";

pub const DEFAULT_HOME_LATITUDE: f64 = 30.267153;
pub const DEFAULT_HOME_LONGITUDE: f64 = -97.743057;
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 25.0;
pub const DEFAULT_TYPES: &str = "Pfizer,Moderna,Janssen";

pub const METERS_PER_MILE: f64 = 1609.34;
pub const EARTH_RADIUS_METERS: f64 = 6378137.0;

pub const POLL_INTERVAL_MILLIS: u64 = 10_000;
pub const POLL_JITTER_MILLIS: u64 = 1_500;

pub const DATE_STEP_PACING_MILLIS: u64 = 721;
pub const TIME_STEP_PACING_MILLIS: u64 = 655;
pub const SUBMIT_STEP_PACING_MILLIS: u64 = 600;
pub const CHROMEDRIVER_STARTUP_MILLIS: u64 = 400;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

pub const ARIA_OWNS: &str = "aria-owns";

pub const APPOINTMENTS_GONE_TEXT: &str =
    "Appointments are no longer available for this location.";
pub const NO_TIMESLOTS_TEXT: &str = "There are no available time slots.";

pub const ALERT_FREQUENCY_HZ: f32 = 880.0;
pub const ALERT_DURATION_MILLIS: u64 = 450;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

pub static USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:123.0) Gecko/20100101 Firefox/123.0",
];
