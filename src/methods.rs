use std::io;
use std::process::{Child, Command, Stdio};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::consts::{DEFAULT_USER_AGENT, USER_AGENTS};

pub fn format_str(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_USER_AGENT)
}

pub fn jitter_millis(limit: u64) -> u64 {
    rand::thread_rng().gen_range(0..=limit)
}

pub fn chromedriver_process(port: u16) -> io::Result<Child> {
    Command::new("chromedriver")
        .arg(format!("--port={}", port))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_str_fills_the_first_placeholder() {
        assert_eq!(format_str("#{} > [role=\"option\"]", "times-9"), "#times-9 > [role=\"option\"]");
        assert_eq!(format_str("no placeholder", "x"), "no placeholder");
    }

    #[test]
    fn jitter_stays_within_the_limit() {
        for _ in 0..100 {
            assert!(jitter_millis(1500) <= 1500);
        }
        assert_eq!(jitter_millis(0), 0);
    }

    #[test]
    fn user_agents_come_from_the_pool() {
        for _ in 0..20 {
            assert!(USER_AGENTS.contains(&random_user_agent()));
        }
    }
}
