use std::str::FromStr;

use dotenv::dotenv;

pub const STRESS_WORKERS: &str = "STRESS_WORKERS";

pub const STRESS_ROUNDS: &str = "STRESS_ROUNDS";

pub const STRESS_LOG_LEVEL: &str = "STRESS_LOG_LEVEL";

pub fn init() {
    dotenv().ok();
}

pub fn get_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => value.parse().unwrap_or(default),
        Err(_) => default,
    }
}
