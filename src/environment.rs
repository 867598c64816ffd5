use std::env;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn u32(
        env_name: &str,
        default: u32,
    ) -> u32 {
        env::var(env_name).ok().and_then(|env| env.parse::<u32>().ok()).unwrap_or(default)
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> u64 {
        env::var(env_name).ok().and_then(|env| env.parse::<u64>().ok()).unwrap_or(default)
    }
}
