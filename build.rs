use std::env;
use std::fs;
use std::path::Path;

// Variables read by `AppConfig::from_env` through `option_env!`.
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "PAGE_SIZE",
    "SEARCH_DEBOUNCE_MS",
    "SCROLL_THRESHOLD",
    "TOAST_DURATION_MS",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Ignoring unknown key in .env: {}", key);
                    continue;
                }

                // The real environment wins over .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults. See .env.example.");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
