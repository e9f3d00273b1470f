use std::sync::{Mutex, MutexGuard, OnceLock};

use bookstore_config::{
    api_base_url, Config, Mode, ProcessEnv, UrlSource, CLUSTER_API_URL, CONFIG, DEFAULT_API_URL,
    MODE_VAR, OVERRIDE_VAR,
};

fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|e| e.into_inner())
}

/// Restores the touched variables when dropped.
struct EnvGuard {
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn new() -> Self {
        let entries = [MODE_VAR, OVERRIDE_VAR]
            .into_iter()
            .map(|name| (name, std::env::var(name).ok()))
            .collect();
        Self { entries }
    }

    fn set(&self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

#[test]
fn reads_process_environment() {
    let _lock = env_lock();
    let env = EnvGuard::new();

    env.set(MODE_VAR, Some("production"));
    env.set(OVERRIDE_VAR, Some("http://example.com/api"));
    assert_eq!(Config::from_env(&ProcessEnv).api_base_url, CLUSTER_API_URL);

    env.set(MODE_VAR, Some("development"));
    let cfg = Config::from_env(&ProcessEnv);
    assert_eq!(cfg.api_base_url, "http://example.com/api");
    assert_eq!(cfg.source, UrlSource::Override);

    env.set(OVERRIDE_VAR, Some(""));
    assert_eq!(Config::from_env(&ProcessEnv).api_base_url, DEFAULT_API_URL);

    env.set(MODE_VAR, None);
    env.set(OVERRIDE_VAR, None);
    let cfg = Config::from_env(&ProcessEnv);
    assert_eq!(cfg.mode, Mode::Unset);
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
}

#[test]
fn global_config_is_computed_once() {
    let _lock = env_lock();
    let env = EnvGuard::new();

    env.set(MODE_VAR, Some("development"));
    env.set(OVERRIDE_VAR, Some("http://first.example/api"));
    assert_eq!(api_base_url(), "http://first.example/api");

    env.set(MODE_VAR, Some("production"));
    env.set(OVERRIDE_VAR, Some("http://second.example/api"));
    assert_eq!(api_base_url(), "http://first.example/api");
    assert_eq!(CONFIG.source, UrlSource::Override);
    assert_eq!(CONFIG.endpoint("books"), "http://first.example/api/books");
}

#[cfg(unix)]
#[test]
fn non_utf8_override_counts_as_unset() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _lock = env_lock();
    let env = EnvGuard::new();

    env.set(MODE_VAR, Some("development"));
    std::env::set_var(OVERRIDE_VAR, OsStr::from_bytes(b"http://\xff/api"));

    let cfg = Config::from_env(&ProcessEnv);
    assert_eq!(cfg.mode, Mode::Development);
    assert_eq!(cfg.source, UrlSource::Default);
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
}
