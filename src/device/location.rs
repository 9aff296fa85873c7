//! Geolocation capability used by the check-in flow.

use crate::config::LocationConfig;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    Granted,
    Denied,
}

pub trait LocationProvider: Send + Sync {
    /// False off-mobile: no permission is asked and no coordinates are sent.
    fn is_available(&self) -> bool;
    fn request_permission(&self) -> AppResult<Permission>;
    /// Blocking position fix. Callers bound it with `position_within`.
    fn current_position(&self) -> AppResult<Coordinates>;
    fn timeout(&self) -> Duration;
}

/// Run the provider on a helper thread and give up after `timeout`.
/// Any failure, including the deadline, is reported as `LocationUnavailable`.
pub fn position_within(
    provider: Arc<dyn LocationProvider>,
    timeout: Duration,
) -> AppResult<Coordinates> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("geolocation".into())
        .spawn(move || {
            let _ = tx.send(provider.current_position());
        })?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(coords)) => Ok(coords),
        Ok(Err(AppError::LocationUnavailable(msg))) => Err(AppError::LocationUnavailable(msg)),
        Ok(Err(other)) => Err(AppError::LocationUnavailable(other.to_string())),
        Err(RecvTimeoutError::Timeout) => Err(AppError::LocationUnavailable(format!(
            "no position fix within {}s",
            timeout.as_secs()
        ))),
        Err(RecvTimeoutError::Disconnected) => Err(AppError::LocationUnavailable(
            "location provider stopped unexpectedly".into(),
        )),
    }
}

/// Location taken from the config file, optionally overridden per command.
#[derive(Debug, Clone)]
pub struct ConfiguredLocation {
    enabled: bool,
    permission: Permission,
    coords: Option<Coordinates>,
    timeout: Duration,
}

impl ConfiguredLocation {
    pub fn from_config(cfg: &LocationConfig) -> Self {
        let coords = match (cfg.latitude, cfg.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };
        Self {
            enabled: cfg.enabled,
            permission: cfg.permission,
            coords,
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    /// Coordinates given on the command line win over the config file and
    /// switch the capability on.
    pub fn with_override(mut self, lat: Option<f64>, lon: Option<f64>) -> Self {
        if let (Some(latitude), Some(longitude)) = (lat, lon) {
            self.enabled = true;
            self.coords = Some(Coordinates {
                latitude,
                longitude,
            });
        }
        self
    }
}

impl LocationProvider for ConfiguredLocation {
    fn is_available(&self) -> bool {
        self.enabled
    }

    fn request_permission(&self) -> AppResult<Permission> {
        Ok(self.permission)
    }

    fn current_position(&self) -> AppResult<Coordinates> {
        self.coords.ok_or_else(|| {
            AppError::LocationUnavailable(
                "no coordinates configured (set location.latitude/longitude or pass --lat/--lon)"
                    .into(),
            )
        })
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
