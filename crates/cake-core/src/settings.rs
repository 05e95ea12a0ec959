//! Global settings.
//!
//! [`Settings`] holds the **processing year**, the year onto which every
//! birthday is normalized before scheduling.  It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! When no override is set the current local year is used.  Tests that need a
//! fixed year should use [`ScopedProcessingYear`], which restores the previous
//! value when dropped.

use std::sync::{Mutex, OnceLock};

use chrono::Datelike;

use crate::Year;

/// Process-wide settings used by cakedays.
pub struct Settings {
    processing_year: Mutex<Option<Year>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            processing_year: Mutex::new(None),
        })
    }

    /// Return the processing year: the override if one is set, otherwise the
    /// current local year.
    pub fn processing_year(&self) -> Year {
        self.processing_year_override()
            .unwrap_or_else(|| chrono::Local::now().year() as Year)
    }

    /// Return the override, if any.
    pub fn processing_year_override(&self) -> Option<Year> {
        *self
            .processing_year
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Pin the processing year.
    pub fn set_processing_year(&self, year: Year) {
        *self
            .processing_year
            .lock()
            .expect("Settings mutex poisoned") = Some(year);
    }

    /// Clear the override, resetting it to "use the current year".
    pub fn reset_processing_year(&self) {
        *self
            .processing_year
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

/// Sets the processing year for the lifetime of the guard.
#[must_use = "the override is dropped immediately otherwise"]
pub struct ScopedProcessingYear {
    previous: Option<Year>,
}

impl ScopedProcessingYear {
    /// Override the processing year until the returned guard is dropped.
    pub fn new(year: Year) -> Self {
        let settings = Settings::instance();
        let previous = settings.processing_year_override();
        settings.set_processing_year(year);
        Self { previous }
    }
}

impl Drop for ScopedProcessingYear {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(year) => settings.set_processing_year(year),
            None => settings.reset_processing_year(),
        }
    }
}
