//! Concrete calendar implementations.

/// The company calendar: weekends plus fixed month-day holidays.
pub mod company;
