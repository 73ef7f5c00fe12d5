// Plan generation: strategy composer, calendar scheduler, insight generator.
// Pure functions over a validated BrandProfile; no I/O below the handlers.

pub mod calendar;
pub mod generator;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod strategy;
pub mod templates;
