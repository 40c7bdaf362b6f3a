//! WN8 calculation: expected values, aggregation, formula and the scoring session.

pub use self::expected::{ExpectedValueTable, VehicleExpectedValue};
pub use self::session::{AccountQuery, ScoringOptions, ScoringSession};
pub use self::source::DataSource;

pub mod aggregator;
pub mod error;
pub mod expected;
pub mod formula;
pub mod models;
pub mod session;
pub mod source;
