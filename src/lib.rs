pub mod error;
pub mod injector;
pub mod report;
pub mod scrubber;
pub mod sink;
pub mod source;

pub use error::InstrumentError;
pub use injector::{instrument_source, InjectionPolicy, InstrumentedOutput, SelectionMode, WrapStyle};
pub use report::FailureReport;
pub use sink::{SinkConfig, SinkSpec};
