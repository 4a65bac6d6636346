//! # User Interface Helpers
//!
//! Building blocks for installer screens that are independent of any widget
//! toolkit. A screen composes them instead of inheriting from them:
//!
//! - **`source_switch`**: Switches the installation source, keeping exactly
//!   one source active.
//! - **`input_check`**: Runs validation checks on form inputs and reports
//!   which of them currently fail.

pub mod input_check;
pub mod source_switch;

pub use input_check::{CheckId, CheckStatus, InputCheck, InputCheckHandler, InputCheckSet};
pub use source_switch::{DeviceProtection, SourcePayload, SourceRequest, SourceSwitchHandler};
