//! Pure page logic: stages, scroll mapping, motion math, effect parameters,
//! booking validation and static content. Nothing here touches the browser.

pub mod booking;
pub mod config;
pub mod content;
mod gridscan;
mod motion;
mod scroll;
mod session;
mod stage;
#[cfg(test)]
mod tests;

pub use booking::{
    BookingAcknowledgement, BookingDraft, BookingError, BookingField, MAX_SEATS, ValidBooking,
    submit,
};
pub use content::*;
pub use gridscan::*;
pub use motion::*;
pub use scroll::*;
pub use session::*;
pub use stage::*;
