mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::{FieldMessage, Label};

mod popover;
pub use popover::Popover;

pub mod calendar;
pub use calendar::Calendar;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};
