//! Message handlers, split by concern.

mod keyboard;
mod menu;

pub(crate) use menu::shutdown;
