pub mod console;
mod dispatch;
pub(crate) mod run;

pub use dispatch::dispatch;
