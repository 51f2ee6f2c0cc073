pub mod console_view_model;

pub use console_view_model::{ConsoleViewModel, FooterModel, LogRowModel};
