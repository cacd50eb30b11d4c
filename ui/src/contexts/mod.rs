pub mod toast;

pub use toast::{ToastProvider, use_toast};
