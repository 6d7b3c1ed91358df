pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
