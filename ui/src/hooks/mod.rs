pub mod use_toast;
