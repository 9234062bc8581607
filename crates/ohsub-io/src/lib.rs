pub mod clipboard;
pub mod stdin;
pub mod ws;
