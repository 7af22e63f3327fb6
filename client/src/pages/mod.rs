//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app is a single screen. The page owns layout and delegates rendering
//! details to `components`.

pub mod home;
