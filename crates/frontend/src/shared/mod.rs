pub mod api_utils;
pub mod catalogue;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod icons;
pub mod leaflet;
pub mod share;
pub mod toast;
