//! Shared Dioxus components and D3.js bridge for the state income dashboard.
//!
//! This crate provides:
//! - `js_bridge`: browser fetch plus Rust wrappers for D3.js render functions via `js_sys::eval()`
//! - `loader`: one-shot loading of the remote datasets into the in-memory database
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, callout, legend, containers)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
