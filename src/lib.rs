//! Board preview modal for the battleship admin pages.
//!
//! This crate is compiled to WebAssembly and loaded by admin pages that list
//! games. Clicking an element marked `.show-board` fetches that game's
//! pre-rendered board fragment from `/api/admin/get_board/{id}/`, injects it
//! into the modal's content slot and shows the modal; the close control hides
//! it again.
//!
//! The open/close logic lives in [`controller::ModalController`], which has
//! no browser dependency and is tested natively. The `browser` feature adds
//! the `web-sys` binding and the `initBoardModal` / `teardownBoardModal`
//! exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Open/close semantics, error policy, request bookkeeping |
//! | [`config`] | [`config::ModalConfig`] and [`config::ErrorPolicy`] |
//! | [`payload`] | Endpoint URL and [`payload::BoardPayload`] schema |
//! | [`game_id`] | Typed game id read from a trigger element |
//! | [`error`] | [`error::ModalError`] |
//! | [`consts`] | Default selectors, ids and endpoint |
//! | [`lifecycle`] | Setup generations for the JS entry points |
//! | `dom` | `web-sys` / `gloo-net` binding (`browser` feature) |
//! | `entry` | JS exports and page lifecycle (`browser` feature) |

pub mod config;
pub mod consts;
pub mod controller;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod entry;
pub mod error;
pub mod game_id;
pub mod lifecycle;
pub mod payload;
