// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod login;
pub mod points;
pub mod prize;

pub use activity::{Activity, NewActivity};
pub use login::{LoginRequest, LoginResponse};
pub use prize::{NewPrize, Prize};
