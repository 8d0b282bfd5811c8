// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Execution primitives shared by the git layer and the controller.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!  process    queue    observer
//!     |         |         |
//!  Runner    USER/BG   ordered
//!  events    coalesce  callbacks
//! ```

pub mod observer;
pub mod process;
pub mod queue;
