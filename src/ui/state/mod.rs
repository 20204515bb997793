// SPDX-License-Identifier: MPL-2.0
//! UI state management modules

pub mod slide;

pub use slide::{SlideState, TransitionKind};
