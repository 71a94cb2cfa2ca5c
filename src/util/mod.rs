//! Shared utilities for the frame loop.

/// Clamped frame delta time and smoothed FPS.
pub mod frame_timing;
