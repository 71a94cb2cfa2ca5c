// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Flight-camera controller and bounding-sphere collision core for a 3D
//! flight demo.
//!
//! A free-flying camera ("plane") taxis, takes off, flies within a bounded
//! heading window and lands again, while a bounding sphere around it is
//! tested against the static scene every frame. Any overlap rolls the frame's
//! motion back and stops the aircraft.
//!
//! # Key entry points
//!
//! - [`engine::FlightEngine`] - owns the simulation and runs one update pass
//!   per frame
//! - [`camera::FlightController`] - the grounded/flying state machine
//! - [`camera::orientation`] - yaw/pitch/roll basis and view matrix
//! - [`collision`] - bounding spheres and frame rollback
//! - [`scene::SceneRegistry`] - the boundary to whatever owns scene objects
//! - [`options::Options`] - flight, camera and keybinding configuration
//!
//! Rendering, asset loading and cosmetic animation are left to the host
//! application; it reads [`engine::FlightEngine::snapshot`] or
//! [`engine::FlightEngine::uniform`] after each step.

pub mod camera;
pub mod collision;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{FlightCommand, FlightEngine, FrameReport};
pub use error::VoloError;
pub use input::InputEvent;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
