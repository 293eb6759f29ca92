//! # imgpress
//!
//! Crop, downscale, and re-encode a single image to lossy WebP from the
//! command line. One input produces one output through a strictly
//! sequential pipeline:
//!
//! ```text
//! read → decode → crop? → bound selection → fit/fill → encode → write
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable [`JobConfig`](config::JobConfig) built once from CLI args, validated before any I/O |
//! | [`imaging`] | Pure geometry (fit/fill/crop math), codec trait, production WebP codec |
//! | [`pipeline`] | Runs one conversion end to end, returns a [`RunSummary`](pipeline::RunSummary) |
//! | [`output`] | CLI reporting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## WebP-Only Output
//!
//! Every output is lossy WebP, regardless of input format. A single fixed
//! output format keeps the tool a one-decision pipeline; quality is the
//! only encode knob exposed.
//!
//! ## Smaller Bounds for Animated Inputs
//!
//! Animated images (multi-frame GIF/WebP/APNG) default to 800×600 resize
//! bounds instead of 1920×1080. Multi-frame content pays decode and encode
//! costs per frame, so it gets a smaller budget. This is deliberate policy,
//! not an oversight.
//!
//! ## The (0, 0) Crop-Center Sentinel
//!
//! A crop center of exactly `(0, 0)` means "the image center". The
//! consequence — a crop literally centered on pixel (0, 0) cannot be
//! requested — is a known wart, kept for compatibility rather than
//! silently redefined.
//!
//! ## One Attempt, No Cleanup
//!
//! Every pipeline stage is a hard failure point. Nothing is retried, and
//! files written by earlier stages (the chained crop intermediate) stay on
//! disk when a later stage fails. The encode is bounded by a hard 30-second
//! wall-clock timeout and counts as failed on expiry.

pub mod config;
pub mod imaging;
pub mod output;
pub mod pipeline;
