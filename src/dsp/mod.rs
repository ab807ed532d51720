//! DSP — the demo sample sounds.
//!
//! Rendered in Rust so the AudioWorklet and the WAV download play back the
//! same samples.

pub mod noise;
pub mod oscillator;
pub mod renderer;
