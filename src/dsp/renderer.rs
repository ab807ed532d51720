//! Sample-sound renderer: the demo tones on the audio page.

use std::str::FromStr;

use crate::error::StudioError;

use super::noise::WhiteNoise;
use super::oscillator::{Oscillator, Waveform};

/// The sounds behind the `data-sample` buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSound {
    /// 440 Hz sine.
    Sine,
    /// 200 Hz square.
    Square,
    /// White noise.
    Noise,
}

impl SampleSound {
    /// Length of every demo sound.
    pub const DURATION_SECS: f64 = 1.0;
}

impl FromStr for SampleSound {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(SampleSound::Sine),
            "square" => Ok(SampleSound::Square),
            "noise" => Ok(SampleSound::Noise),
            _ => Err(StudioError::UnknownSample(s.to_string())),
        }
    }
}

/// Highest render rate accepted; keeps one second of 16-bit PCM well
/// inside the WAV size fields.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

pub fn check_sample_rate(sample_rate: u32) -> Result<(), StudioError> {
    if sample_rate == 0 || sample_rate > MAX_SAMPLE_RATE {
        return Err(StudioError::Config(format!(
            "sample rate {sample_rate} outside 1..={MAX_SAMPLE_RATE}"
        )));
    }
    Ok(())
}

/// Render a demo sound to mono f32 samples.
pub fn render_samples(sound: SampleSound, sample_rate: u32) -> Result<Vec<f32>, StudioError> {
    check_sample_rate(sample_rate)?;
    let len = (SampleSound::DURATION_SECS * sample_rate as f64) as usize;
    let sr = sample_rate as f64;
    let samples = match sound {
        SampleSound::Sine => render_tone(Waveform::Sine, 440.0, sr, len),
        SampleSound::Square => render_tone(Waveform::Square, 200.0, sr, len),
        SampleSound::Noise => {
            let mut noise = WhiteNoise::default();
            (0..len).map(|_| noise.next_sample() as f32).collect()
        }
    };
    Ok(samples)
}

fn render_tone(waveform: Waveform, frequency: f64, sample_rate: f64, len: usize) -> Vec<f32> {
    let mut osc = Oscillator::new(waveform, frequency, sample_rate);
    (0..len).map(|_| osc.next_sample() as f32).collect()
}

/// Render a demo sound to a 16-bit mono WAV file.
pub fn render_wav(sound: SampleSound, sample_rate: u32) -> Result<Vec<u8>, StudioError> {
    let samples = render_samples(sound, sample_rate)?;
    Ok(encode_mono_wav(&samples, sample_rate))
}

const WAV_HEADER_LEN: usize = 44;
const BYTES_PER_SAMPLE: u32 = 2;

fn chunk_header(buf: &mut Vec<u8>, tag: &[u8; 4], len: u32) {
    buf.extend_from_slice(tag);
    buf.extend_from_slice(&len.to_le_bytes());
}

/// Quantize mono f32 samples to 16-bit PCM inside a RIFF/WAVE container.
fn encode_mono_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let data_size = samples.len() as u32 * BYTES_PER_SAMPLE;
    let mut buf = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);

    chunk_header(&mut buf, b"RIFF", WAV_HEADER_LEN as u32 - 8 + data_size);
    buf.extend_from_slice(b"WAVE");

    chunk_header(&mut buf, b"fmt ", 16);
    let fmt: [u16; 2] = [1, 1]; // PCM, mono
    for field in fmt {
        buf.extend_from_slice(&field.to_le_bytes());
    }
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&(sample_rate * BYTES_PER_SAMPLE).to_le_bytes());
    buf.extend_from_slice(&(BYTES_PER_SAMPLE as u16).to_le_bytes());
    buf.extend_from_slice(&16u16.to_le_bytes());

    chunk_header(&mut buf, b"data", data_size);
    for &s in samples {
        let pcm = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        buf.extend_from_slice(&pcm.to_le_bytes());
    }

    buf
}
