//! core/spectrum.rs
//! Live frequency magnitudes for the visualizer.
//!
//! - `SpectrumTap` wraps the playing rodio Source and copies a mono mix of
//!   every frame into a shared `SpectrumFeed` (audio thread writes).
//! - `Analyser` pulls the latest `FFT_SIZE` samples on each render tick and
//!   turns them into `BIN_COUNT` bytes (UI thread reads).
//!
//! The analyser mirrors the usual browser analyser node defaults:
//! Blackman window, 0.8 smoothing, -100..-30 dB mapped onto 0..=255.

use std::collections::VecDeque;
use std::f32::consts::PI;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use realfft::num_complex::Complex32;
use realfft::{RealFftPlanner, RealToComplex};
use rodio::Source;

pub const FFT_SIZE: usize = 256;
pub const BIN_COUNT: usize = FFT_SIZE / 2;

const SMOOTHING: f32 = 0.8;
const MIN_DB: f32 = -100.0;
const MAX_DB: f32 = -30.0;

/// Frames collected locally before taking the feed lock.
const TAP_BATCH: usize = 64;

/// Ring of the most recent mono samples, shared between audio and UI.
#[derive(Clone, Default)]
pub struct SpectrumFeed {
    samples: Arc<Mutex<VecDeque<f32>>>,
}

impl SpectrumFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, frames: &[f32]) {
        let Ok(mut ring) = self.samples.lock() else {
            return;
        };
        ring.extend(frames.iter().copied());
        let excess = ring.len().saturating_sub(FFT_SIZE);
        ring.drain(..excess);
    }

    /// Forget everything (nothing is playing anymore).
    pub fn clear(&self) {
        if let Ok(mut ring) = self.samples.lock() {
            ring.clear();
        }
    }

    /// Copy the latest samples into `out`, zero-padded at the front.
    fn snapshot(&self, out: &mut [f32]) {
        out.fill(0.0);
        let Ok(ring) = self.samples.lock() else {
            return;
        };
        let n = ring.len().min(out.len());
        let start = out.len() - n;
        for (dst, src) in out[start..].iter_mut().zip(ring.iter().skip(ring.len() - n)) {
            *dst = *src;
        }
    }
}

/// Passes samples through untouched while feeding a mono mix to the feed.
pub struct SpectrumTap<S> {
    inner: S,
    feed: SpectrumFeed,
    acc: f32,
    acc_n: u16,
    batch: Vec<f32>,
}

impl<S: Source> SpectrumTap<S> {
    pub fn new(inner: S, feed: SpectrumFeed) -> Self {
        Self {
            inner,
            feed,
            acc: 0.0,
            acc_n: 0,
            batch: Vec::with_capacity(TAP_BATCH),
        }
    }

    fn flush(&mut self) {
        if !self.batch.is_empty() {
            self.feed.push(&self.batch);
            self.batch.clear();
        }
    }
}

impl<S: Source> Iterator for SpectrumTap<S> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let Some(sample) = self.inner.next() else {
            self.flush();
            return None;
        };

        let channels = self.inner.channels().max(1);
        self.acc += sample;
        self.acc_n += 1;
        if self.acc_n >= channels {
            self.batch.push(self.acc / channels as f32);
            self.acc = 0.0;
            self.acc_n = 0;
            if self.batch.len() >= TAP_BATCH {
                self.flush();
            }
        }

        Some(sample)
    }
}

impl<S: Source> Source for SpectrumTap<S> {
    fn current_span_len(&self) -> Option<usize> {
        self.inner.current_span_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}

/// Pull-based frequency analyser.
///
/// Also an endless iterator: every `next()` is one render tick.
pub struct Analyser {
    feed: SpectrumFeed,
    fft: Arc<dyn RealToComplex<f32>>,
    window: Vec<f32>,
    input: Vec<f32>,
    spectrum: Vec<Complex32>,
    smoothed: Vec<f32>,
}

impl Analyser {
    pub fn new(feed: SpectrumFeed) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(FFT_SIZE);
        let spectrum = fft.make_output_vec();

        Self {
            feed,
            fft,
            window: blackman_window(FFT_SIZE),
            input: vec![0.0; FFT_SIZE],
            spectrum,
            smoothed: vec![0.0; BIN_COUNT],
        }
    }

    /// One frame of magnitudes, one byte per bin.
    pub fn frequency_data(&mut self) -> [u8; BIN_COUNT] {
        self.feed.snapshot(&mut self.input);
        for (s, w) in self.input.iter_mut().zip(&self.window) {
            *s *= w;
        }

        let mut out = [0u8; BIN_COUNT];
        if self.fft.process(&mut self.input, &mut self.spectrum).is_err() {
            return out;
        }

        for (i, byte) in out.iter_mut().enumerate() {
            let magnitude = self.spectrum[i].norm() / FFT_SIZE as f32;
            let smoothed = SMOOTHING * self.smoothed[i] + (1.0 - SMOOTHING) * magnitude;
            self.smoothed[i] = if smoothed.is_finite() { smoothed } else { 0.0 };
            *byte = to_byte(self.smoothed[i]);
        }

        out
    }
}

impl Iterator for Analyser {
    type Item = [u8; BIN_COUNT];

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.frequency_data())
    }
}

fn blackman_window(n: usize) -> Vec<f32> {
    let (a0, a1, a2) = (0.42, 0.5, 0.08);
    (0..n)
        .map(|i| {
            let x = i as f32 / n as f32;
            a0 - a1 * (2.0 * PI * x).cos() + a2 * (4.0 * PI * x).cos()
        })
        .collect()
}

fn to_byte(magnitude: f32) -> u8 {
    if magnitude <= 0.0 {
        return 0;
    }
    let db = 20.0 * magnitude.log10();
    let scaled = 255.0 * (db - MIN_DB) / (MAX_DB - MIN_DB);
    scaled.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare Source over a sample vector.
    struct Samples {
        data: std::vec::IntoIter<f32>,
        channels: u16,
    }

    impl Iterator for Samples {
        type Item = f32;
        fn next(&mut self) -> Option<f32> {
            self.data.next()
        }
    }

    impl Source for Samples {
        fn current_span_len(&self) -> Option<usize> {
            None
        }
        fn channels(&self) -> u16 {
            self.channels
        }
        fn sample_rate(&self) -> u32 {
            44100
        }
        fn total_duration(&self) -> Option<Duration> {
            None
        }
    }

    fn sine_at_bin(bin: usize, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * bin as f32 * i as f32 / FFT_SIZE as f32).sin())
            .collect()
    }

    #[test]
    fn silence_is_all_zero() {
        let mut analyser = Analyser::new(SpectrumFeed::new());
        assert_eq!(analyser.frequency_data(), [0u8; BIN_COUNT]);
    }

    #[test]
    fn sine_peaks_at_its_bin() {
        let feed = SpectrumFeed::new();
        feed.push(&sine_at_bin(32, FFT_SIZE));
        let mut analyser = Analyser::new(feed);

        let data = analyser.frequency_data();
        let peak = (0..BIN_COUNT).max_by_key(|&i| data[i]).unwrap();
        assert!((31..=33).contains(&peak), "peak at {peak}");
        assert_eq!(data[32], 255);
        assert!(data[100] < 50, "leakage {}", data[100]);
    }

    #[test]
    fn smoothing_decays_after_clear() {
        let feed = SpectrumFeed::new();
        feed.push(&sine_at_bin(16, FFT_SIZE));
        let mut analyser = Analyser::new(feed.clone());
        let loud = analyser.next().unwrap()[16];

        feed.clear();
        let quieter = analyser.next().unwrap()[16];
        assert!(quieter < loud || loud == 255);
        for _ in 0..200 {
            analyser.next();
        }
        assert_eq!(analyser.next().unwrap()[16], 0);
    }

    #[test]
    fn feed_keeps_only_the_latest_window() {
        let feed = SpectrumFeed::new();
        feed.push(&vec![1.0; FFT_SIZE]);
        feed.push(&[2.0; 10]);

        let mut out = vec![0.0; FFT_SIZE];
        feed.snapshot(&mut out);
        assert_eq!(out[FFT_SIZE - 1], 2.0);
        assert_eq!(out[FFT_SIZE - 11], 1.0);
    }

    #[test]
    fn tap_passes_samples_through_and_mixes_to_mono() {
        let feed = SpectrumFeed::new();
        let stereo: Vec<f32> = (0..200).flat_map(|_| [1.0, 0.0]).collect();
        let tap = SpectrumTap::new(
            Samples {
                data: stereo.clone().into_iter(),
                channels: 2,
            },
            feed.clone(),
        );

        let passed: Vec<f32> = tap.collect();
        assert_eq!(passed, stereo);

        let mut out = vec![0.0; FFT_SIZE];
        feed.snapshot(&mut out);
        assert!(out[FFT_SIZE - 200..].iter().all(|&s| s == 0.5));
        assert!(out[..FFT_SIZE - 200].iter().all(|&s| s == 0.0));
    }
}
