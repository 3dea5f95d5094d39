//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects and music - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::app::{AudioSink, SoundEffect};
use crate::settings::Settings;

/// Background melody: (frequency Hz, length in beats). 0.0 is a rest.
const MELODY: [(f32, f64); 16] = [
    (523.25, 1.0),
    (659.25, 1.0),
    (783.99, 1.0),
    (659.25, 1.0),
    (698.46, 1.0),
    (880.00, 1.0),
    (783.99, 2.0),
    (587.33, 1.0),
    (698.46, 1.0),
    (880.00, 1.0),
    (698.46, 1.0),
    (659.25, 1.0),
    (587.33, 1.0),
    (523.25, 1.0),
    (0.0, 1.0),
    (392.00, 1.0),
];
/// Seconds per beat (150 bpm)
const BEAT_SECS: f64 = 0.4;
/// How far ahead of the audio clock notes are queued
const LOOKAHEAD_SECS: f64 = 0.3;

/// Looping melody scheduler state
#[derive(Debug, Default)]
struct MusicLoop {
    playing: bool,
    next_note: usize,
    /// Audio-clock time the next note starts
    next_time: f64,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music: MusicLoop,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            muted: settings.muted,
            music: MusicLoop::default(),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    fn sfx_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Short enveloped tone starting at `t`
    fn tone(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
        vol: f32,
        t: f64,
        len: f64,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + len)
            .ok();
        osc.start_with_when(t).ok();
        osc.stop_with_when(t + len + 0.05).ok();
    }

    /// Coin chime - two quick rising pings
    fn play_coin(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();
        self.tone(ctx, 988.0, OscillatorType::Square, vol * 0.2, t, 0.08);
        self.tone(ctx, 1319.0, OscillatorType::Square, vol * 0.2, t + 0.08, 0.25);
    }

    /// Round won - rising arpeggio
    fn play_round_won(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.0, 659.0, 784.0, 1047.0].iter().enumerate() {
            let t = ctx.current_time() + i as f64 * 0.1;
            self.tone(ctx, *freq, OscillatorType::Triangle, vol * 0.3, t, 0.4);
        }
    }

    /// Round lost - sad descending
    fn play_round_lost(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let t = ctx.current_time() + i as f64 * 0.2;
            self.tone(ctx, *freq, OscillatorType::Sine, vol * 0.3, t, 0.3);
        }
    }

    /// Queue melody notes up to the lookahead horizon
    fn schedule_music(&mut self) {
        let vol = self.music_level();
        let Some(ctx) = &self.ctx else { return };
        let horizon = ctx.current_time() + LOOKAHEAD_SECS;

        // Fell behind (tab hidden, context suspended): restart from now
        if self.music.next_time < ctx.current_time() {
            self.music.next_time = ctx.current_time();
        }

        while self.music.next_time < horizon {
            let (freq, beats) = MELODY[self.music.next_note];
            let len = beats * BEAT_SECS;
            if freq > 0.0 && vol > 0.0 {
                let start = self.music.next_time;
                self.tone(ctx, freq, OscillatorType::Triangle, vol * 0.15, start, len * 0.9);
            }
            self.music.next_time += len;
            self.music.next_note = (self.music.next_note + 1) % MELODY.len();
        }
    }
}

impl AudioSink for AudioManager {
    /// Play a sound effect
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.sfx_level();
        if vol <= 0.0 {
            return;
        }
        self.resume();
        let Some(ctx) = &self.ctx else { return };

        match effect {
            SoundEffect::Coin => self.play_coin(ctx, vol),
            SoundEffect::RoundWon => self.play_round_won(ctx, vol),
            SoundEffect::RoundLost => self.play_round_lost(ctx, vol),
        }
    }

    fn start_music(&mut self) {
        self.resume();
        self.music = MusicLoop {
            playing: true,
            ..Default::default()
        };
        self.schedule_music();
    }

    fn stop_music(&mut self) {
        self.music.playing = false;
    }

    fn update(&mut self) {
        if self.music.playing {
            self.schedule_music();
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
