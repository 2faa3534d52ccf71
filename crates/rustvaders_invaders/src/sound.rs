use std::collections::HashMap;
use std::io::Cursor;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{error, warn};
use rodio::{Decoder, OutputStream, Sink};

/// Discrete sound effects driven by the OUT 3 and OUT 5 latches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SoundEffect {
    Ufo,
    Shot,
    PlayerDies,
    InvaderDies,
    FleetMove1,
    FleetMove2,
    FleetMove3,
    FleetMove4,
    UfoHit,
}

struct SampleInfo {
    effect: SoundEffect,
    port: u8,
    bit: u8,
    path: &'static str,
}

const fn sample(effect: SoundEffect, port: u8, bit: u8, path: &'static str) -> SampleInfo {
    SampleInfo {
        effect,
        port,
        bit,
        path,
    }
}

/// Which output bit triggers which sample. Paths are resolved from the
/// working directory, so run from the repository root.
const SAMPLES: &[SampleInfo] = &[
    sample(SoundEffect::Ufo, 3, 0, "assets/sounds/ufo_lowpitch.wav"),
    sample(SoundEffect::Shot, 3, 1, "assets/sounds/shoot.wav"),
    sample(SoundEffect::PlayerDies, 3, 2, "assets/sounds/explosion.wav"),
    sample(SoundEffect::InvaderDies, 3, 3, "assets/sounds/invaderkilled.wav"),
    sample(SoundEffect::FleetMove1, 5, 0, "assets/sounds/fastinvader1.wav"),
    sample(SoundEffect::FleetMove2, 5, 1, "assets/sounds/fastinvader2.wav"),
    sample(SoundEffect::FleetMove3, 5, 2, "assets/sounds/fastinvader3.wav"),
    sample(SoundEffect::FleetMove4, 5, 3, "assets/sounds/fastinvader4.wav"),
    sample(SoundEffect::UfoHit, 5, 4, "assets/sounds/explosion.wav"),
];

/// Rising-edge detector over the two sound latches.
///
/// The game holds a bit high for as long as a sound "plays"; a sample must
/// trigger once per 0→1 transition, not once per frame.
#[derive(Default)]
pub struct EdgeDetector {
    last_port3: u8,
    last_port5: u8,
}

impl EdgeDetector {
    /// Compare the latches against their last observed values and return the
    /// effects whose bits just went high.
    pub fn rising_edges(&mut self, port3: u8, port5: u8) -> Vec<SoundEffect> {
        let mut triggered = Vec::new();
        for info in SAMPLES {
            let (value, last) = match info.port {
                3 => (port3, self.last_port3),
                _ => (port5, self.last_port5),
            };
            let mask = 1 << info.bit;
            if value & mask != 0 && last & mask == 0 {
                triggered.push(info.effect);
            }
        }
        self.last_port3 = port3;
        self.last_port5 = port5;
        triggered
    }
}

fn playback_thread(receiver: Receiver<SoundEffect>, samples: HashMap<SoundEffect, Vec<u8>>) {
    let Ok((_stream, handle)) = OutputStream::try_default() else {
        error!("no audio output device, sound disabled");
        return;
    };

    while let Ok(effect) = receiver.recv() {
        let Some(bytes) = samples.get(&effect) else {
            continue;
        };
        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => match Sink::try_new(&handle) {
                Ok(sink) => {
                    sink.append(source);
                    sink.detach();
                }
                Err(e) => error!("failed to open audio sink: {e}"),
            },
            Err(e) => error!("failed to decode sample for {effect:?}: {e}"),
        }
    }
}

/// Watches the sound latches and hands rising edges to the playback thread.
pub struct SoundBoard {
    sender: Sender<SoundEffect>,
    edges: EdgeDetector,
}

impl SoundBoard {
    /// Load the sample files and start the playback thread.
    ///
    /// Returns `None` when no sample can be loaded or the thread cannot be
    /// spawned; the game then runs silently.
    pub fn new() -> Option<Self> {
        let mut samples = HashMap::new();
        for info in SAMPLES {
            match std::fs::read(info.path) {
                Ok(bytes) => {
                    samples.insert(info.effect, bytes);
                }
                Err(e) => warn!("missing sample {} for {:?}: {e}", info.path, info.effect),
            }
        }
        if samples.is_empty() {
            warn!("no sound samples found, audio disabled");
            return None;
        }

        let (sender, receiver) = mpsc::channel();
        if let Err(e) = thread::Builder::new()
            .name("invaders_sound".into())
            .spawn(move || playback_thread(receiver, samples))
        {
            error!("failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self {
            sender,
            edges: EdgeDetector::default(),
        })
    }

    /// Feed the current latch values; newly risen bits trigger playback.
    pub fn refresh(&mut self, port3: u8, port5: u8) {
        for effect in self.edges.rising_edges(port3, port5) {
            // A dead audio thread just means silence from here on.
            let _ = self.sender.send(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_trigger_once_per_transition() {
        let mut edges = EdgeDetector::default();
        assert_eq!(
            edges.rising_edges(0x02, 0x00),
            vec![SoundEffect::Shot]
        );
        // Held high: no retrigger.
        assert!(edges.rising_edges(0x02, 0x00).is_empty());
        // Dropped and raised again: retrigger.
        assert!(edges.rising_edges(0x00, 0x00).is_empty());
        assert_eq!(
            edges.rising_edges(0x02, 0x00),
            vec![SoundEffect::Shot]
        );
    }

    #[test]
    fn both_ports_are_watched() {
        let mut edges = EdgeDetector::default();
        let triggered = edges.rising_edges(0x09, 0x11);
        assert_eq!(
            triggered,
            vec![
                SoundEffect::Ufo,
                SoundEffect::InvaderDies,
                SoundEffect::FleetMove1,
                SoundEffect::UfoHit,
            ]
        );
    }
}
