use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::state::CueKind;

const CUE_SECONDS: f64 = 0.1;
const ATTACK_GAIN: f32 = 0.1;
const DECAY_GAIN: f32 = 0.01;

/// Plays a short square-wave blip for a UI interaction. Sound is decorative,
/// so a missing or blocked AudioContext is logged and swallowed.
pub fn play_cue(kind: CueKind, enabled: bool) {
    if !enabled {
        return;
    }
    if let Err(err) = synthesize(kind) {
        log::warn!("audio cue unavailable: {err:?}");
    }
}

fn synthesize(kind: CueKind) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let now = ctx.current_time();
    oscillator.set_type(OscillatorType::Square);
    oscillator.frequency().set_value_at_time(kind.frequency(), now)?;

    // Sharp attack, quick exponential decay. Keeps the blip from clicking.
    gain.gain().set_value_at_time(ATTACK_GAIN, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(DECAY_GAIN, now + CUE_SECONDS)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(now + CUE_SECONDS)?;
    Ok(())
}
