use crate::state::{MindState, MAX_TICK};
use crate::util::dot;
use crate::validation;
use itertools::izip;
use log::trace;

pub fn step(state: &mut MindState) {
    debug_assert!(
        validation::validate(state).is_ok(),
        "step called on a state violating structural invariants"
    );

    advance_tick(state);
    accumulate_signals(state);
    decide_activations(state);
    propagate(state);
}

// Keeps the counter bounded. Subtracting the elapsed tick count from every
// schedule preserves each neuron's remaining ticks until ready.
fn advance_tick(state: &mut MindState) {
    state.tick += 1;

    if state.tick >= MAX_TICK {
        let elapsed = state.tick as f32;

        for next_activation in &mut state.next_activations {
            *next_activation -= elapsed;
        }

        trace!("tick wraparound after {} ticks", state.tick);
        state.tick = 0;
    }
}

fn accumulate_signals(state: &mut MindState) {
    let tick = state.tick as f32;

    for (activity, next_activation, input_row) in izip!(
        &mut state.neural_activity,
        &state.next_activations,
        state.input_weights.rows()
    ) {
        *activity = if *next_activation <= tick {
            dot(input_row, &state.signal_map)
        } else {
            0.0
        };
    }
}

fn decide_activations(state: &mut MindState) {
    let tick = state.tick as f32;

    // a schedule shorter than one wraparound period could end up behind the
    // counter once the next wraparound subtracts from it
    let min_delay = MAX_TICK as f32;

    for (activity, threshold, delay, next_activation) in izip!(
        &mut state.neural_activity,
        &state.activation_thresholds,
        &state.reactivation_delays,
        &mut state.next_activations
    ) {
        if *activity > *threshold {
            *next_activation = tick + delay.max(min_delay);
        } else {
            *activity = 0.0;
        }
    }
}

fn propagate(state: &mut MindState) {
    for (signal, output_row) in state
        .signal_map
        .iter_mut()
        .zip(state.outputs_weights.rows())
    {
        *signal = dot(output_row, &state.neural_activity);
    }
}
