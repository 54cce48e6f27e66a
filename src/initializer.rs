use crate::params::{self, InitParams};
use crate::state::{Matrix, MindState};
use log::info;
use rand::distributions::Uniform;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_error::{try_with, SimpleError};

pub fn create_state(params: &InitParams) -> Result<MindState, SimpleError> {
    try_with!(
        params::validate_init_params(params),
        "invalid init parameters"
    );

    let seed = params
        .seed_override
        .unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let num_neurons = params.num_neurons;
    let threshold_dist = Uniform::new(0.0, params.max_activation_threshold);
    let weight_dist = Uniform::new(0.0, params.max_weight);
    let delay_dist = Uniform::new(0.0, params.max_reactivation_delay);
    let signal_dist = Uniform::new(0.0, params.max_initial_signal);

    let activation_thresholds = sample_vec(&threshold_dist, num_neurons, &mut rng);
    let outputs_weights = sample_weights(&weight_dist, params, &mut rng);
    let input_weights = sample_weights(&weight_dist, params, &mut rng);
    let reactivation_delays = sample_vec(&delay_dist, num_neurons, &mut rng);
    let signal_map = sample_vec(&signal_dist, num_neurons, &mut rng);

    let state = try_with!(
        MindState::new(
            0,
            activation_thresholds,
            outputs_weights,
            input_weights,
            reactivation_delays,
            vec![0.0; num_neurons],
            signal_map,
        ),
        "initial state failed validation"
    );

    info!(
        "created state with {} neurons and {} links (seed {})",
        num_neurons,
        state.outputs_weights.as_slice().len(),
        seed
    );

    Ok(state)
}

fn sample_vec(dist: &Uniform<f32>, len: usize, rng: &mut StdRng) -> Vec<f32> {
    dist.sample_iter(&mut *rng).take(len).collect()
}

fn sample_weights(dist: &Uniform<f32>, params: &InitParams, rng: &mut StdRng) -> Matrix {
    let num_neurons = params.num_neurons;
    let mut weights = Matrix::zeros(num_neurons, num_neurons);

    for weight in weights.as_mut_slice() {
        *weight = dist.sample(rng);
    }

    if params.zero_self_loops {
        for nid in 0..num_neurons {
            weights.set(nid, nid, 0.0);
        }
    }

    weights
}
