use std::time::{Duration, Instant};

use mindloop::{agent::Agent, codec, engine, initializer, params};
use rand::{prelude::Distribution, rngs::StdRng, seq::SliceRandom, SeedableRng};
use statrs::distribution::Poisson;

#[path = "../scenario_params.rs"]
mod scenario_params;

fn main() {
    let params = scenario_params::get_scenario_params();
    params::validate_run_params(&params).unwrap();

    let mut state = initializer::create_state(&params.init_params).unwrap();
    let num_neurons = state.num_neurons();

    println!(
        "NEURONS: {}. LINKS: {}",
        num_neurons,
        state.outputs_weights.as_slice().len()
    );

    let agents: Vec<Agent> = (0..num_neurons).map(Agent::new).collect();
    let mut rng = StdRng::seed_from_u64(0);
    let num_injections_dist = params
        .stimulus_params
        .as_ref()
        .map(|stimulus| Poisson::new(stimulus.mean_injections_per_tick).unwrap());

    let mut checkpoint_bytes = 0usize;
    let mut checkpoint_count = 0usize;
    let mut last_printed_tick = 0;
    let mut next_print_time = Instant::now();

    let wall_start = Instant::now();

    for tick in 1..=params.t_stop {
        if let (Some(stimulus), Some(dist)) = (&params.stimulus_params, &num_injections_dist) {
            let num_injections = dist.sample(&mut rng) as usize;
            for agent in agents.choose_multiple(&mut rng, num_injections) {
                agent.inject(&mut state, stimulus.signal).unwrap();
            }
        }

        engine::step(&mut state);

        if let Some(checkpoint_period) = params.checkpoint_period {
            if tick % checkpoint_period == 0 {
                let blob = codec::encode(&state, params.compression_level).unwrap();
                checkpoint_bytes += blob.len();
                checkpoint_count += 1;
            }
        }

        let now = Instant::now();
        if now >= next_print_time {
            println!("TICK: {}, DELTA: {}", tick, tick - last_printed_tick);
            last_printed_tick = tick;
            next_print_time = now + Duration::from_secs(1);
        }
    }

    let wall_time = wall_start.elapsed();
    let link_throughput =
        (2 * num_neurons * num_neurons * params.t_stop) as f64 / wall_time.as_secs_f64();

    eprintln!(
        "Ticks per second: {:.3e}",
        params.t_stop as f64 / wall_time.as_secs_f64()
    );
    eprintln!(
        "Link processing throughput: {:.3e} ({:.3} ns per link)",
        link_throughput,
        1e9 / link_throughput
    );

    if checkpoint_count > 0 {
        eprintln!(
            "Checkpoints: {} (avg {} bytes)",
            checkpoint_count,
            checkpoint_bytes / checkpoint_count
        );
    }
}
