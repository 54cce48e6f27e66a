use mindloop::{agent::Agent, codec, engine, initializer};
use rand::{prelude::Distribution, rngs::StdRng, seq::SliceRandom, SeedableRng};
use statrs::distribution::Poisson;

#[path = "../scenario_params.rs"]
mod scenario_params;

fn main() {
    let params = scenario_params::get_scenario_params();
    let mut state = initializer::create_state(&params.init_params).unwrap();

    let agents: Vec<Agent> = (0..state.num_neurons()).map(Agent::new).collect();
    let mut rng = StdRng::seed_from_u64(0);
    let num_injections_dist = Poisson::new(2.0).unwrap();

    let mut fire_count = 0usize;
    let mut activity_checksum = 0.0f64;
    let mut neuron_checksum = 0usize;
    let t_stop = 5000;

    for t in 0..t_stop {
        let num_injections = num_injections_dist.sample(&mut rng) as usize;
        for agent in agents.choose_multiple(&mut rng, num_injections) {
            agent.inject(&mut state, 1.0).unwrap();
        }

        engine::step(&mut state);

        for (nid, activity) in state.neural_activity.iter().enumerate() {
            if *activity != 0.0 {
                fire_count += 1;
                neuron_checksum += t * nid;
                activity_checksum += *activity as f64;
            }
        }
    }

    println!("batch result:");
    println!("...fire count: {}", fire_count);
    println!("...neuron checksum: {}", neuron_checksum);
    println!("...activity checksum: {}", activity_checksum);

    let blob = codec::encode_default(&state).unwrap();
    let restored = codec::decode(&blob).unwrap();

    let signal_checksum: f64 = restored.signal_map.iter().map(|s| *s as f64).sum();
    let schedule_checksum: f64 = restored.next_activations.iter().map(|t| *t as f64).sum();

    println!("checkpoint result:");
    println!("...blob size: {}", blob.len());
    println!("...tick: {}", restored.tick);
    println!("...signal checksum: {}", signal_checksum);
    println!("...schedule checksum: {}", schedule_checksum);
    println!(
        "...persisted fields restored: {}",
        restored.signal_map == state.signal_map
            && restored.next_activations == state.next_activations
            && restored.input_weights == state.input_weights
            && restored.outputs_weights == state.outputs_weights
    );
}
