use mindloop::params::RunParams;

pub fn get_scenario_params() -> RunParams {
    let params_yaml_str = r#"
init_params:
  num_neurons: 100
  max_activation_threshold: 1.0
  max_weight: 1.0
  max_reactivation_delay: 10.0
  max_initial_signal: 1.0
  zero_self_loops: true
  seed_override: 0
t_stop: 200000
checkpoint_period: 50000
compression_level: 3
stimulus_params:
  mean_injections_per_tick: 2.0
  signal: 1.0
"#;

    serde_yaml::from_str(params_yaml_str).unwrap()
}
