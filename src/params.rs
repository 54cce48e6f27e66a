use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitParams {
    pub num_neurons: usize,
    pub max_activation_threshold: f32,
    pub max_weight: f32,
    pub max_reactivation_delay: f32,
    pub max_initial_signal: f32,
    pub zero_self_loops: bool,
    pub seed_override: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    pub init_params: InitParams,
    pub t_stop: usize,
    pub checkpoint_period: Option<usize>,
    pub compression_level: i32,
    pub stimulus_params: Option<StimulusParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StimulusParams {
    pub mean_injections_per_tick: f64,
    pub signal: f32,
}

impl Default for InitParams {
    fn default() -> Self {
        Self {
            num_neurons: 100,
            max_activation_threshold: 1.0,
            max_weight: 1.0,
            max_reactivation_delay: 10.0,
            max_initial_signal: 1.0,
            zero_self_loops: true,
            seed_override: None,
        }
    }
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            init_params: InitParams::default(),
            t_stop: 10000,
            checkpoint_period: None,
            compression_level: 3,
            stimulus_params: None,
        }
    }
}

impl Default for StimulusParams {
    fn default() -> Self {
        Self {
            mean_injections_per_tick: 1.0,
            signal: 1.0,
        }
    }
}

pub fn validate_init_params(init_params: &InitParams) -> Result<(), SimpleError> {
    if init_params.num_neurons == 0 {
        return Err(SimpleError::new("num_neurons must be strictly positive"));
    }

    validate_upper_bound("max_activation_threshold", init_params.max_activation_threshold)?;
    validate_upper_bound("max_weight", init_params.max_weight)?;
    validate_upper_bound(
        "max_reactivation_delay",
        init_params.max_reactivation_delay,
    )?;
    validate_upper_bound("max_initial_signal", init_params.max_initial_signal)?;

    Ok(())
}

pub fn validate_run_params(run_params: &RunParams) -> Result<(), SimpleError> {
    validate_init_params(&run_params.init_params)?;

    if run_params.checkpoint_period == Some(0) {
        return Err(SimpleError::new(
            "checkpoint_period must be strictly positive",
        ));
    }

    if !zstd::compression_level_range().contains(&run_params.compression_level) {
        return Err(SimpleError::new(format!(
            "compression_level must be in {:?}",
            zstd::compression_level_range()
        )));
    }

    if let Some(stimulus_params) = &run_params.stimulus_params {
        validate_stimulus_params(stimulus_params)?;
    }

    Ok(())
}

fn validate_stimulus_params(stimulus_params: &StimulusParams) -> Result<(), SimpleError> {
    if !(stimulus_params.mean_injections_per_tick > 0.0)
        || !stimulus_params.mean_injections_per_tick.is_finite()
    {
        return Err(SimpleError::new(
            "mean_injections_per_tick must be strictly positive and finite",
        ));
    }

    if !stimulus_params.signal.is_finite() {
        return Err(SimpleError::new("stimulus signal must be finite"));
    }

    Ok(())
}

fn validate_upper_bound(name: &str, value: f32) -> Result<(), SimpleError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(SimpleError::new(format!(
            "{} must be strictly positive and finite",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    fn template_run_params() -> RunParams {
        RunParams {
            checkpoint_period: Some(100),
            stimulus_params: Some(StimulusParams::default()),
            ..RunParams::default()
        }
    }

    #[test]
    fn valid_params() {
        assert!(validate_init_params(&InitParams::default()).is_ok());
        assert!(validate_run_params(&template_run_params()).is_ok());
        assert!(validate_run_params(&RunParams::default()).is_ok());
    }

    #[test]
    fn zero_neurons() {
        let mut params = InitParams::default();
        params.num_neurons = 0;
        let result = validate_init_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "num_neurons must be strictly positive"
        );
    }

    #[test]
    fn zero_max_activation_threshold() {
        let mut params = InitParams::default();
        params.max_activation_threshold = 0.0;
        let result = validate_init_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "max_activation_threshold must be strictly positive and finite"
        );
    }

    #[test]
    fn negative_max_weight() {
        let mut params = InitParams::default();
        params.max_weight = -1.0;
        let result = validate_init_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "max_weight must be strictly positive and finite"
        );
    }

    #[test]
    fn infinite_max_reactivation_delay() {
        let mut params = InitParams::default();
        params.max_reactivation_delay = f32::INFINITY;
        let result = validate_init_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "max_reactivation_delay must be strictly positive and finite"
        );
    }

    #[test]
    fn nan_max_initial_signal() {
        let mut params = InitParams::default();
        params.max_initial_signal = f32::NAN;
        let result = validate_init_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "max_initial_signal must be strictly positive and finite"
        );
    }

    #[test]
    fn run_params_check_init_params() {
        let mut params = template_run_params();
        params.init_params.num_neurons = 0;
        let result = validate_run_params(&params);

        assert_eq!(
            result.unwrap_err().as_str(),
            "num_neurons must be strictly positive"
        );
    }

    #[test]
    fn zero_checkpoint_period() {
        let mut params = template_run_params();
        params.checkpoint_period = Some(0);
        let result = validate_run_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "checkpoint_period must be strictly positive"
        );
    }

    #[test]
    fn compression_level_out_of_range() {
        let mut params = template_run_params();
        params.compression_level = zstd::compression_level_range().end() + 1;
        let result = validate_run_params(&params);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .as_str()
            .starts_with("compression_level must be in"));
    }

    #[test]
    fn zero_stimulus_rate() {
        let mut params = template_run_params();
        params.stimulus_params.as_mut().unwrap().mean_injections_per_tick = 0.0;
        let result = validate_run_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "mean_injections_per_tick must be strictly positive and finite"
        );
    }

    #[test]
    fn infinite_stimulus_signal() {
        let mut params = template_run_params();
        params.stimulus_params.as_mut().unwrap().signal = f32::NEG_INFINITY;
        let result = validate_run_params(&params);

        assert!(result.is_err());

        assert_eq!(
            result.unwrap_err().as_str(),
            "stimulus signal must be finite"
        );
    }

    #[test]
    fn deserialize_from_yaml() {
        let yaml = r#"
init_params:
  num_neurons: 16
  max_activation_threshold: 0.5
  max_weight: 1.0
  max_reactivation_delay: 10.0
  max_initial_signal: 1.0
  zero_self_loops: false
  seed_override: 7
t_stop: 100
checkpoint_period: null
compression_level: 5
stimulus_params: null
"#;

        let params: RunParams = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(params.init_params.num_neurons, 16);
        assert_eq!(params.init_params.seed_override, Some(7));
        assert!(!params.init_params.zero_self_loops);
        assert_eq!(params.compression_level, 5);
        assert!(validate_run_params(&params).is_ok());
    }
}
