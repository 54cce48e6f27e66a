use crate::error::MindError;
use crate::state::{Matrix, MindState};

pub fn validate(state: &MindState) -> Result<(), MindError> {
    let num_neurons = state.neural_activity.len();

    validate_vector_len(
        "activation_thresholds",
        &state.activation_thresholds,
        num_neurons,
    )?;
    validate_vector_len(
        "reactivation_delays",
        &state.reactivation_delays,
        num_neurons,
    )?;
    validate_vector_len("next_activations", &state.next_activations, num_neurons)?;
    validate_vector_len("signal_map", &state.signal_map, num_neurons)?;
    validate_square_matrix("outputs_weights", &state.outputs_weights, num_neurons)?;
    validate_square_matrix("input_weights", &state.input_weights, num_neurons)?;

    Ok(())
}

fn validate_vector_len(
    field: &'static str,
    vector: &[f32],
    expected_size: usize,
) -> Result<(), MindError> {
    if vector.len() != expected_size {
        return Err(MindError::StructuralInvariantViolation {
            field,
            expected_size,
        });
    }

    Ok(())
}

fn validate_square_matrix(
    field: &'static str,
    matrix: &Matrix,
    expected_size: usize,
) -> Result<(), MindError> {
    if matrix.num_rows() != expected_size || matrix.num_cols() != expected_size {
        return Err(MindError::StructuralInvariantViolation {
            field,
            expected_size,
        });
    }

    Ok(())
}
