use crate::error::MindError;
use crate::validation;

pub const MAX_TICK: u32 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    num_rows: usize,
    num_cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            data: vec![0.0; num_rows * num_cols],
        }
    }

    pub fn from_shape_vec(num_rows: usize, num_cols: usize, data: Vec<f32>) -> Option<Self> {
        if num_rows.checked_mul(num_cols)? != data.len() {
            return None;
        }

        Some(Self {
            num_rows,
            num_cols,
            data,
        })
    }

    pub fn from_rows(rows: &[Vec<f32>]) -> Option<Self> {
        let num_cols = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != num_cols) {
            return None;
        }

        Some(Self {
            num_rows: rows.len(),
            num_cols,
            data: rows.concat(),
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    pub fn row(&self, row_idx: usize) -> &[f32] {
        let start = row_idx * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    pub fn get(&self, row_idx: usize, col_idx: usize) -> f32 {
        self.data[row_idx * self.num_cols + col_idx]
    }

    pub fn set(&mut self, row_idx: usize, col_idx: usize, value: f32) {
        self.data[row_idx * self.num_cols + col_idx] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.num_cols.max(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MindState {
    pub tick: u32,
    pub activation_thresholds: Vec<f32>,
    pub outputs_weights: Matrix,
    pub input_weights: Matrix,
    pub reactivation_delays: Vec<f32>,
    pub next_activations: Vec<f32>,
    pub signal_map: Vec<f32>,
    pub neural_activity: Vec<f32>,
}

impl MindState {
    pub fn new(
        tick: u32,
        activation_thresholds: Vec<f32>,
        outputs_weights: Matrix,
        input_weights: Matrix,
        reactivation_delays: Vec<f32>,
        next_activations: Vec<f32>,
        signal_map: Vec<f32>,
    ) -> Result<Self, MindError> {
        let neural_activity = vec![0.0; signal_map.len()];

        let state = Self {
            tick,
            activation_thresholds,
            outputs_weights,
            input_weights,
            reactivation_delays,
            next_activations,
            signal_map,
            neural_activity,
        };

        validation::validate(&state)?;

        Ok(state)
    }

    pub fn num_neurons(&self) -> usize {
        self.neural_activity.len()
    }
}
