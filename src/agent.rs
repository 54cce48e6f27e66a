use crate::state::MindState;
use simple_error::{SimpleError, SimpleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    nid: usize,
}

impl Agent {
    pub fn new(nid: usize) -> Self {
        Self { nid }
    }

    pub fn get_nid(&self) -> usize {
        self.nid
    }

    pub fn inject(&self, state: &mut MindState, signal: f32) -> SimpleResult<()> {
        if self.nid >= state.num_neurons() {
            return Err(SimpleError::new(format!(
                "Invalid neuron id for injection: {}",
                self.nid
            )));
        }

        state.signal_map[self.nid] = signal;
        state.next_activations[self.nid] = 0.0;

        Ok(())
    }
}
