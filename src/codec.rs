use crate::compressor::{FrameCompressor, ZstdCompressor};
use crate::error::MindError;
use crate::state::{MindState, MAX_TICK};
use crate::tensor;
use crate::validation;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

pub const SCHEMA_VERSION: i64 = 1;
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;
pub const MAX_DECOMPRESSED_SIZE: u64 = 100 * 1024 * 1024 * 1024;

// tensors are hex strings so the document parser never expands them into
// per-byte nodes; on decode they are borrowed from the decompressed buffer
#[derive(Debug, Serialize, Deserialize)]
struct MindDocument<'a> {
    version: i64,
    tick: u32,
    #[serde(borrow)]
    activation_thresholds: Cow<'a, str>,
    #[serde(borrow)]
    outputs_weights: Cow<'a, str>,
    #[serde(borrow)]
    input_weights: Cow<'a, str>,
    #[serde(borrow)]
    reactivation_delays: Cow<'a, str>,
    #[serde(borrow)]
    next_activations: Cow<'a, str>,
    #[serde(borrow)]
    signal_map: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct DocumentHeader {
    version: Option<Value>,
}

pub fn encode(state: &MindState, compression_level: i32) -> Result<Vec<u8>, MindError> {
    encode_with(&ZstdCompressor, state, compression_level)
}

pub fn encode_default(state: &MindState) -> Result<Vec<u8>, MindError> {
    encode(state, DEFAULT_COMPRESSION_LEVEL)
}

pub fn decode(bytes: &[u8]) -> Result<MindState, MindError> {
    decode_with(&ZstdCompressor, bytes)
}

pub fn encode_with<C: FrameCompressor>(
    compressor: &C,
    state: &MindState,
    compression_level: i32,
) -> Result<Vec<u8>, MindError> {
    validation::validate(state)?;

    let document = MindDocument {
        version: SCHEMA_VERSION,
        tick: state.tick,
        activation_thresholds: hex::encode(tensor::encode_vector(&state.activation_thresholds))
            .into(),
        outputs_weights: hex::encode(tensor::encode_matrix(&state.outputs_weights)).into(),
        input_weights: hex::encode(tensor::encode_matrix(&state.input_weights)).into(),
        reactivation_delays: hex::encode(tensor::encode_vector(&state.reactivation_delays))
            .into(),
        next_activations: hex::encode(tensor::encode_vector(&state.next_activations)).into(),
        signal_map: hex::encode(tensor::encode_vector(&state.signal_map)).into(),
    };

    let serialized = serde_json::to_vec(&document)
        .map_err(|e| MindError::compression(format!("document serialization: {}", e)))?;
    let compressed = compressor.compress(&serialized, compression_level)?;

    debug!(
        "encoded {} neurons at tick {}: {} document bytes, {} compressed",
        state.num_neurons(),
        state.tick,
        serialized.len(),
        compressed.len()
    );

    Ok(compressed)
}

pub fn decode_with<C: FrameCompressor>(
    compressor: &C,
    bytes: &[u8],
) -> Result<MindState, MindError> {
    let declared = compressor.declared_size(bytes)?;

    let size_limit_exceeded = MindError::SizeLimitExceeded {
        declared,
        ceiling: MAX_DECOMPRESSED_SIZE,
    };

    if declared > MAX_DECOMPRESSED_SIZE {
        return Err(size_limit_exceeded);
    }

    let capacity = usize::try_from(declared).map_err(|_| size_limit_exceeded)?;
    let decompressed = compressor.decompress(bytes, capacity)?;

    if decompressed.len() != capacity {
        return Err(MindError::decompression(format!(
            "frame declared {} bytes but produced {}",
            declared,
            decompressed.len()
        )));
    }

    check_version(&decompressed)?;
    let document: MindDocument =
        serde_json::from_slice(&decompressed).map_err(MindError::format)?;

    if document.tick >= MAX_TICK {
        return Err(MindError::format(format!(
            "tick {} is not below {}",
            document.tick, MAX_TICK
        )));
    }

    let state = MindState::new(
        document.tick,
        tensor::decode_vector(
            "activation_thresholds",
            &unhex("activation_thresholds", &document.activation_thresholds)?,
        )?,
        tensor::decode_matrix(
            "outputs_weights",
            &unhex("outputs_weights", &document.outputs_weights)?,
        )?,
        tensor::decode_matrix(
            "input_weights",
            &unhex("input_weights", &document.input_weights)?,
        )?,
        tensor::decode_vector(
            "reactivation_delays",
            &unhex("reactivation_delays", &document.reactivation_delays)?,
        )?,
        tensor::decode_vector(
            "next_activations",
            &unhex("next_activations", &document.next_activations)?,
        )?,
        tensor::decode_vector("signal_map", &unhex("signal_map", &document.signal_map)?)?,
    )?;

    debug!(
        "decoded {} neurons at tick {} from {} bytes",
        state.num_neurons(),
        state.tick,
        bytes.len()
    );

    Ok(state)
}

// reads only the version; every other field is skipped without being built
fn check_version(document: &[u8]) -> Result<(), MindError> {
    let header: DocumentHeader = serde_json::from_slice(document).map_err(MindError::format)?;

    let version = header
        .version
        .ok_or_else(|| MindError::format("missing field `version`"))?
        .as_i64()
        .ok_or_else(|| MindError::format("field `version` is not an integer"))?;

    if version != SCHEMA_VERSION {
        return Err(MindError::SchemaVersionError {
            found: version,
            expected: SCHEMA_VERSION,
        });
    }

    Ok(())
}

fn unhex(field: &str, text: &str) -> Result<Vec<u8>, MindError> {
    hex::decode(text).map_err(|e| MindError::format(format!("{}: {}", field, e)))
}
