use crate::error::MindError;
use crate::state::Matrix;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

const DTYPE_F32: u8 = 1;
const ELEMENT_SIZE: usize = 4;

pub fn encode_vector(values: &[f32]) -> Vec<u8> {
    encode_array(&[values.len()], values)
}

pub fn encode_matrix(matrix: &Matrix) -> Vec<u8> {
    encode_array(&[matrix.num_rows(), matrix.num_cols()], matrix.as_slice())
}

pub fn decode_vector(field: &str, bytes: &[u8]) -> Result<Vec<f32>, MindError> {
    let (shape, values) = decode_array(field, bytes, 1)?;
    debug_assert_eq!(shape[0], values.len());
    Ok(values)
}

pub fn decode_matrix(field: &str, bytes: &[u8]) -> Result<Matrix, MindError> {
    let (shape, values) = decode_array(field, bytes, 2)?;

    Matrix::from_shape_vec(shape[0], shape[1], values)
        .ok_or_else(|| MindError::format(format!("{}: shape does not match data", field)))
}

fn encode_array(shape: &[usize], values: &[f32]) -> Vec<u8> {
    let header_len = 2 + shape.len() * 8;
    let mut bytes = Vec::with_capacity(header_len + values.len() * ELEMENT_SIZE);

    // writes into a Vec cannot fail
    bytes.push(DTYPE_F32);
    bytes.push(shape.len() as u8);
    for dim in shape {
        let _ = bytes.write_u64::<LittleEndian>(*dim as u64);
    }

    let data_start = bytes.len();
    bytes.resize(data_start + values.len() * ELEMENT_SIZE, 0);
    LittleEndian::write_f32_into(values, &mut bytes[data_start..]);

    bytes
}

fn decode_array(
    field: &str,
    bytes: &[u8],
    expected_rank: usize,
) -> Result<(Vec<usize>, Vec<f32>), MindError> {
    let truncated = || MindError::format(format!("{}: truncated array header", field));
    let mut cursor = Cursor::new(bytes);

    let dtype = cursor.read_u8().map_err(|_| truncated())?;
    if dtype != DTYPE_F32 {
        return Err(MindError::format(format!(
            "{}: unsupported dtype {}",
            field, dtype
        )));
    }

    let rank = cursor.read_u8().map_err(|_| truncated())? as usize;
    if rank != expected_rank {
        return Err(MindError::format(format!(
            "{}: expected rank {}, found {}",
            field, expected_rank, rank
        )));
    }

    let mut shape = Vec::with_capacity(rank);
    for _ in 0..rank {
        let dim = cursor.read_u64::<LittleEndian>().map_err(|_| truncated())?;
        let dim = usize::try_from(dim)
            .map_err(|_| MindError::format(format!("{}: dimension {} too large", field, dim)))?;
        shape.push(dim);
    }

    let data = &bytes[cursor.position() as usize..];
    let expected_data_len = shape
        .iter()
        .try_fold(ELEMENT_SIZE, |acc, dim| acc.checked_mul(*dim))
        .ok_or_else(|| MindError::format(format!("{}: element count overflows", field)))?;

    if data.len() != expected_data_len {
        return Err(MindError::format(format!(
            "{}: expected {} data bytes for shape {:?}, found {}",
            field,
            expected_data_len,
            shape,
            data.len()
        )));
    }

    let mut values = vec![0.0; expected_data_len / ELEMENT_SIZE];
    LittleEndian::read_f32_into(data, &mut values);

    Ok((shape, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_layout() {
        let bytes = encode_vector(&[1.0, -2.5]);

        assert_eq!(bytes[0], DTYPE_F32);
        assert_eq!(bytes[1], 1);
        assert_eq!(LittleEndian::read_u64(&bytes[2..10]), 2);
        assert_eq!(bytes.len(), 10 + 8);
        assert_eq!(LittleEndian::read_f32(&bytes[14..18]), -2.5);
    }

    #[test]
    fn matrix_shape_preserved() {
        let matrix = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let decoded = decode_matrix("m", &encode_matrix(&matrix)).unwrap();

        assert_eq!(decoded.shape(), (2, 3));
        assert_eq!(decoded, matrix);
    }

    #[test]
    fn special_values_bit_exact() {
        let values = [f32::NAN, -0.0, f32::INFINITY, f32::MIN_POSITIVE / 2.0];
        let decoded = decode_vector("v", &encode_vector(&values)).unwrap();

        for (a, b) in values.iter().zip(&decoded) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn rank_mismatch() {
        let bytes = encode_vector(&[1.0]);
        let result = decode_matrix("input_weights", &bytes);

        assert_eq!(
            result.unwrap_err(),
            MindError::FormatError {
                reason: "input_weights: expected rank 2, found 1".to_string()
            }
        );
    }

    #[test]
    fn unsupported_dtype() {
        let mut bytes = encode_vector(&[1.0]);
        bytes[0] = 7;

        assert!(matches!(
            decode_vector("v", &bytes),
            Err(MindError::FormatError { .. })
        ));
    }

    #[test]
    fn truncated_header() {
        let bytes = encode_matrix(&Matrix::zeros(2, 2));

        for len in 0..18 {
            assert!(matches!(
                decode_matrix("m", &bytes[..len]),
                Err(MindError::FormatError { .. })
            ));
        }
    }

    #[test]
    fn data_length_mismatch() {
        let mut bytes = encode_vector(&[1.0, 2.0]);
        bytes.pop();
        assert!(decode_vector("v", &bytes).is_err());

        let mut bytes = encode_vector(&[1.0, 2.0]);
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        assert!(decode_vector("v", &bytes).is_err());
    }

    #[test]
    fn oversized_dimensions_rejected() {
        let mut bytes = vec![DTYPE_F32, 2];
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());

        assert!(matches!(
            decode_matrix("m", &bytes),
            Err(MindError::FormatError { .. })
        ));
    }
}
