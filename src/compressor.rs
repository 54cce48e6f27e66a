use crate::error::MindError;

pub trait FrameCompressor {
    fn compress(&self, data: &[u8], level: i32) -> Result<Vec<u8>, MindError>;

    fn declared_size(&self, frame: &[u8]) -> Result<u64, MindError>;

    fn decompress(&self, frame: &[u8], capacity: usize) -> Result<Vec<u8>, MindError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ZstdCompressor;

impl FrameCompressor for ZstdCompressor {
    fn compress(&self, data: &[u8], level: i32) -> Result<Vec<u8>, MindError> {
        let mut compressor = zstd::bulk::Compressor::new(level).map_err(MindError::compression)?;
        compressor
            .include_contentsize(true)
            .map_err(MindError::compression)?;
        compressor
            .include_checksum(true)
            .map_err(MindError::compression)?;

        compressor.compress(data).map_err(MindError::compression)
    }

    fn declared_size(&self, frame: &[u8]) -> Result<u64, MindError> {
        match zstd::zstd_safe::get_frame_content_size(frame) {
            Ok(Some(size)) => Ok(size),
            Ok(None) => Err(MindError::decompression(
                "frame header does not declare a content size",
            )),
            Err(_) => Err(MindError::decompression("malformed frame header")),
        }
    }

    fn decompress(&self, frame: &[u8], capacity: usize) -> Result<Vec<u8>, MindError> {
        zstd::bulk::decompress(frame, capacity).map_err(MindError::decompression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_size_matches_input() {
        let data = vec![42u8; 10_000];
        let frame = ZstdCompressor.compress(&data, 3).unwrap();

        assert!(frame.len() < data.len());
        assert_eq!(ZstdCompressor.declared_size(&frame).unwrap(), 10_000);
        assert_eq!(ZstdCompressor.decompress(&frame, 10_000).unwrap(), data);
    }

    #[test]
    fn capacity_bounds_output() {
        let data = vec![1u8; 4096];
        let frame = ZstdCompressor.compress(&data, 1).unwrap();

        assert!(matches!(
            ZstdCompressor.decompress(&frame, 100),
            Err(MindError::DecompressionError { .. })
        ));
    }

    #[test]
    fn garbage_header() {
        assert!(matches!(
            ZstdCompressor.declared_size(b"definitely not zstd"),
            Err(MindError::DecompressionError { .. })
        ));
        assert!(ZstdCompressor.declared_size(&[]).is_err());
    }
}
