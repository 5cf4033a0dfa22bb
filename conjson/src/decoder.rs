//! Streaming decoder reading one document per call

use crate::error::Result;
use crate::marshal::unmarshal_bytes;
use conjson_transform::Pipeline;
use serde::de::DeserializeOwned;
use serde_json::de::IoRead;
use serde_json::value::RawValue;
use serde_json::StreamDeserializer;
use std::io::Read;
use tracing::debug;

/// Reads whitespace-separated JSON documents, rewriting keys before each is
/// deserialized
pub struct Decoder<R: Read> {
    stream: StreamDeserializer<'static, IoRead<R>, Box<RawValue>>,
    pipeline: Pipeline,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder over `reader`
    pub fn new(reader: R, pipeline: Pipeline) -> Self {
        Self {
            stream: serde_json::Deserializer::from_reader(reader).into_iter(),
            pipeline,
        }
    }

    /// Decode the next document, or `None` at end of input
    pub fn decode<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        let Some(raw) = self.stream.next() else {
            return Ok(None);
        };
        let raw = raw?;

        let document = unmarshal_bytes(raw.get().as_bytes(), &self.pipeline);
        debug!(offset = self.stream.byte_offset(), "decoded document");
        Ok(Some(serde_json::from_slice(&document)?))
    }

    /// Bytes consumed from the reader so far
    pub fn byte_offset(&self) -> usize {
        self.stream.byte_offset()
    }
}
