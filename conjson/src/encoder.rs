//! Streaming encoder writing one rewritten document per call

use crate::config::EncoderOptions;
use crate::error::Result;
use crate::marshal::marshal_bytes;
use conjson_transform::Pipeline;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use tracing::debug;

/// Writes JSON documents with rewritten keys to a writer
///
/// Each [`encode`](Encoder::encode) call writes one document followed by a
/// newline, so the output is a newline-delimited stream.
pub struct Encoder<W: Write> {
    writer: W,
    pipeline: Pipeline,
    options: EncoderOptions,
}

impl<W: Write> Encoder<W> {
    /// Create a compact encoder
    pub fn new(writer: W, pipeline: Pipeline) -> Self {
        Self::with_options(writer, pipeline, EncoderOptions::default())
    }

    /// Create an encoder with explicit options
    pub fn with_options(writer: W, pipeline: Pipeline, options: EncoderOptions) -> Self {
        Self {
            writer,
            pipeline,
            options,
        }
    }

    /// Indent nested values by `indent` per level
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.options.indent = Some(indent.into());
        self
    }

    /// Current options
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Serialize `value`, rewrite its keys and write it
    ///
    /// Nothing is written when serialization fails.
    pub fn encode<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.options.validate()?;

        let encoded = match &self.options.indent {
            Some(indent) => {
                let mut buffer = Vec::with_capacity(128);
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
                value.serialize(&mut serializer)?;
                buffer
            }
            None => serde_json::to_vec(value)?,
        };

        let mut document = marshal_bytes(&encoded, &self.pipeline);
        document.push(b'\n');
        self.writer.write_all(&document)?;
        debug!(bytes = document.len(), "encoded document");
        Ok(())
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
