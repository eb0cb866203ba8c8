use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    common::error::{CompositeError, Result},
    compose::request::OperationRequest,
    compose::types::{CompositeConfig, HeaderPolicy},
    compose::validation::{validate_file_name, validate_input_file},
    ops::{add_channel, blend_buffers, combine_channels, extract_channel, rotate180, scale_channel},
    tga::{StandardTgaReader, StandardTgaWriter, TgaHeader, TgaImage, TgaReader, TgaWriter},
};

fn output_write_error(path: &Path, e: std::io::Error) -> CompositeError {
    CompositeError::OutputWriteError(format!("{}: {}", path.display(), e))
}

/// Threads a tracking image through an ordered list of operations.
pub struct CompositePipeline<R: TgaReader, W: TgaWriter> {
    reader: R,
    writer: W,
    config: CompositeConfig,
}

impl CompositePipeline<StandardTgaReader, StandardTgaWriter> {
    pub fn new(config: CompositeConfig) -> Self {
        Self {
            reader: StandardTgaReader,
            writer: StandardTgaWriter,
            config,
        }
    }
}

impl<R: TgaReader, W: TgaWriter> CompositePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CompositeConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, header: &TgaHeader) -> Result<()> {
        let (width, height) = header.dimensions()?;
        if self.config.validate_dimensions && (width == 0 || height == 0) {
            return Err(CompositeError::InvalidDimensions(header.width, header.height));
        }
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<TgaImage> {
        let _span = tracing::info_span!("load_image", path = %path.display()).entered();
        let image = self.reader.read_tga_file(path)?;
        self.validate_dimensions(&image.header)?;
        debug!(
            width = image.header.width,
            height = image.header.height,
            "Loaded image"
        );
        Ok(image)
    }

    /// Checks every path the run will touch before anything is loaded.
    pub fn validate_files(
        &self,
        input: &Path,
        output: &Path,
        operations: &[OperationRequest],
    ) -> Result<()> {
        if !self.config.check_files {
            return Ok(());
        }

        validate_file_name(output)?;
        validate_input_file(input)?;
        for path in operations.iter().flat_map(|op| op.file_operands()) {
            validate_input_file(path)?;
        }
        Ok(())
    }

    /// Applies a single request to `image`, loading secondary images as needed.
    pub fn apply(&self, image: &mut TgaImage, request: &OperationRequest) -> Result<()> {
        match request {
            OperationRequest::Blend { mode, path } => {
                let other = self.load(path)?;
                blend_buffers(*mode, &mut image.pixels, &other.pixels)?;
                if self.config.header_policy == HeaderPolicy::LastLoaded {
                    image.header = other.header;
                }
            }
            OperationRequest::AddChannel { channel, value } => {
                add_channel(&mut image.pixels, *value, *channel);
            }
            OperationRequest::ScaleChannel { channel, factor } => {
                scale_channel(&mut image.pixels, *factor, *channel);
            }
            OperationRequest::ExtractChannel { channel } => {
                image.pixels = extract_channel(&image.pixels, *channel);
            }
            OperationRequest::Combine { green, blue } => {
                let green = self.load(green)?;
                let blue = self.load(blue)?;
                image.pixels = combine_channels(&image.pixels, &green.pixels, &blue.pixels)?;
                // The combined canvas takes the most recently loaded header.
                image.header = blue.header;
            }
            OperationRequest::Flip => rotate180(&mut image.pixels),
        }
        Ok(())
    }

    /// Runs `operations` in order over an already loaded tracking image.
    #[instrument(skip_all, fields(operations = operations.len()))]
    pub fn execute(&self, mut image: TgaImage, operations: &[OperationRequest]) -> Result<TgaImage> {
        for (index, request) in operations.iter().enumerate() {
            let _span = tracing::info_span!("operation", index, op = %request.token()).entered();
            debug!("Applying {}", request);
            self.apply(&mut image, request)?;
        }
        Ok(image)
    }

    pub fn write(&self, image: &TgaImage, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_tga").entered();
        self.writer.write_tga(image, output)
    }

    fn write_file(&self, image: &TgaImage, output_path: &Path) -> Result<()> {
        if !self.config.atomic_write {
            let mut file = std::fs::File::create(output_path)
                .map_err(|e| output_write_error(output_path, e))?;
            return self.write(image, &mut file);
        }

        // Stage next to the destination so the final rename stays on one filesystem.
        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut staged =
            NamedTempFile::new_in(&dir).map_err(|e| output_write_error(output_path, e))?;
        self.write(image, staged.as_file_mut())?;
        staged
            .persist(output_path)
            .map_err(|e| output_write_error(output_path, e.error))?;
        Ok(())
    }

    /// Loads `input_path`, applies `operations` and writes the result to `output_path`.
    ///
    /// Nothing is written unless every operation succeeds.
    #[instrument(skip(self, input_path, output_path, operations))]
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        operations: &[OperationRequest],
    ) -> Result<TgaImage> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            operations = operations.len(),
            "Compositing"
        );

        {
            let _span = tracing::info_span!("validate_files").entered();
            self.validate_files(input_path, output_path, operations)?;
        }

        let tracking = self.load(input_path)?;
        let image = self.execute(tracking, operations)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            self.write_file(&image, output_path)?;
        }

        info!(
            width = image.header.width,
            height = image.header.height,
            "Compositing complete"
        );
        Ok(image)
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CompositeConfig) {
        self.config = config;
    }
}
