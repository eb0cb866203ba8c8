//! Compositing configuration types

/// Which header is written alongside the final pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Keep the tracking image's own header; only `combine` replaces it.
    #[default]
    Tracking,
    /// Every load overwrites the output header, including blend sources.
    LastLoaded,
}

/// Configuration for a compositing run
#[derive(Debug, Clone)]
pub struct CompositeConfig {
    /// Header selection for the output file
    pub header_policy: HeaderPolicy,
    /// Whether to reject zero-sized canvases on load (off: 0xN is a valid, empty image)
    pub validate_dimensions: bool,
    /// Whether to enforce the `.tga` extension and input existence before loading
    pub check_files: bool,
    /// Write through a temporary file and rename it into place on success
    pub atomic_write: bool,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::Tracking,
            validate_dimensions: false,
            check_files: true,
            atomic_write: true,
        }
    }
}

impl CompositeConfig {
    pub fn builder() -> CompositeConfigBuilder {
        CompositeConfigBuilder::default()
    }
}

/// Builder for CompositeConfig
#[derive(Default)]
pub struct CompositeConfigBuilder {
    header_policy: Option<HeaderPolicy>,
    validate_dimensions: Option<bool>,
    check_files: Option<bool>,
    atomic_write: Option<bool>,
}

impl CompositeConfigBuilder {
    pub fn header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = Some(policy);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn check_files(mut self, check: bool) -> Self {
        self.check_files = Some(check);
        self
    }

    pub fn atomic_write(mut self, enable: bool) -> Self {
        self.atomic_write = Some(enable);
        self
    }

    pub fn build(self) -> CompositeConfig {
        let default = CompositeConfig::default();
        CompositeConfig {
            header_policy: self.header_policy.unwrap_or(default.header_policy),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            check_files: self.check_files.unwrap_or(default.check_files),
            atomic_write: self.atomic_write.unwrap_or(default.atomic_write),
        }
    }
}
