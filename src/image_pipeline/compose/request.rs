//! Operation requests and the token parser that produces them.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::{CompositeError, Result};
use crate::image_pipeline::ops::BlendMode;
use crate::image_pipeline::tga::types::Channel;

/// One step of a compositing run, in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    /// Blend the tracking image with the image at `path`.
    Blend { mode: BlendMode, path: PathBuf },
    AddChannel { channel: Channel, value: i32 },
    ScaleChannel { channel: Channel, factor: i32 },
    /// Replace the tracking image with a grayscale copy of one channel.
    ExtractChannel { channel: Channel },
    /// Tracking image supplies red, `green` and `blue` supply the rest.
    Combine { green: PathBuf, blue: PathBuf },
    Flip,
}

impl OperationRequest {
    /// Files this request loads when executed.
    pub fn file_operands(&self) -> Vec<&Path> {
        match self {
            OperationRequest::Blend { path, .. } => vec![path.as_path()],
            OperationRequest::Combine { green, blue } => vec![green.as_path(), blue.as_path()],
            _ => Vec::new(),
        }
    }

    /// The command-line token naming this request.
    pub fn token(&self) -> String {
        match self {
            OperationRequest::Blend { mode, .. } => mode.name().to_string(),
            OperationRequest::AddChannel { channel, .. } => format!("add{}", channel),
            OperationRequest::ScaleChannel { channel, .. } => format!("scale{}", channel),
            OperationRequest::ExtractChannel { channel } => format!("only{}", channel),
            OperationRequest::Combine { .. } => "combine".to_string(),
            OperationRequest::Flip => "flip".to_string(),
        }
    }
}

impl fmt::Display for OperationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationRequest::Blend { mode, path } => write!(f, "{} {}", mode, path.display()),
            OperationRequest::AddChannel { channel, value } => write!(f, "add{} {}", channel, value),
            OperationRequest::ScaleChannel { channel, factor } => {
                write!(f, "scale{} {}", channel, factor)
            }
            OperationRequest::ExtractChannel { channel } => write!(f, "only{}", channel),
            OperationRequest::Combine { green, blue } => {
                write!(f, "combine {} {}", green.display(), blue.display())
            }
            OperationRequest::Flip => f.write_str("flip"),
        }
    }
}

fn next_operand<'a, I>(tokens: &mut I, method: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .ok_or_else(|| CompositeError::InvalidArgument(format!("missing argument for {}", method)))
}

fn parse_integer(token: &str, method: &str) -> Result<i32> {
    token.parse::<i32>().map_err(|_| {
        CompositeError::InvalidArgument(format!(
            "expected number for {}, got '{}'",
            method, token
        ))
    })
}

/// Splits a channel-suffixed method such as `addred` into `("add", Red)`.
fn split_channel_method(method: &str) -> Option<(&str, Channel)> {
    ["add", "scale", "only"].into_iter().find_map(|prefix| {
        let channel = method.strip_prefix(prefix)?.parse::<Channel>().ok()?;
        Some((prefix, channel))
    })
}

/// Parses the ordered operation tokens that follow the input image.
///
/// Nothing is loaded here. Unknown method names fail with
/// [`CompositeError::UnknownOperation`], missing or non-numeric operands with
/// [`CompositeError::InvalidArgument`].
pub fn parse_operations<I, S>(tokens: I) -> Result<Vec<OperationRequest>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = tokens.into_iter().collect();
    let mut tokens = owned.iter().map(|s| s.as_ref());
    let mut requests = Vec::new();

    while let Some(method) = tokens.next() {
        let request = if let Ok(mode) = method.parse::<BlendMode>() {
            let path = next_operand(&mut tokens, method)?;
            OperationRequest::Blend { mode, path: PathBuf::from(path) }
        } else if let Some((prefix, channel)) = split_channel_method(method) {
            match prefix {
                "add" => {
                    let value = parse_integer(next_operand(&mut tokens, method)?, method)?;
                    OperationRequest::AddChannel { channel, value }
                }
                "scale" => {
                    let factor = parse_integer(next_operand(&mut tokens, method)?, method)?;
                    OperationRequest::ScaleChannel { channel, factor }
                }
                _ => OperationRequest::ExtractChannel { channel },
            }
        } else if method == "combine" {
            let green = next_operand(&mut tokens, method)?;
            let blue = next_operand(&mut tokens, method)?;
            OperationRequest::Combine {
                green: PathBuf::from(green),
                blue: PathBuf::from(blue),
            }
        } else if method == "flip" {
            OperationRequest::Flip
        } else {
            return Err(CompositeError::UnknownOperation(method.to_string()));
        };

        requests.push(request);
    }

    Ok(requests)
}
