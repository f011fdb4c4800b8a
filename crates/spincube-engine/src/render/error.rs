use std::fmt;

use crate::device::ShaderKind;

/// Renderer setup failure.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RenderError {
    /// The context refused to create a shader object.
    CreateShader(ShaderKind),
    /// A shader stage failed to compile. The info log was already logged.
    ShaderCompile(ShaderKind),
    /// The context refused to create a program object.
    CreateProgram,
    /// The program failed to link; carries the info log.
    Link(String),
    /// The context refused to create the named buffer.
    CreateBuffer(&'static str),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CreateShader(kind) => {
                write!(f, "failed to create {} shader", kind.name())
            }
            RenderError::ShaderCompile(kind) => {
                write!(f, "{} shader failed to compile", kind.name())
            }
            RenderError::CreateProgram => write!(f, "failed to create shader program"),
            RenderError::Link(log) => write!(f, "shader program failed to link: {log}"),
            RenderError::CreateBuffer(name) => write!(f, "failed to create {name} buffer"),
        }
    }
}

impl std::error::Error for RenderError {}
