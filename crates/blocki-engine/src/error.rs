//! Startup failures.
//!
//! Every variant is terminal for the session: the runtime stops and hands the
//! error back to whoever called [`crate::window::Runtime::run`].

/// Error raised while bringing up the context or the shader program.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The embedding document has no shader source under `id`.
    #[error("shader source `{id}` not found")]
    ShaderSourceMissing { id: String },

    /// A shader source failed to parse or validate.
    #[error("shader `{id}` failed to compile:\n{message}")]
    ShaderCompile { id: String, message: String },

    /// The compiled stages could not be combined into one program, or a
    /// required attribute/uniform is not part of it.
    #[error("failed to link shader program: {message}")]
    ProgramLink { message: String },

    /// No backend produced an adapter + device for the surface.
    #[error("failed to create a rendering context (tried {})", .attempts.join("; "))]
    ContextUnavailable { attempts: Vec<String> },
}

impl SetupError {
    pub(crate) fn compile(id: &str, message: impl Into<String>) -> Self {
        Self::ShaderCompile { id: id.to_string(), message: message.into() }
    }

    pub(crate) fn link(message: impl Into<String>) -> Self {
        Self::ProgramLink { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_error_lists_attempts() {
        let err = SetupError::ContextUnavailable {
            attempts: vec!["PRIMARY: no adapter".into(), "GL: no adapter".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("PRIMARY: no adapter; GL: no adapter"), "{msg}");
    }

    #[test]
    fn missing_source_names_the_id() {
        let err = SetupError::ShaderSourceMissing { id: "shader-vs".into() };
        assert_eq!(err.to_string(), "shader source `shader-vs` not found");
    }
}
