use std::fmt;

/// Fatal failure during startup.
///
/// Any of these ends the process with a non-zero exit code before the frame
/// loop is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// None of the requested backends is compiled into this wgpu build.
    NoBackend {
        requested: wgpu::Backends,
        enabled: wgpu::Backends,
    },
    /// The window could not be created.
    Window(String),
    /// The surface could not be bound to the window.
    Surface(String),
    /// The adapter request completed without an adapter.
    Adapter,
    /// The device request completed without a device.
    Device,
    /// The surface reported no usable format for the chosen adapter.
    NoSurfaceFormat,
}

impl StartupError {
    /// Process exit code for this failure. Every startup failure is fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBackend { requested, enabled } => write!(
                f,
                "no graphics backend available (requested {requested:?}, compiled in {enabled:?})"
            ),
            Self::Window(msg) => write!(f, "failed to create window: {msg}"),
            Self::Surface(msg) => write!(f, "failed to create surface: {msg}"),
            Self::Adapter => f.write_str("could not get a WebGPU adapter"),
            Self::Device => f.write_str("could not get a WebGPU device"),
            Self::NoSurfaceFormat => f.write_str("surface reports no supported format"),
        }
    }
}

impl std::error::Error for StartupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_step() {
        assert_eq!(StartupError::Adapter.to_string(), "could not get a WebGPU adapter");
        assert!(StartupError::Window("no display".into())
            .to_string()
            .ends_with("no display"));
    }

    #[test]
    fn every_startup_failure_exits_with_one() {
        let failures = [
            StartupError::NoBackend {
                requested: wgpu::Backends::empty(),
                enabled: wgpu::Backends::all(),
            },
            StartupError::Window("no display".into()),
            StartupError::Surface("unsupported".into()),
            StartupError::Adapter,
            StartupError::Device,
            StartupError::NoSurfaceFormat,
        ];
        for err in &failures {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn converts_into_anyhow_with_message() {
        let err: anyhow::Error = StartupError::Device.into();
        assert_eq!(format!("{err:#}"), "could not get a WebGPU device");
        assert_eq!(err.downcast_ref::<StartupError>(), Some(&StartupError::Device));
    }
}
