use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::VisualizationSession;
use crate::controllers::session::errors::input_error::InputError;
use crate::controllers::session::errors::render_error::RenderError;
use crate::controllers::session::ports::presenter::SessionPresenterPort;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::viewport::Viewport;
use crate::presenters::memory::frame_store::FrameStore;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug)]
pub enum CliError {
    Input(InputError),
    Render(RenderError),
    MissingFrame { kind: AlgorithmKind },
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "invalid input: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::MissingFrame { kind } => write!(f, "no frame was produced for {}", kind),
            Self::Io { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::MissingFrame { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

/// Renders algorithms with the default coordinates and writes one file each.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    viewport: Viewport,
    output_dir: PathBuf,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            viewport: Viewport::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn output_path(&self, kind: AlgorithmKind) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", kind.id(), self.presenter.extension()))
    }

    /// Renders `kind` and writes the frame, returning where it went.
    pub fn render(&self, kind: AlgorithmKind) -> Result<PathBuf, CliError> {
        let frame_store = Arc::new(FrameStore::new());
        let mut session = VisualizationSession::new(
            self.viewport,
            Arc::clone(&frame_store) as Arc<dyn SessionPresenterPort>,
        );

        session.run(kind)?;

        let frame = frame_store
            .take_frame()
            .ok_or(CliError::MissingFrame { kind })?
            .map_err(CliError::Render)?;

        let path = self.output_path(kind);
        self.presenter
            .present(&frame.pixel_buffer, &path)
            .map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;

        println!("{}", session.status());
        println!("Points: {}", session.result().map_or(0, |r| r.points.len()));
        println!("Frame:  {:?}", frame.render_duration);
        println!("Saved to {}", path.display());

        Ok(path)
    }

    pub fn render_all(&self, kinds: &[AlgorithmKind]) -> Result<Vec<PathBuf>, CliError> {
        println!(
            "Rendering {} algorithm(s) at {}x{}...",
            kinds.len(),
            self.viewport.width,
            self.viewport.height
        );

        kinds.iter().map(|&kind| self.render(kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFilePresenter {
        written: Mutex<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for MockFilePresenter {
        fn extension(&self) -> &'static str {
            "raw"
        }

        fn present(
            &self,
            buffer: &PixelBuffer,
            filepath: impl AsRef<Path>,
        ) -> std::io::Result<()> {
            let rect = buffer.pixel_rect();
            self.written.lock().unwrap().push((
                filepath.as_ref().to_path_buf(),
                rect.width(),
                rect.height(),
            ));
            Ok(())
        }
    }

    struct FailingFilePresenter;

    impl FilePresenterPort for FailingFilePresenter {
        fn extension(&self) -> &'static str {
            "ppm"
        }

        fn present(
            &self,
            _buffer: &PixelBuffer,
            _filepath: impl AsRef<Path>,
        ) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_output_path_uses_id_and_extension() {
        let controller =
            CliController::new(MockFilePresenter::default()).with_output_dir("frames");

        assert_eq!(
            controller.output_path(AlgorithmKind::BresenhamCircle),
            PathBuf::from("frames").join("bresenham-circle.raw")
        );
    }

    #[test]
    fn test_render_all_writes_one_frame_per_kind() {
        let controller = CliController::new(MockFilePresenter::default())
            .with_viewport(Viewport::new(160, 120));

        let paths = controller.render_all(AlgorithmKind::ALL).unwrap();

        assert_eq!(paths.len(), 6);
        let written = controller.presenter.written.lock().unwrap();
        assert_eq!(written.len(), 6);
        assert!(written.iter().all(|(_, w, h)| (*w, *h) == (160, 120)));
        assert_eq!(written[4].0, PathBuf::from("output").join("wu.raw"));
    }

    #[test]
    fn test_io_failure_is_reported_with_path() {
        let controller = CliController::new(FailingFilePresenter);

        let err = controller.render(AlgorithmKind::Dda).unwrap_err();

        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("dda.ppm"));
        assert!(err.source().is_some());
    }
}
