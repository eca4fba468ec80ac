use std::convert::Infallible;

use crate::Figure;

/// A surface that can show a [`Figure`].
///
/// Views build a figure and pass it here; they never draw directly. Enable
/// the `plot` feature for an egui window, or use [`Recorder`] to keep figures
/// for inspection.
pub trait Renderer {
    type Error: std::error::Error + 'static;

    /// Shows `figure`, returning once it has been displayed.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error if the figure cannot be shown.
    fn render(&mut self, figure: Figure) -> Result<(), Self::Error>;
}

/// Allows `&mut R` to be passed where a renderer is taken by value, so the
/// renderer can be inspected afterward.
impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, figure: Figure) -> Result<(), Self::Error> {
        (**self).render(figure)
    }
}

/// A renderer that keeps every figure it is given.
#[derive(Debug, Default)]
pub struct Recorder {
    figures: Vec<Figure>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Figures received so far, oldest first.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// The most recently received figure.
    #[must_use]
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }

    #[must_use]
    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl Renderer for Recorder {
    type Error = Infallible;

    fn render(&mut self, figure: Figure) -> Result<(), Infallible> {
        log::debug!(
            "recorded figure with {} panel(s) in a {}x{} grid",
            figure.panels.len(),
            figure.rows,
            figure.cols
        );
        self.figures.push(figure);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_figures_in_order() {
        let mut recorder = Recorder::new();
        recorder.render(Figure::grid(1, 1).title("first")).unwrap();
        recorder.render(Figure::grid(2, 3).title("second")).unwrap();

        assert_eq!(recorder.figures().len(), 2);
        assert_eq!(recorder.last().and_then(|f| f.title.as_deref()), Some("second"));
    }

    #[test]
    fn mutable_reference_forwards() {
        fn show(mut renderer: impl Renderer) {
            let _ = renderer.render(Figure::grid(1, 1));
        }

        let mut recorder = Recorder::new();
        show(&mut recorder);
        show(&mut recorder);
        assert_eq!(recorder.into_figures().len(), 2);
    }
}
