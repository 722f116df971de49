//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use ndcube_core::{Animator, Polytope, ProjectionKind};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    last_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            last_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the current view state in the title bar
    pub fn update_title(&mut self, animator: &Animator) {
        let title = format_title(&self.base_title, &TitleStatus::from_animator(animator));
        // Only touch the window when something changed
        if title != self.last_title {
            self.window.set_title(&title);
            self.last_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// View state shown in the title bar
#[derive(Debug, Clone, PartialEq)]
pub struct TitleStatus {
    pub dimension: usize,
    pub vertices: usize,
    pub edges: usize,
    pub projection: ProjectionKind,
    pub speed: f64,
    pub animating: bool,
    pub static_mode: bool,
    /// Dimension a running morph is heading to
    pub morph_target: Option<usize>,
}

impl TitleStatus {
    pub fn from_animator(animator: &Animator) -> Self {
        let params = animator.params();
        Self {
            dimension: params.dimension(),
            vertices: animator.geometry().point_count(),
            edges: animator.geometry().edge_count(),
            projection: params.projection,
            speed: params.speed(),
            animating: params.animating,
            static_mode: params.static_mode,
            morph_target: animator.morph().map(|m| m.target().dimension()),
        }
    }
}

pub fn format_title(base: &str, status: &TitleStatus) -> String {
    let mode = if let Some(target) = status.morph_target {
        format!(" [morphing to {}D]", target)
    } else if status.static_mode {
        " [static]".to_string()
    } else if !status.animating {
        " [paused]".to_string()
    } else {
        String::new()
    };
    format!(
        "{} - {}D ({} vertices, {} edges) {:?} {:.1} rad/s{}",
        base, status.dimension, status.vertices, status.edges, status.projection, status.speed, mode
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ndcube_core::{ParamChange, ViewParams};

    fn status() -> TitleStatus {
        TitleStatus {
            dimension: 4,
            vertices: 16,
            edges: 32,
            projection: ProjectionKind::Truncate,
            speed: 0.5,
            animating: true,
            static_mode: false,
            morph_target: None,
        }
    }

    #[test]
    fn test_title_formatting() {
        let title = format_title("ndcube", &status());
        assert_eq!(title, "ndcube - 4D (16 vertices, 32 edges) Truncate 0.5 rad/s");
    }

    #[test]
    fn test_title_modes() {
        let mut s = status();
        s.animating = false;
        assert!(format_title("t", &s).ends_with("[paused]"));
        s.static_mode = true;
        assert!(format_title("t", &s).ends_with("[static]"));
        s.morph_target = Some(7);
        assert!(format_title("t", &s).ends_with("[morphing to 7D]"));
    }

    #[test]
    fn test_status_from_animator() {
        let animator = Animator::new(ViewParams::default()).unwrap();
        let s = TitleStatus::from_animator(&animator);
        assert_eq!(s.dimension, 3);
        assert_eq!(s.vertices, 8);
        assert_eq!(s.edges, 12);
        assert_eq!(s.morph_target, None);
    }

    #[test]
    fn test_status_shows_morph_target() {
        let mut animator = Animator::new(ViewParams::default()).unwrap();
        animator.apply(ParamChange::MorphTo(5)).unwrap();
        let s = TitleStatus::from_animator(&animator);
        assert_eq!(s.morph_target, Some(5));
        assert!(format_title("ndcube", &s).ends_with("[morphing to 5D]"));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
