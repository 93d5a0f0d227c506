//! Window management system
//!
//! Handles window creation, fullscreen toggle, size queries and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};

use pgrid_core::Vec2;

use crate::config::WindowConfig;
use super::simulation::FrameStats;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
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
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Physical-to-logical pixel ratio
    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Inner size in logical pixels
    pub fn logical_size(&self) -> Vec2 {
        let size = self.window.inner_size().to_logical::<f32>(self.scale_factor());
        Vec2::new(size.width, size.height)
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

    /// Update window title with frame stats
    pub fn update_title(&self, stats: &FrameStats) {
        self.window.set_title(&format_title(&self.base_title, stats));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, stats: &FrameStats) -> String {
    let mut title = format!("{} - {} points - {:.0} fps", base, stats.points, stats.fps);
    if stats.paused {
        title.push_str(" [paused]");
    }
    title
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

    fn stats(paused: bool) -> FrameStats {
        FrameStats {
            frame: 10,
            points: 576,
            fps: 59.7,
            paused,
        }
    }

    #[test]
    fn test_title_formatting() {
        let title = format_title("Particle Grid", &stats(false));
        assert_eq!(title, "Particle Grid - 576 points - 60 fps");
    }

    #[test]
    fn test_title_formatting_paused() {
        let title = format_title("Particle Grid", &stats(true));
        assert!(title.ends_with("[paused]"));
    }

    #[test]
    fn test_window_error_display() {
        let e = WindowError::CreationFailed("no display".to_string());
        assert_eq!(e.to_string(), "Window creation failed: no display");
    }
}
