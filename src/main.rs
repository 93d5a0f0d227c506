//! Particle Grid
//!
//! A jittered lattice of points that bends away from the pointer, joined by
//! faint lines that brighten with pointer speed.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use particle_grid::config::AppConfig;
use particle_grid::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use pgrid_input::{map_key, SketchAction};

/// Title bar refresh interval in frames
const TITLE_INTERVAL: u64 = 30;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: Option<SimulationSystem>,
    /// Frames presented, paused or not
    redraws: u64,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            render: None,
            simulation: None,
            redraws: 0,
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: SketchAction) {
        match action {
            SketchAction::Quit => event_loop.exit(),
            SketchAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            SketchAction::Regenerate => {
                if let Some(sim) = &mut self.simulation {
                    sim.regenerate();
                }
            }
            SketchAction::TogglePause => {
                if let Some(sim) = &mut self.simulation {
                    sim.toggle_pause();
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.redraws += 1;
        let (Some(window), Some(render), Some(sim)) =
            (&self.window, &mut self.render, &mut self.simulation)
        else {
            return;
        };

        let stats = sim.update();
        if self.config.debug.show_stats && self.redraws % TITLE_INTERVAL == 0 {
            window.update_title(&stats);
        }

        match render.render_frame(sim.draw_list(), window.logical_size()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("Skipped frame: {}", e),
        }

        // Request next frame
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let simulation = SimulationSystem::new(
            self.config.to_sketch_params(),
            window.logical_size(),
            self.config.grid.seed,
        );
        log::info!(
            "Grid: {} points, {} links",
            simulation.sketch().grid().len(),
            simulation.sketch().grid().links().len()
        );

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.simulation = Some(simulation);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                if let (Some(window), Some(sim)) = (&self.window, &mut self.simulation) {
                    sim.resize(window.logical_size());
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Scale factor changed to {:.2}", scale_factor);
                if let Some(render) = &mut self.render {
                    render.set_scale_factor(scale_factor);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let (Some(window), Some(sim)) = (&self.window, &mut self.simulation) {
                    sim.pointer_mut()
                        .process_cursor_moved(position, window.scale_factor());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = map_key(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    // Load configuration before logging so the configured level can apply
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Particle Grid");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
