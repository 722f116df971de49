//! ndcube - N-Dimensional Hypercube Viewer
//!
//! Rotates an n-dimensional hypercube and shows its projection into 3D.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{ModifiersState, PhysicalKey},
    window::WindowId,
};

use ndcube::config::AppConfig;
use ndcube::input::{InputAction, InputMapper};
use ndcube::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};
use ndcube_core::CoreError;
use ndcube_input::OrbitController;
use ndcube_render::OrbitCamera;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: AnimationSystem,
    camera: OrbitCamera,
    controller: OrbitController,
    /// Modifier keys currently held
    modifiers: ModifiersState,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, CoreError> {
        let animation = AnimationSystem::from_config(&config.hypercube)?;

        let camera = OrbitCamera::new(config.camera.distance)
            .with_limits(config.camera.min_distance, config.camera.max_distance)
            .with_projection(config.camera.fov, config.camera.near, config.camera.far)
            .with_damping(config.controls.damping_factor);

        let controller = OrbitController::new()
            .with_rotate_speed(config.controls.rotate_speed)
            .with_zoom_speed(config.controls.zoom_speed)
            .with_damping(config.controls.inertia_damping, config.controls.zoom_damping);

        let params = animation.animator().params();
        log::info!(
            "Starting at {}D, {:?} projection, {:.2} rad/s",
            params.dimension(),
            params.projection,
            params.speed()
        );

        Ok(Self {
            config,
            window: None,
            render: None,
            animation,
            camera,
            controller,
            modifiers: ModifiersState::empty(),
        })
    }

    /// Handle a mapped key press
    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetCamera => {
                self.camera.reset();
                self.controller.stop();
                log::info!("Camera reset to starting position");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            _ => {
                self.animation.handle_action(action);
            }
        }
    }

    /// Advance animation and camera, then draw
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = match self.animation.update() {
            Ok(dt) => dt,
            Err(e) => {
                log::error!("Animation failed: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.controller.update(&mut self.camera, dt as f32);

        if let Some(window) = &mut self.window {
            window.update_title(self.animation.animator());
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(
                &self.camera,
                self.animation.animator(),
                self.animation.model_scale(),
            ) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
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

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
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
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) =
                        InputMapper::map_keyboard(key, event.state, self.modifiers)
                    {
                        // Holding a key only repeats the stepping actions
                        let repeatable = matches!(
                            action,
                            InputAction::GrowSize
                                | InputAction::ShrinkSize
                                | InputAction::SpeedUp
                                | InputAction::SlowDown
                                | InputAction::DimensionUp
                                | InputAction::DimensionDown
                        );
                        if !event.repeat || repeatable {
                            self.handle_action(event_loop, action);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.controller.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config first so the log level can come from it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting ndcube");

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;
    Ok(())
}
