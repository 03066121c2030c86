//! Chopper - Model Viewer
//!
//! Draws the helicopter model through the hand-written matrix pipeline.
//! Keyboard sliders move, rotate and scale the model; every change rebuilds
//! the frame matrix and redraws.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use chopper::config::AppConfig;
use chopper::input::{InputAction, InputMapper};
use chopper::systems::WindowSystem;
use chopper_core::{Driver, FrameOutcome, Model};
use chopper_input::SliderController;
use chopper_render::{GpuBackend, RenderError};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    driver: Option<Driver<GpuBackend>>,
    controller: SliderController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = SliderController::new().with_steps(config.input.to_slider_steps());
        Self {
            config,
            window: None,
            driver: None,
            controller,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;

        let options = self.config.rendering.to_backend_options(self.config.window.vsync);
        let backend = pollster::block_on(GpuBackend::new(window.window().clone(), options))?;

        let driver = Driver::new(
            backend,
            Model::helicopter(),
            self.config.transform.to_transform_state(),
            self.config.camera.to_orbit_camera(),
            self.config.rendering.to_view_settings(),
        )?;

        window.update_title(driver.state(), driver.settings().projection);
        window.request_redraw();

        self.window = Some(window);
        self.driver = Some(driver);
        Ok(())
    }

    /// React to the result of a driver call
    fn handle_frame(&mut self, event_loop: &ActiveEventLoop, result: Result<FrameOutcome, RenderError>) {
        match result {
            Ok(FrameOutcome::Drawn(_)) => {
                if let (Some(window), Some(driver)) = (&self.window, &self.driver) {
                    window.update_title(driver.state(), driver.settings().projection);
                }
            }
            // Already logged by the driver
            Ok(FrameOutcome::Skipped(_)) => {}
            Err(RenderError::SurfaceLost) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(err) => log::warn!("{}", err),
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        let Some(driver) = &mut self.driver else {
            return;
        };

        let result = match action {
            InputAction::Exit => {
                event_loop.exit();
                return;
            }
            InputAction::ResetView => {
                log::info!("View reset to start pose");
                driver.reset(
                    self.config.transform.to_transform_state(),
                    self.config.camera.to_orbit_camera(),
                )
            }
            InputAction::CycleProjection => {
                let next = driver.settings().projection.next();
                driver.set_projection(next)
            }
            InputAction::ToggleOrbitView => {
                let enabled = !driver.settings().orbit_view;
                driver.set_orbit_view(enabled)
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
                return;
            }
        };
        self.handle_frame(event_loop, result);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_graphics(event_loop) {
                log::error!("Failed to initialise graphics: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(driver) = &mut self.driver {
                    driver.backend_mut().resize(physical_size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                        return;
                    }

                    if let Some(nudge) = self.controller.process_keyboard(key, event.state) {
                        if let Some(driver) = &mut self.driver {
                            let result = driver.nudge(nudge.slider, nudge.delta);
                            self.handle_frame(event_loop, result);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(driver) = &mut self.driver {
                    let result = driver.redraw();
                    self.handle_frame(event_loop, result);
                }
            }

            _ => {}
        }
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Chopper");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
