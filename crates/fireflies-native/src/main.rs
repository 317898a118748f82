use fireflies_core::{PointerEvent, SceneConfig, SceneContext};
use fireflies_render::GpuState;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

const OVERRIDE_KEYS: [&str; 2] = ["FIREFLIES_COUNT", "FIREFLIES_SEED"];

fn config_from_env() -> anyhow::Result<SceneConfig> {
    let mut config = SceneConfig::default();
    for key in OVERRIDE_KEYS {
        if let Ok(value) = std::env::var(key) {
            config.apply_override(key, &value)?;
        }
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config_from_env()?;
    let mut scene = SceneContext::new(&config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Fireflies (native)")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;
    let window = &window;

    let size = window.inner_size();
    scene.set_viewport(size.width, size.height);
    let mut gpu = pollster::block_on(GpuState::new(&window, size.width, size.height))?;
    log::info!("fireflies-native started ({} fireflies)", scene.swarm.len());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            gpu.resize(size.width, size.height);
            scene.set_viewport(size.width, size.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let (width, height) = gpu.size();
            scene.on_pointer_move(PointerEvent {
                x: position.x as f32,
                y: position.y as f32,
                width: width as f32,
                height: height as f32,
            });
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        // Pointer events for this iteration have been handled; advance one frame.
        Event::AboutToWait => {
            scene.tick();
            match gpu.render(&scene) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = window.inner_size();
                    gpu.resize(size.width, size.height);
                    gpu.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("render error: out of GPU memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
