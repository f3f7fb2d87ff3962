use anyhow::{Context, Result};
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use grass_snake::config::{HEIGHT, RENDER_FAILURE_CODE, TICKS_PER_SECOND, TITLE, WIDTH};
use grass_snake::grid::Grid;
use grass_snake::input as controls;
use grass_snake::pacer::{Action, Pacer};
use grass_snake::render::{self, Canvas};
use grass_snake::session::Session;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to open the game window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface_texture).context("failed to create the pixel surface")?
    };

    let grid = Grid::standard();
    let mut session = Session::new(grid);
    let mut pacer = Pacer::new(Instant::now());

    info!(
        "{}x{} board, {}px cells, {} ticks/s, snake heading {:?}",
        grid.columns(),
        grid.rows(),
        grid.cell_size(),
        TICKS_PER_SECOND,
        session.snake().dir()
    );

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            {
                let mut canvas = Canvas::new(pixels.frame_mut(), WIDTH, HEIGHT);
                render::draw_frame(&mut canvas, &session);
            }
            if let Err(err) = pixels.render() {
                error!("failed to present frame: {err}");
                *control_flow = ControlFlow::ExitWithCode(RENDER_FAILURE_CODE);
                return;
            }
        }

        if input.update(&event) {
            if controls::quit_requested(&input) {
                info!("quit with score {}", session.score());
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(dir) = controls::pressed_dir(&input) {
                session.steer(dir);
            }

            *control_flow = match pacer.update(Instant::now(), &mut session) {
                Action::Wait(until) => ControlFlow::WaitUntil(until),
                Action::Redraw(until) => {
                    window.request_redraw();
                    ControlFlow::WaitUntil(until)
                }
                Action::Exit => ControlFlow::Exit,
            };
        }
    });
}
