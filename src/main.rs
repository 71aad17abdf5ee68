use grid_snake::GameConfig;
use grid_snake::clock::TickClock;
use grid_snake::game::{GameState, tick};
use grid_snake::input::PendingInput;
use grid_snake::render::Renderer;
use log::{error, info};
use macroquad::time::get_time;
use macroquad::window::{Conf, next_frame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, LevelFilter, SimpleLogger};

fn window_conf() -> Conf {
    GameConfig::default().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = SimpleLogger::init(LevelFilter::Info, Config::default()) {
        eprintln!("logger unavailable: {err}");
    }

    let config = GameConfig::default();
    let grid = match config.grid() {
        Ok(grid) => grid,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    match serde_json::to_string(&config) {
        Ok(json) => info!("starting snake with {json}"),
        Err(_) => info!("starting snake on a {}x{} grid", grid.width, grid.height),
    }

    let renderer = Renderer::new(&config);
    let mut rng = StdRng::from_entropy();
    let mut clock = TickClock::new(config.tick_interval());
    let mut pending = PendingInput::new();
    let mut state = GameState::new(grid, &mut rng);

    loop {
        pending.poll_keyboard();

        if clock.poll(get_time()) {
            let input = pending.take(state.phase);
            let was_running = state.is_running();
            state = tick(state, input, &mut rng);
            if was_running && state.is_game_over() {
                state.log_snapshot("final state");
            }
        }

        renderer.draw(&state);
        next_frame().await;
    }
}
