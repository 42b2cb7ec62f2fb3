use macroquad::prelude::*;

use springs::{Canvas, FrameClock, InputTranslator, MacroquadCanvas, SimulationConfig, World};

#[macroquad::main("Springs")]
async fn main() {
    let config = SimulationConfig::default();
    let mut clock = FrameClock::from_config(&config);
    let mut world = match World::new(config) {
        Ok(world) => world,
        Err(err) => {
            error!("invalid simulation config: {}", err);
            return;
        }
    };
    let mut input = InputTranslator::new();
    let mut canvas = MacroquadCanvas;

    let bounds = canvas.bounds();
    info!("starting simulation in a {}x{} window", bounds.width, bounds.height);
    info!("{:?}", world.config());

    loop {
        for command in input.poll() {
            if let Err(err) = world.apply(command) {
                warn!("{:?} failed: {}", command, err);
            }
        }

        let adjust = clock.adjust(get_time());
        if let Err(err) = world.tick(adjust, &mut canvas) {
            error!("frame failed: {}", err);
        }

        next_frame().await
    }
}
