//=========================================================================
// Event Log Demo
//
// Opens a window and logs every event the engine loop polls. Close the
// window or press Escape to quit.
//
// Run with:
//   RUST_LOG=debug cargo run --example event_log
//
//=========================================================================

use std::thread;
use std::time::Duration;

use aetheric_event_bridge::prelude::*;
use log::{debug, error, info};

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = BackendBuilder::new()
        .with_title("Aetheric Event Log")
        .with_window_size(640, 480)
        .build()
        .run(engine_loop);

    if let Err(e) = result {
        error!("Backend failed: {}", e);
        std::process::exit(1);
    }
}

fn engine_loop(mut events: EventSource) {
    let mut frame: u64 = 0;

    loop {
        while let Some(event) = events.poll_event() {
            match event {
                Event::Quit => {
                    info!("Quit after {} frames", frame);
                    return;
                }
                Event::KeyDown(key) if key.keycode == KeyCode::Escape => {
                    info!("Escape pressed, quitting");
                    return;
                }
                Event::KeyDown(key) if key.keycode.is_modifier() => {
                    debug!("Modifier {:?} down", key.keycode);
                }
                Event::KeyDown(key) => {
                    info!(
                        "KeyDown {:?} text={:?} repeat={} mods={:?}",
                        key.keycode, key.text, key.repeat, key.modifiers
                    );
                    // Center-warp demo: Home recenters the logical pointer
                    if key.keycode == KeyCode::Home {
                        events.fake_warp_mouse(320, 240);
                    }
                }
                Event::ScreenChanged => info!("Screen changed"),
                other => match other.position() {
                    Some(p) => debug!("{:?} at ({}, {})", other, p.x, p.y),
                    None => info!("{:?}", other),
                },
            }
        }

        frame += 1;
        thread::sleep(FRAME);
    }
}
