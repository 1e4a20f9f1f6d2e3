//! Headless replay of the scroll stage.
//!
//! Drives the controller with a scripted gesture at a fixed 60 Hz frame rate
//! and prints one CSV row per frame, which makes tuning changes easy to plot.
//!
//! ```text
//! scroll-native [desktop|mobile] [wheel|drag|flick|bounce] [standard|loose]
//! ```

use anyhow::{bail, Context};
use scroll_core::{DeviceProfile, Feel, PauseSignal, ScrollController};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);
const MAX_FRAMES: usize = 600;
const DESKTOP_WIDTH: f64 = 1440.0;
const MOBILE_WIDTH: f64 = 390.0;

#[derive(Clone, Copy, Debug)]
enum Action {
    Wheel(f64),
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
}

fn scenario(name: &str) -> anyhow::Result<Vec<(usize, Action)>> {
    let script = match name {
        // one strong wheel tick from rest
        "wheel" => vec![(0, Action::Wheel(500.0))],
        // slow drag that stops short of the midpoint
        "drag" => {
            let mut s = vec![(0, Action::TouchStart(500.0))];
            s.extend((1..=6).map(|i| (i, Action::TouchMove(500.0 - 5.0 * i as f64))));
            s.push((7, Action::TouchEnd));
            s
        }
        // short fast swipe up
        "flick" => {
            let mut s = vec![(0, Action::TouchStart(600.0))];
            s.extend((1..=4).map(|i| (i, Action::TouchMove(600.0 - 40.0 * i as f64))));
            s.push((5, Action::TouchEnd));
            s
        }
        // pull down past the hero edge and let go
        "bounce" => {
            let mut s = vec![(0, Action::TouchStart(300.0))];
            s.extend((1..=10).map(|i| (i, Action::TouchMove(300.0 + 25.0 * i as f64))));
            s.push((11, Action::TouchEnd));
            s
        }
        other => bail!("unknown scenario {other:?} (expected wheel, drag, flick or bounce)"),
    };
    Ok(script)
}

fn profile(name: &str) -> anyhow::Result<DeviceProfile> {
    match name {
        "desktop" => Ok(DeviceProfile::detect(DESKTOP_WIDTH, false)),
        "mobile" => Ok(DeviceProfile::detect(MOBILE_WIDTH, true)),
        other => bail!("unknown device {other:?} (expected desktop or mobile)"),
    }
}

fn apply(controller: &mut ScrollController, action: Action) {
    match action {
        Action::Wheel(dy) => {
            controller.on_wheel(dy);
        }
        Action::TouchStart(y) => controller.on_touch_start(y),
        Action::TouchMove(y) => {
            controller.on_touch_move(y);
        }
        Action::TouchEnd => {
            controller.on_touch_end();
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let device = args.first().map(String::as_str).unwrap_or("desktop");
    let scenario_name = args.get(1).map(String::as_str).unwrap_or("wheel");
    let feel: Feel = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("standard")
        .parse()
        .context("parsing feel")?;

    let script = scenario(scenario_name)?;
    let mut controller = ScrollController::init(profile(device)?, feel, 4).context("building controller")?;

    let signals: Rc<RefCell<Vec<(usize, PauseSignal)>>> = Rc::new(RefCell::new(Vec::new()));
    let frame_index = Rc::new(RefCell::new(0usize));
    {
        let signals = signals.clone();
        let frame_index = frame_index.clone();
        controller.subscribe(move |signal: PauseSignal, _progress: f64| {
            signals.borrow_mut().push((*frame_index.borrow(), signal));
        });
    }

    log::info!("[replay] device={} scenario={} feel={:?}", device, scenario_name, feel);
    println!("frame,position,velocity,smoothed,render,hero_opacity,work_opacity,snap,pause");

    let mut at_rest_for = 0usize;
    for frame in 0..MAX_FRAMES {
        *frame_index.borrow_mut() = frame;
        for (_, action) in script.iter().filter(|(f, _)| *f == frame) {
            apply(&mut controller, *action);
        }
        let out = controller.update(FRAME);
        let phys = controller.physics();
        println!(
            "{},{:.5},{:.5},{:.5},{:.5},{:.4},{:.4},{:?},{:?}",
            frame,
            phys.position,
            phys.velocity,
            phys.smoothed,
            out.render,
            out.projection.hero.opacity,
            out.projection.work.opacity,
            controller.snap_state(),
            controller.pause_state()
        );

        let script_done = script.iter().all(|(f, _)| *f <= frame);
        at_rest_for = if script_done && phys.velocity == 0.0 && phys.position == phys.smoothed {
            at_rest_for + 1
        } else {
            0
        };
        if at_rest_for >= 10 {
            log::info!("[replay] at rest on frame {}", frame);
            break;
        }
    }

    for (frame, signal) in signals.borrow().iter() {
        log::info!("[replay] frame {} -> {}", frame, signal.event_name());
    }
    controller.dispose();
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
