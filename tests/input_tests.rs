use scroll_core::*;

fn desktop_sampler() -> InputSampler {
    InputSampler::new(&Tuning::desktop(), DeviceProfile::detect(1440.0, false))
}

fn mobile_sampler() -> InputSampler {
    InputSampler::new(&Tuning::mobile(), DeviceProfile::detect(390.0, true))
}

#[test]
fn wheel_delta_scales_into_velocity() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    let sample = sampler.on_wheel(500.0, 10.0, &mut phys).expect("desktop accepts wheel");
    assert!((phys.velocity - 0.45).abs() < 1e-12);
    assert!((sample.delta_y - 0.45).abs() < 1e-12);
    assert_eq!(sample.source, SourceKind::Wheel);
    assert_eq!(sample.timestamp_ms, 10.0);
}

#[test]
fn wheel_velocity_is_clamped() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    for _ in 0..3 {
        sampler.on_wheel(1000.0, 0.0, &mut phys);
    }
    assert_eq!(phys.velocity, constants::MAX_VELOCITY);
    for _ in 0..6 {
        sampler.on_wheel(-1000.0, 0.0, &mut phys);
    }
    assert_eq!(phys.velocity, -constants::MAX_VELOCITY);
}

#[test]
fn mobile_ignores_wheel() {
    let mut sampler = mobile_sampler();
    let mut phys = PhysicsState::default();
    assert!(sampler.on_wheel(500.0, 0.0, &mut phys).is_none());
    assert_eq!(phys.velocity, 0.0);
}

#[test]
fn non_finite_deltas_are_ignored() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    assert!(sampler.on_wheel(f64::NAN, 0.0, &mut phys).is_none());
    assert!(sampler.on_wheel(f64::INFINITY, 0.0, &mut phys).is_none());
    assert!(!sampler.on_touch_start(f64::NAN, 0.0, &mut phys));
    assert!(!sampler.is_touching());

    sampler.on_touch_start(300.0, 0.0, &mut phys);
    assert!(sampler.on_touch_move(f64::NAN, 1.0, &mut phys).is_none());
    assert_eq!(phys.velocity, 0.0);
}

#[test]
fn finger_moving_up_advances_toward_work() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    assert!(sampler.on_touch_start(500.0, 0.0, &mut phys));
    assert!(sampler.is_touching());

    let up = sampler.on_touch_move(480.0, 16.0, &mut phys).expect("drag in progress");
    assert!((up.delta_y - 20.0 * constants::TOUCH_SENSITIVITY_DESKTOP).abs() < 1e-12);
    assert_eq!(up.source, SourceKind::Touch);

    let down = sampler.on_touch_move(500.0, 32.0, &mut phys).expect("drag in progress");
    assert!(down.delta_y < 0.0);
}

#[test]
fn move_without_start_is_ignored() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    assert!(sampler.on_touch_move(100.0, 0.0, &mut phys).is_none());
    assert!(sampler.on_touch_end(0.0).is_none());
}

#[test]
fn overscroll_drag_meets_resistance() {
    let mut sampler = mobile_sampler();
    let mut phys = PhysicsState::at(-0.2);
    sampler.on_touch_start(300.0, 0.0, &mut phys);

    let sample = sampler.on_touch_move(320.0, 16.0, &mut phys).expect("drag in progress");
    let raw = -20.0 * constants::TOUCH_SENSITIVITY_MOBILE;
    let expected = raw / (1.0 + constants::RESISTANCE_SLOPE * 0.2);
    assert!((sample.delta_y - expected).abs() < 1e-12);

    // pulling back toward the range is not resisted
    let back = sampler.on_touch_move(300.0, 32.0, &mut phys).expect("drag in progress");
    assert!((back.delta_y - 20.0 * constants::TOUCH_SENSITIVITY_MOBILE).abs() < 1e-12);
}

#[test]
fn touch_end_reports_last_sample_as_flick() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    sampler.on_touch_start(500.0, 0.0, &mut phys);
    sampler.on_touch_move(490.0, 16.0, &mut phys);
    sampler.on_touch_move(460.0, 32.0, &mut phys);

    let flick = sampler.on_touch_end(40.0).expect("drag was in progress");
    assert!((flick - 30.0 * constants::TOUCH_SENSITIVITY_DESKTOP).abs() < 1e-12);
    assert!(!sampler.is_touching());
    assert!(sampler.on_touch_end(50.0).is_none());
}

#[test]
fn touch_start_carries_part_of_velocity() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    phys.velocity = 0.5;
    sampler.on_touch_start(200.0, 0.0, &mut phys);
    assert!((phys.velocity - 0.5 * constants::TOUCH_START_VELOCITY_CARRY).abs() < 1e-12);
}

#[test]
fn idle_time_counts_from_last_accepted_input() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    sampler.on_wheel(10.0, 100.0, &mut phys);
    assert_eq!(sampler.idle_ms(250.0), 150.0);
    // rejected input does not reset the clock
    sampler.on_wheel(f64::NAN, 200.0, &mut phys);
    assert_eq!(sampler.idle_ms(250.0), 150.0);
    assert_eq!(sampler.idle_ms(50.0), 0.0);
}

#[test]
fn reconfigure_switches_wheel_acceptance() {
    let mut sampler = desktop_sampler();
    let mut phys = PhysicsState::default();
    sampler.reconfigure(&Tuning::mobile(), DeviceProfile::detect(390.0, true));
    assert!(sampler.on_wheel(100.0, 0.0, &mut phys).is_none());
}
