use scroll_core::*;
use std::cell::RefCell;
use std::rc::Rc;

const HERO_VISIBLE: f64 = scroll_core::constants::HERO_VISIBLE_EPSILON;

fn at_hero() -> PauseInputs {
    PauseInputs {
        render: 0.0,
        touching: false,
        committed_to_work: false,
        moving: false,
    }
}

fn recorder(coordinator: &mut PauseCoordinator) -> Rc<RefCell<Vec<(PauseSignal, f64)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    coordinator.subscribe(move |signal: PauseSignal, progress: f64| {
        sink.borrow_mut().push((signal, progress));
    });
    log
}

#[test]
fn starts_playing_with_page_visible() {
    let coordinator = PauseCoordinator::new();
    assert_eq!(coordinator.state(), PauseState::Playing);
    assert!(coordinator.is_hero_visible());
    assert!(coordinator.page_visible());
}

#[test]
fn signals_are_edge_triggered() {
    let mut coordinator = PauseCoordinator::new();
    let log = recorder(&mut coordinator);

    let away = PauseInputs {
        render: 0.4,
        ..at_hero()
    };
    assert_eq!(coordinator.evaluate(&away), Some(PauseSignal::Pause));
    assert_eq!(coordinator.evaluate(&away), None);
    assert_eq!(coordinator.force_pause(0.4), None);
    assert_eq!(coordinator.evaluate(&at_hero()), Some(PauseSignal::Resume));
    assert_eq!(coordinator.evaluate(&at_hero()), None);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], (PauseSignal::Pause, 0.4));
    assert_eq!(log[1], (PauseSignal::Resume, 0.0));
}

#[test]
fn resume_needs_every_condition() {
    assert!(resume_allowed(&at_hero()));
    assert!(resume_allowed(&PauseInputs {
        render: HERO_VISIBLE,
        ..at_hero()
    }));
    assert!(!resume_allowed(&PauseInputs {
        render: 0.02,
        ..at_hero()
    }));
    assert!(!resume_allowed(&PauseInputs {
        touching: true,
        ..at_hero()
    }));
    assert!(!resume_allowed(&PauseInputs {
        committed_to_work: true,
        ..at_hero()
    }));
    assert!(!resume_allowed(&PauseInputs {
        moving: true,
        ..at_hero()
    }));
}

#[test]
fn hidden_page_pauses_and_visible_waits_for_evaluation() {
    let mut coordinator = PauseCoordinator::new();
    assert_eq!(coordinator.set_page_visible(false, 0.0), Some(PauseSignal::Pause));
    // hidden blocks resume even on the hero
    assert_eq!(coordinator.evaluate(&at_hero()), None);
    assert_eq!(coordinator.state(), PauseState::Paused);

    assert_eq!(coordinator.set_page_visible(true, 0.0), None);
    assert_eq!(coordinator.state(), PauseState::Paused);
    assert_eq!(coordinator.evaluate(&at_hero()), Some(PauseSignal::Resume));
}

#[test]
fn cleared_subscribers_hear_nothing() {
    let mut coordinator = PauseCoordinator::new();
    let log = recorder(&mut coordinator);
    coordinator.clear_subscribers();
    assert_eq!(coordinator.force_pause(0.5), Some(PauseSignal::Pause));
    assert!(log.borrow().is_empty());
}

#[test]
fn event_names_match_the_page_contract() {
    assert_eq!(PauseSignal::Pause.event_name(), "hero:pause");
    assert_eq!(PauseSignal::Resume.event_name(), "hero:resume");
}
