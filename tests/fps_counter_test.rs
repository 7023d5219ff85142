use tui_pong::core::FpsCounter;

#[test]
fn fps_is_zero_before_the_first_window_closes() {
    let mut fps = FpsCounter::new();

    for i in 0..60 {
        assert_eq!(fps.tick(i * 16), 0);
    }
    assert_eq!(fps.current(), 0);
}

#[test]
fn fps_publishes_the_frame_count_once_per_second() {
    let mut fps = FpsCounter::new();

    // Frames at 0, 16, ..., 1008ms; the tick at 1008 closes the window with
    // 64 frames counted.
    for i in 0..=63 {
        fps.tick(i * 16);
    }

    assert_eq!(fps.current(), 64);
}

#[test]
fn fps_tracks_a_slower_second_window() {
    let mut fps = FpsCounter::new();

    // First window at 16ms per frame, closed by the tick at 1008ms.
    for i in 0..=63 {
        fps.tick(i * 16);
    }
    let first = fps.current();
    assert!(first > 0);

    // Second window at half the rate.
    let mut now = 1008;
    while fps.current() == first {
        now += 32;
        fps.tick(now);
    }

    assert!(fps.current() < first);
}

#[test]
fn window_is_anchored_to_the_first_tick() {
    let mut fps = FpsCounter::new();

    // Counter created long before the loop starts ticking; the window must
    // open at the first tick, not at time zero.
    assert_eq!(fps.tick(5_000), 0);
    assert_eq!(fps.tick(5_500), 0);
    assert_eq!(fps.current(), 0);

    fps.tick(6_000);
    assert_eq!(fps.current(), 3);
}
