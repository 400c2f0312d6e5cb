//! Every preset completes real moves on a virtual screen.

use scurry::{
    Clock, Dimension, MotionNature, MouseMotion, Point, SeededRandom, SystemCalls, VirtualScreen,
};

const SCREEN: Dimension = Dimension::new(1280, 720);

fn run(nature: MotionNature, seed: u64, targets: &[(i32, i32)]) -> VirtualScreen {
    let mut motion = MouseMotion::new(
        nature,
        VirtualScreen::new(SCREEN).with_position(Point::new(640, 360)),
        SeededRandom::from_seed(seed),
    );
    for &(x, y) in targets {
        let landed = motion.move_to(x, y).unwrap();
        assert_eq!(landed, SCREEN.clamp(Point::new(x, y)));
    }
    let (_, screen, _) = motion.into_parts();
    screen
}

fn assert_trail_sane(screen: &VirtualScreen) {
    let trail = screen.trail();
    assert!(!trail.is_empty());
    for pair in trail.windows(2) {
        assert!(pair[1].time_ms >= pair[0].time_ms, "time went backwards");
    }
    for p in trail {
        assert!(p.x >= 0 && p.x < SCREEN.width && p.y >= 0 && p.y < SCREEN.height);
    }
}

const TARGETS: &[(i32, i32)] = &[(100, 100), (1200, 650), (-40, 700), (640, 360)];

#[test]
fn default_nature_moves() {
    let screen = run(MotionNature::default_nature().unwrap(), 1, TARGETS);
    assert_trail_sane(&screen);
}

#[test]
fn granny_moves() {
    let mut random = SeededRandom::from_seed(99);
    let screen = run(MotionNature::granny(&mut random).unwrap(), 2, TARGETS);
    assert_trail_sane(&screen);
}

#[test]
fn fast_gamer_moves() {
    let screen = run(MotionNature::fast_gamer().unwrap(), 3, TARGETS);
    assert_trail_sane(&screen);
}

#[test]
fn average_user_moves() {
    let screen = run(MotionNature::average_user().unwrap(), 4, TARGETS);
    assert_trail_sane(&screen);
}

#[test]
fn robot_moves_in_a_straight_line() {
    let screen = run(MotionNature::robot(200).unwrap(), 5, &[(1040, 360)]);
    assert_trail_sane(&screen);
    assert!(screen.trail().iter().all(|p| p.y == 360));
    // 400 px at 200 ms per 100 px.
    let last = screen.trail().last().unwrap();
    assert!(last.time_ms <= 800);
    assert!(last.time_ms >= 700);
}

#[test]
fn granny_is_slower_than_gamer() {
    let mut random = SeededRandom::from_seed(8);
    let granny = run(MotionNature::granny(&mut random).unwrap(), 8, &[(100, 100)]);
    let gamer = run(MotionNature::fast_gamer().unwrap(), 8, &[(100, 100)]);
    assert!(granny.current_time_millis() > gamer.current_time_millis());
}

#[test]
fn simulated_clock_is_default() {
    let screen = run(MotionNature::robot(100).unwrap(), 6, &[(700, 360)]);
    assert_eq!(screen.clock(), Clock::Simulated);
}
