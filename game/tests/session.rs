use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use snack_arena::config::GameConfig;
use snack_arena::entity::{Color, Entity};
use snack_arena::food::FoodItem;
use snack_arena::geometry::{Arena, Rect};
use snack_arena::placement::{Fallback, Placer};
use snack_arena::player::{Direction, Player, RelocationPolicy};
use snack_arena::session::{Session, Tick};
use snack_arena::{FrameInput, Game, Phase};

const FRAME: f32 = 1.0 / 60.0;

fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::new(rng.gen_range(-1..=1), rng.gen_range(-1..=1))
}

fn assert_disjoint(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
        }
    }
}

fn food_rects(session: &Session) -> Vec<Rect> {
    session.foods().iter().map(|f| *f.rect()).collect()
}

#[test]
fn food_never_overlaps_across_random_sessions() {
    let config = GameConfig::default();
    let arena = config.arena();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&config, &mut rng).unwrap();
        assert_disjoint(&food_rects(&session));

        let mut direction = Direction::NONE;
        for frame in 0..600 {
            if frame % 20 == 0 {
                direction = random_direction(&mut rng);
            }
            session.tick(direction, FRAME, &mut rng).unwrap();

            let rects = food_rects(&session);
            assert_eq!(rects.len(), 9);
            assert_disjoint(&rects);
            assert!(rects.iter().all(|r| arena.contains(r)));
        }
    }
}

#[test]
fn fresh_sessions_never_start_with_food_on_the_player() {
    let config = GameConfig::default();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&config, &mut rng).unwrap();

        let mut rects = food_rects(&session);
        rects.push(*session.player().rect());
        assert_disjoint(&rects);

        session.tick(Direction::NONE, FRAME, &mut rng).unwrap();
        assert_eq!(session.score(), 0, "seed {seed}: idle first frame scored");
    }
}

#[test]
fn avoid_player_policy_keeps_every_entity_apart() {
    let mut config = GameConfig::default();
    config.placement.avoid_player = true;

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&config, &mut rng).unwrap();

        for _ in 0..600 {
            session.tick(random_direction(&mut rng), FRAME, &mut rng).unwrap();

            // food touching the player is eaten and moved off it in the same frame
            let mut rects = food_rects(&session);
            rects.push(*session.player().rect());
            assert_disjoint(&rects);
        }
    }
}

#[test]
fn player_stays_in_bounds() {
    let config = GameConfig::default();
    let arena = config.arena();
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = Session::new(&config, &mut rng).unwrap();

    for _ in 0..5_000 {
        // uneven frame times, some large enough to overshoot the arena
        let delta_time = rng.gen_range(0.0..0.5);
        session.tick(random_direction(&mut rng), delta_time, &mut rng).ok();

        let p = session.player().rect();
        assert!(p.x() >= 0.0 && p.x() <= arena.width - p.width());
        assert!(p.y() >= 0.0 && p.y() <= arena.height - p.height());
    }
}

#[test]
fn contact_adds_points_exactly_once() {
    let arena = Arena::new(800.0, 500.0);
    let placer = Placer::new(arena, 10_000, Fallback::Fail);
    let policy = RelocationPolicy { avoid_player: true };
    let player = Player::new(Rect::new(100.0, 100.0, 40.0, 40.0), 300.0, Color::BLACK);
    let foods = vec![
        FoodItem::new(Rect::new(130.0, 100.0, 80.0, 80.0), -2, Color::WHITE),
        FoodItem::new(Rect::new(500.0, 300.0, 50.0, 50.0), 3, Color::GREEN),
    ];
    let mut session = Session::from_parts(placer, policy, player, foods, 30.0);
    let mut rng = StdRng::seed_from_u64(1);

    session.tick(Direction::NONE, FRAME, &mut rng).unwrap();
    assert_eq!(session.score(), -2);

    // standing still, nothing touches the player any more
    for _ in 0..60 {
        session.tick(Direction::NONE, FRAME, &mut rng).unwrap();
    }
    assert_eq!(session.score(), -2);
}

#[test]
fn walking_onto_good_food_scores_and_moves_it() {
    let arena = Arena::new(800.0, 500.0);
    let placer = Placer::new(arena, 10_000, Fallback::Fail);
    let player = Player::new(Rect::new(100.0, 100.0, 40.0, 40.0), 300.0, Color(100, 40, 20));
    let food_at = Vec2::new(300.0, 100.0);
    let foods = vec![FoodItem::new(Rect::from_parts(food_at, Vec2::splat(50.0)), 1, Color::RED)];
    let mut session =
        Session::from_parts(placer, RelocationPolicy::default(), player, foods, 30.0);
    let mut rng = StdRng::seed_from_u64(8);

    let mut frames = 0;
    while session.score() == 0 {
        session.tick(Direction::new(1, 0), FRAME, &mut rng).unwrap();
        frames += 1;
        assert!(frames < 60, "never reached the food");
    }

    assert_eq!(session.score(), 1);
    assert_ne!(session.foods()[0].rect().position(), food_at);
    assert!(arena.contains(session.foods()[0].rect()));
}

#[test]
fn food_count_is_constant_during_play() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut session = Session::new(&config, &mut rng).unwrap();

    let mut ticks = 0;
    while session.tick(random_direction(&mut rng), FRAME, &mut rng).unwrap() == Tick::Running {
        assert_eq!(session.foods().len(), config.foods.len());
        assert_eq!(session.entities().count(), config.foods.len() + 1);
        ticks += 1;
    }
    // 30s at 60fps, give or take float rounding
    assert!((1_795..=1_805).contains(&ticks));
}

#[test]
fn timeout_then_restart_gives_a_fresh_session() {
    let mut game = Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(11));
    let start = FrameInput {
        start: true,
        ..FrameInput::idle(FRAME)
    };

    game.update(&start).unwrap();
    let first: Vec<Rect> = food_rects(game.session().unwrap());

    // wander until the clock runs out
    let mut rng = StdRng::seed_from_u64(12);
    while game.is_playing() {
        let input = FrameInput {
            direction: random_direction(&mut rng),
            ..FrameInput::idle(0.1)
        };
        game.update(&input).unwrap();
    }
    assert!(matches!(game.phase(), Phase::Start { last_score: Some(_) }));

    game.update(&start).unwrap();
    let session = game.session().unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.elapsed(), 0.0);
    assert_eq!(session.player().rect().position(), Vec2::new(100.0, 100.0));

    let second = food_rects(session);
    assert_disjoint(&second);
    assert_ne!(first, second);
    assert_eq!(game.sessions_played(), 2);
}
