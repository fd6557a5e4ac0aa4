extern crate boxworld_backend as backend;

use backend::*;

/// The same keys the front end uses.
fn char_to_direction(c: char) -> Direction {
    use self::Direction::*;
    match c {
        'h' => Left,
        'j' => Down,
        'k' => Up,
        'l' => Right,
        _ => panic!("Invalid character"),
    }
}

fn play(game: &mut Game, moves: &str) {
    for (i, mv) in moves.chars().map(char_to_direction).enumerate() {
        assert!(game.try_move(mv),
                "Move #{} failed:\n{}\n",
                i,
                game.level());
    }
}

#[test]
fn test_solve_level01() {
    let mut game = Game::load_file("levels/level01").unwrap();
    assert_eq!(game.level().rows(), 6);
    assert_eq!(game.level().columns(), 7);
    assert!(!game.is_won());

    play(&mut game, "jllhhjl");

    assert!(game.is_won(), "\n{}\n", game.level());
    assert_eq!(game.number_of_moves(), 7);
}

#[test]
fn test_solve_level02() {
    let mut game = Game::load_file("levels/level02").unwrap();
    play(&mut game, "ljkl");
    assert!(!game.is_won());
    play(&mut game, "j");
    assert!(game.is_won(), "\n{}\n", game.level());
}

#[test]
fn test_undo_all_the_way_back() {
    let mut game = Game::load_file("levels/level01").unwrap();
    let initial = game.level().to_string();

    play(&mut game, "jllhhjl");
    for _ in 0.."jllhhjl".len() {
        game.undo().unwrap();
    }

    assert_eq!(game.level().to_string(), initial);
    assert_eq!(game.number_of_moves(), 0);

    // There is nothing left to undo.
    game.undo().unwrap();
    assert_eq!(game.level().to_string(), initial);
}

#[test]
fn test_restart_matches_a_fresh_load() {
    let mut game = Game::load_file("levels/level01").unwrap();
    let initial = game.level().to_string();

    play(&mut game, "jll");
    assert_ne!(game.level().to_string(), initial);

    game.restart().unwrap();
    assert_eq!(game.level().to_string(), initial);
    assert_eq!(game.number_of_moves(), 0);
    assert_eq!(game.level().to_string(),
               Game::load_file("levels/level01").unwrap().level().to_string());
}

#[test]
fn test_sprites_cover_the_whole_grid() {
    let game = Game::load_file("levels/level02").unwrap();
    let level = game.level();
    assert_eq!(level.sprites().len(), level.rows() * level.columns());
    assert_eq!(level.sprites()[level.player_cell()], Sprite::Player);
    assert_eq!(level.cell(level.player_cell()).foreground, Foreground::Player);
}
