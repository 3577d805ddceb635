use seabattle::cli::{parse_command, parse_coord, Command};
use seabattle::ui::{coord_to_string, render_field};
use seabattle::{BattleField, Era, Ship, ShipKind};

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1"), Some((0, 0)));
    assert_eq!(parse_coord("c7"), Some((2, 6)));
    assert_eq!(parse_coord("J10"), Some((9, 9)));
    assert_eq!(parse_coord("A0"), None);
    assert_eq!(parse_coord("7"), None);
    assert_eq!(parse_coord("A"), None);
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("A-3"), None);
    assert_eq!(parse_coord("A-2147483648"), None);
    assert_eq!(parse_coord("A4294967295"), None);
    assert_eq!(parse_coord("A2147483648"), Some((0, i32::MAX)));
    assert_eq!(coord_to_string(2, 6), "C7");
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        parse_command("place 0 B3"),
        Ok(Command::Place { index: 0, x: 1, y: 2 })
    );
    assert_eq!(parse_command("rotate 2"), Ok(Command::Rotate { index: 2 }));
    assert_eq!(parse_command("fire d4"), Ok(Command::Fire { x: 3, y: 3 }));
    assert_eq!(parse_command("E5"), Ok(Command::Fire { x: 4, y: 4 }));
    assert_eq!(
        parse_command("strategy Cross"),
        Ok(Command::Strategy("Cross".to_string()))
    );
    assert_eq!(parse_command("save one"), Ok(Command::Save("one".to_string())));
    assert_eq!(parse_command("load one"), Ok(Command::Load("one".to_string())));
    assert_eq!(parse_command("new Ancient"), Ok(Command::New(Some(Era::Ancient))));
    assert_eq!(parse_command("new"), Ok(Command::New(None)));
    assert_eq!(parse_command("  "), Ok(Command::Show));
    assert_eq!(parse_command("auto"), Ok(Command::Auto));
    assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
}

#[test]
fn test_parse_command_errors() {
    assert!(parse_command("place x B3").is_err());
    assert!(parse_command("place 0").is_err());
    assert!(parse_command("fire Z").is_err());
    assert!(parse_command("save").is_err());
    assert!(parse_command("new Future").is_err());
    assert!(parse_command("dance").is_err());
    assert!(parse_command("rotate 1 2").is_err());
    assert!(parse_command("fire B-1").is_err());
}

#[test]
fn test_render_field_hides_unshot_ships() {
    let mut field = BattleField::new(3);
    let mut ship = Ship::new(ShipKind::PatrolBoat);
    ship.set_position(1, 0);
    field.place_ship(&ship).unwrap();
    field.receive_shot(1, 0).unwrap();
    field.receive_shot(0, 2).unwrap();

    let revealed = render_field(&field, true);
    assert_eq!(revealed, "    A B C\n 1  . X .\n 2  . P .\n 3  o . .\n");
    let hidden = render_field(&field, false);
    assert_eq!(hidden, "    A B C\n 1  . X .\n 2  . . .\n 3  o . .\n");

    field.receive_shot(1, 1).unwrap();
    assert!(render_field(&field, false).contains(" 2  . # ."));
}
