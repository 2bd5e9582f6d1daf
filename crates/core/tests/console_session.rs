use std::io::Cursor;

use estates_core::{AreaKind, EstatesConsole, SessionEnd, Settings};

struct Session {
    end: SessionEnd,
    output: String,
    gym: (u32, [bool; 3]),
    pool: (u32, [bool; 3]),
}

fn run_session(settings: Settings, script: &str) -> Session {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut console = EstatesConsole::new(settings, input, Vec::new());
    let end = console.run().unwrap();

    let snapshot = |kind| {
        let area = console.facility().area(kind);
        (area.occupants(), *area.lights())
    };
    let gym = snapshot(AreaKind::Gym);
    let pool = snapshot(AreaKind::SwimmingPool);
    let output = String::from_utf8(console.into_output()).unwrap();

    Session {
        end,
        output,
        gym,
        pool,
    }
}

fn run(script: &str) -> Session {
    run_session(Settings::default(), script)
}

#[test]
fn test_add_remove_light_report_quit_scenario() {
    let session = run("W\n5\nX\n10\nY\n2\nR\nQ\n");

    assert_eq!(session.end, SessionEnd::Quit);
    assert_eq!(session.gym, (0, [false, true, false]));

    let out = &session.output;
    assert!(out.starts_with(
        "Speke Apartments Estates Manager Application started.\nDefault active area: Gym\n"
    ));
    assert!(out.contains("5 occupants added to Gym.\n"));
    assert!(out.contains("Warning: Cannot remove 10. Removing all 5 occupants instead.\n"));
    assert!(out.contains("5 occupants removed from Gym.\n"));
    assert!(out.contains("Light 2 switched ON in Gym.\n"));
    assert!(out.contains(
        "\n--- STATUS REPORT FOR Gym ---\nArea Name: Gym\nOccupants: 0\n\
         Light States: Light 1: OFF, Light 2: ON, Light 3: OFF\n"
    ));
    assert!(out.ends_with(
        "Program terminated successfully. Goodbye! 👋\n\n-----------------------------------------\n"
    ));
}

#[test]
fn test_menu_and_separator_after_every_command() {
    let session = run("R\nbogus\nQ\n");
    let out = &session.output;

    assert_eq!(out.matches("--- MAIN MENU (Active Area: Gym) ---").count(), 3);
    assert_eq!(out.matches("-----------------------------------------").count(), 3);
    assert_eq!(out.matches("Enter Command (S, W, X, Y, Z, R, Q): ").count(), 3);
    assert!(out.contains("🛑 Invalid command. Please try again.\n"));
}

#[test]
fn test_area_selection() {
    let session = run("S\ng\nS\nP\nW\n3\nS\nX\nQ\n");
    let out = &session.output;

    assert_eq!(session.pool.0, 3);
    assert_eq!(session.gym.0, 0);
    assert!(out.contains("Active area is now: Gym\n"));
    assert!(out.contains("Active area is now: Swimming Pool\n"));
    assert!(out.contains("3 occupants added to Swimming Pool.\n"));
    assert!(out.contains("🛑 Invalid selection. Active area remains: Swimming Pool\n"));
    assert!(out.contains("--- MAIN MENU (Active Area: Swimming Pool) ---"));
}

#[test]
fn test_malformed_integers_reprompt() {
    let session = run("W\nabc\n1.5\n\n7\nQ\n");
    let out = &session.output;

    assert_eq!(session.end, SessionEnd::Quit);
    assert_eq!(session.gym.0, 7);
    assert_eq!(
        out.matches("🛑 Invalid input. Please enter an INTEGER only.")
            .count(),
        3
    );
    assert_eq!(out.matches("Enter number of occupants to ADD: ").count(), 4);
}

#[test]
fn test_negative_and_zero_counts() {
    let session = run("W\n4\nW\n-2\nX\n-1\nW\n0\nX\n0\nQ\n");
    let out = &session.output;

    assert_eq!(session.gym.0, 4);
    assert!(out.contains("🛑 Cannot add a negative number of occupants.\n"));
    assert!(out.contains("🛑 Cannot remove a negative number of occupants.\n"));
    assert_eq!(out.matches("occupants added to").count(), 1);
    assert!(!out.contains("occupants removed from"));
}

#[test]
fn test_light_number_validation_and_switch_off() {
    let session = run("Y\n0\n5\nx\n3\nY\n1\nZ\n3\nQ\n");
    let out = &session.output;

    assert_eq!(session.gym.1, [true, false, false]);
    assert_eq!(
        out.matches("🛑 Invalid light number. Must be 1, 2, or 3.")
            .count(),
        2
    );
    assert!(out.contains("Light 3 switched OFF in Gym.\n"));
}

#[test]
fn test_commands_are_case_insensitive_and_trimmed() {
    let session = run("  w \n2\nr\n q\n");
    assert_eq!(session.end, SessionEnd::Quit);
    assert_eq!(session.gym.0, 2);
    assert!(session.output.contains("Occupants: 2"));
}

#[test]
fn test_input_closed_mid_prompt() {
    let session = run("W\n3\nX\nnot a number\n");

    assert_eq!(session.end, SessionEnd::InputClosed);
    assert_eq!(session.gym.0, 3);
    assert!(!session.output.contains("Goodbye"));
}

#[test]
fn test_settings_change_banner_area_and_glyphs() {
    let settings = Settings {
        facility_name: "Harbour View".to_string(),
        initial_area: AreaKind::SwimmingPool,
        plain_output: true,
    };
    let session = run_session(settings, "?\nQ\n");
    let out = &session.output;

    assert!(out.starts_with(
        "Harbour View Estates Manager Application started.\nDefault active area: Swimming Pool\n"
    ));
    assert!(out.contains(": Invalid command. Please try again.\n"));
    assert!(out.contains("Program terminated successfully. Goodbye!\n"));
    assert!(!out.contains('🛑'));
    assert!(!out.contains('👋'));
}

#[test]
fn test_invalid_utf8_is_treated_as_malformed_input() {
    let input = Cursor::new(b"W\n\xc3\x28\n3\n\xff\xfe\nQ\n".to_vec());
    let mut console = EstatesConsole::new(Settings::default(), input, Vec::new());

    assert_eq!(console.run().unwrap(), SessionEnd::Quit);
    assert_eq!(console.facility().area(AreaKind::Gym).occupants(), 3);

    let out = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(out.matches("INTEGER only").count(), 1);
    assert_eq!(out.matches("Invalid command. Please try again.").count(), 1);
}
