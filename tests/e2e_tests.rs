//! End-to-end integration tests
//!
//! These tests drive the interactive console with scripted input against a
//! shop whose data files live in a temporary directory. Each test:
//! 1. Seeds the comics and users CSV files
//! 2. Runs the console over the scripted input lines
//! 3. Checks the console output, the rewritten CSV files and the sales log
//!
//! The sales log timestamps come from a fixed clock so log lines can be
//! compared exactly.

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use comic_shop::console::Console;
    use comic_shop::core::FixedClock;
    use comic_shop::{ComicShop, StorageConfig};
    use rstest::rstest;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const COMICS: &str = "ID,Titulo,Autor,Estado\n\
                          ASM001,Amazing Spider-Man,Stan Lee,disponible\n\
                          BAT001,Batman Year One,Frank Miller,vendido\n";

    const USERS: &str = "ID,Nombre,Email\n\
                         U1,Ana,ana@example.com\n\
                         U2,Luis,\n";

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 4)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    /// Seed a data directory with the default comics and users files
    fn seeded_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::in_dir(dir.path());
        fs::write(&config.comics_csv, COMICS).unwrap();
        fs::write(&config.users_csv, USERS).unwrap();
        dir
    }

    /// Run one console session over `lines` and return everything it printed
    fn run_session(dir: &TempDir, lines: &[&str]) -> String {
        let config = StorageConfig::in_dir(dir.path());
        let mut shop = ComicShop::open_with_clock(config, Box::new(FixedClock(instant())));

        let mut script = lines.join("\n");
        script.push('\n');
        let mut output = Vec::new();

        Console::new(&mut shop, Cursor::new(script), &mut output)
            .run()
            .unwrap();

        String::from_utf8(output).unwrap()
    }

    fn read(dir: &TempDir, file: &str) -> String {
        fs::read_to_string(dir.path().join(file)).unwrap_or_default()
    }

    #[test]
    fn test_sell_available_comic() {
        let dir = seeded_dir();

        let output = run_session(&dir, &["3", "asm001", "u1", "0"]);

        assert!(output.contains(
            "Sale/reservation recorded: 'Amazing Spider-Man' (ID: ASM001) to Ana (ID: U1)."
        ));
        assert_eq!(
            read(&dir, "comics.csv"),
            "ID,Titulo,Autor,Estado\n\
             ASM001,Amazing Spider-Man,Stan Lee,vendido\n\
             BAT001,Batman Year One,Frank Miller,vendido\n"
        );
        assert_eq!(
            read(&dir, "ventas_log.txt"),
            "VENTA/RESERVA - Fecha/Hora: 2024-05-04 10:30:00, Cómic ID: ASM001, \
             Título: Amazing Spider-Man, Usuario ID: U1, Nombre Usuario: Ana\n"
        );
    }

    #[rstest]
    #[case::sold_comic(&["3", "BAT001", "U1", "0"], "has already been vendido")]
    #[case::missing_comic(
        &["3", "XXX999", "U1", "0"],
        "Comic with ID 'XXX999' is not in the inventory"
    )]
    #[case::missing_user(&["3", "ASM001", "U9", "0"], "User with ID 'U9' does not exist")]
    fn test_sell_rejected(#[case] lines: &[&str], #[case] expected: &str) {
        let dir = seeded_dir();

        let output = run_session(&dir, lines);

        assert!(output.contains("Could not record the sale/reservation"));
        assert!(output.contains(expected), "missing {:?} in {}", expected, output);
        assert_eq!(read(&dir, "comics.csv"), COMICS);
        assert_eq!(read(&dir, "ventas_log.txt"), "");
    }

    #[test]
    fn test_mark_sold_comic_available() {
        let dir = seeded_dir();

        let output = run_session(&dir, &["4", "bat001", "0"]);

        assert!(output.contains("Comic 'Batman Year One' (ID: BAT001) is now available."));
        assert!(read(&dir, "comics.csv")
            .contains("BAT001,Batman Year One,Frank Miller,disponible"));
        assert_eq!(
            read(&dir, "ventas_log.txt"),
            "DISPONIBLE - Fecha/Hora: 2024-05-04 10:30:00, Cómic ID: BAT001, \
             Título: Batman Year One, Estado anterior: vendido/reservado, Estado actual: disponible\n"
        );
    }

    #[test]
    fn test_mark_available_comic_is_noop() {
        let dir = seeded_dir();

        let output = run_session(&dir, &["4", "ASM001", "0"]);

        assert!(
            output.contains("Comic 'Amazing Spider-Man' (ID: ASM001) is already available.")
        );
        assert_eq!(read(&dir, "comics.csv"), COMICS);
        assert_eq!(read(&dir, "ventas_log.txt"), "");
    }

    #[test]
    fn test_sell_then_return_appends_two_lines() {
        let dir = seeded_dir();

        run_session(&dir, &["3", "ASM001", "U2", "4", "ASM001", "0"]);

        let log = read(&dir, "ventas_log.txt");
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("VENTA/RESERVA"));
        assert!(lines[0].ends_with("Usuario ID: U2, Nombre Usuario: Luis"));
        assert!(lines[1].starts_with("DISPONIBLE"));
        assert_eq!(read(&dir, "comics.csv"), COMICS);
    }

    #[test]
    fn test_add_and_find_comic() {
        let dir = seeded_dir();

        let output = run_session(
            &dir,
            &["5", " SAG001 ", "Saga", "Brian K. Vaughan", "2", "sag001", "0"],
        );

        assert!(output.contains("Comic 'Saga' (ID: SAG001) added to the inventory."));
        assert!(output.contains(
            "Comic found: \nID: SAG001\nTÍTULO: Saga\nAUTOR: Brian K. Vaughan\nESTADO: disponible\n"
        ));
        assert!(read(&dir, "comics.csv").ends_with("SAG001,Saga,Brian K. Vaughan,disponible\n"));
    }

    #[rstest]
    #[case::same_case("ASM001")]
    #[case::other_case("asm001")]
    fn test_add_duplicate_comic(#[case] id: &str) {
        let dir = seeded_dir();

        let output = run_session(&dir, &["5", id, "Another", "Someone", "0"]);

        assert!(output.contains("the ID is already registered"));
        assert_eq!(read(&dir, "comics.csv"), COMICS);
    }

    #[rstest]
    #[case::missing_title(&["5", "NEW001", "", "Author", "0"], "Comic title is required")]
    #[case::missing_author(&["5", "NEW001", "Title", "  ", "0"], "Comic author is required")]
    #[case::missing_id(&["5", "", "Title", "Author", "0"], "Comic ID is required")]
    fn test_add_comic_missing_field(#[case] lines: &[&str], #[case] expected: &str) {
        let dir = seeded_dir();

        let output = run_session(&dir, lines);

        assert!(output.contains(expected), "missing {:?} in {}", expected, output);
        assert_eq!(read(&dir, "comics.csv"), COMICS);
    }

    #[test]
    fn test_remove_comic() {
        let dir = seeded_dir();

        let output = run_session(&dir, &["6", "ASM001", "6", "BAT001", "0"]);

        assert!(output.contains("Comic removed."));
        assert!(output.contains("Could not remove the comic"));
        assert_eq!(
            read(&dir, "comics.csv"),
            "ID,Titulo,Autor,Estado\nBAT001,Batman Year One,Frank Miller,vendido\n"
        );
    }

    #[test]
    fn test_mark_missing_comic_available() {
        let dir = seeded_dir();
        let output = run_session(&dir, &["4", " NOPE ", "0"]);
        assert!(output.contains("Comic with ID 'NOPE' not found."));
        assert_eq!(read(&dir, "ventas_log.txt"), "");
    }

    #[test]
    fn test_find_missing_comic() {
        let dir = seeded_dir();
        let output = run_session(&dir, &["2", "NOPE", "0"]);
        assert!(output.contains("Comic with ID 'NOPE' not found."));
    }

    #[test]
    fn test_list_comics_in_insertion_order() {
        let dir = seeded_dir();

        let output = run_session(&dir, &["1", "0"]);

        let first = output.find("ID: ASM001").unwrap();
        let second = output.find("ID: BAT001").unwrap();
        assert!(first < second);
        assert!(output.contains("--- Comics in Inventory ---"));
    }

    #[test]
    fn test_empty_shop_listings() {
        let dir = TempDir::new().unwrap();

        let output = run_session(&dir, &["1", "7", "8", "0"]);

        assert!(output.contains("The comic inventory is empty."));
        assert_eq!(output.matches("No users are registered.").count(), 2);
    }

    #[test]
    fn test_add_user_and_list_by_name() {
        let dir = seeded_dir();

        let output = run_session(
            &dir,
            &["9", "U3", "Carla", " Carla@Example.COM ", "8", "0"],
        );

        assert!(output.contains("User 'Carla' (ID: U3) added."));
        let ana = output.find("ID: 'U1', Nombre: 'Ana'").unwrap();
        let carla = output
            .find("ID: 'U3', Nombre: 'Carla', Email: 'carla@example.com'")
            .unwrap();
        let luis = output.find("ID: 'U2', Nombre: 'Luis', Email: 'N/A'").unwrap();
        assert!(ana < carla && carla < luis);

        assert_eq!(
            read(&dir, "usuarios.csv"),
            "ID,Nombre,Email\n\
             U1,Ana,ana@example.com\n\
             U2,Luis,\n\
             U3,Carla,carla@example.com\n"
        );
    }

    #[rstest]
    #[case::duplicate_id(&["9", "u1", "Other", "", "0"], "the ID is already registered")]
    #[case::duplicate_email(
        &["9", "U3", "Other", "ANA@example.com", "0"],
        "the email is already registered"
    )]
    fn test_add_duplicate_user(#[case] lines: &[&str], #[case] expected: &str) {
        let dir = seeded_dir();

        let output = run_session(&dir, lines);

        assert!(output.contains(expected), "missing {:?} in {}", expected, output);
        assert_eq!(read(&dir, "usuarios.csv"), USERS);
    }

    #[test]
    fn test_add_user_without_email() {
        let dir = seeded_dir();

        run_session(&dir, &["9", "U3", "Marta", "", "0"]);

        assert!(read(&dir, "usuarios.csv").ends_with("U3,Marta,\n"));
    }

    #[rstest]
    #[case::word("abc", "Invalid input. Please enter a number.")]
    #[case::unknown_number("42", "Invalid option. Please try again.")]
    fn test_invalid_menu_selection(#[case] selection: &str, #[case] expected: &str) {
        let dir = seeded_dir();

        let output = run_session(&dir, &[selection, "0"]);

        assert!(output.contains(expected));
        assert!(output.contains("Leaving the comic shop. See you soon!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let dir = seeded_dir();
        let config = StorageConfig::in_dir(dir.path());
        let mut shop = ComicShop::open_with_clock(config, Box::new(FixedClock(instant())));
        let mut output = Vec::new();

        // Input ends in the middle of the sale flow
        Console::new(&mut shop, Cursor::new("1\n3\nASM001\n"), &mut output)
            .run()
            .unwrap();

        assert_eq!(read(&dir, "comics.csv"), COMICS);
        assert!(read(&dir, "ventas_log.txt").is_empty());
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = seeded_dir();

        run_session(&dir, &["5", "SAG001", "Saga", "BKV", "3", "SAG001", "U2", "0"]);
        let output = run_session(&dir, &["2", "SAG001", "0"]);

        assert!(output.contains("ID: SAG001\nTÍTULO: Saga\nAUTOR: BKV\nESTADO: vendido"));
    }

    #[test]
    fn test_missing_files_start_empty_and_get_created() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("shop").join("data");
        let config = StorageConfig::in_dir(&nested);
        let mut shop = ComicShop::open_with_clock(config.clone(), Box::new(FixedClock(instant())));
        let mut output = Vec::new();

        Console::new(
            &mut shop,
            Cursor::new("5\nA1\nWatchmen\nAlan Moore\n9\nU1\nAna\n\n3\nA1\nU1\n0\n"),
            &mut output,
        )
        .run()
        .unwrap();

        assert_eq!(
            fs::read_to_string(&config.comics_csv).unwrap(),
            "ID,Titulo,Autor,Estado\nA1,Watchmen,Alan Moore,vendido\n"
        );
        assert_eq!(
            fs::read_to_string(&config.users_csv).unwrap(),
            "ID,Nombre,Email\nU1,Ana,\n"
        );
        assert_eq!(fs::read_to_string(&config.sales_log).unwrap().lines().count(), 1);
    }
}
