use crate::common::{
    make_temp_dir, run_with_input, stderr_text, stdout_text, write_valid_config,
};
use std::fs;

#[test]
fn import_loads_every_well_formed_row() {
    let dir = make_temp_dir("persist-import");
    write_valid_config(&dir);
    fs::write(
        dir.join("students.txt"),
        "Alice PRN1 10 9 8\nBob PRN2 7 6 5\n",
    )
    .unwrap();

    let output = run_with_input(&dir, "2\nstudents.txt\n3\n0\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Data imported successfully."));
    assert!(stdout.contains("Name: Alice"));
    assert!(stdout.contains("Name: Bob"));
}

#[test]
fn import_stops_at_the_first_malformed_row() {
    let dir = make_temp_dir("persist-truncated");
    write_valid_config(&dir);
    fs::write(
        dir.join("students.txt"),
        "Alice PRN1 10 9 8\nBob PRN2 7 6\nCal PRN3 5 5 5\n",
    )
    .unwrap();

    let output = run_with_input(&dir, "2\nstudents.txt\n3\n0\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Name: Alice"));
    assert!(!stdout.contains("Name: Bob"));
    assert!(!stdout.contains("Name: Cal"));
}

#[test]
fn missing_import_file_reports_to_stderr_and_continues() {
    let dir = make_temp_dir("persist-missing");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "2\nnowhere.txt\n0\n");
    assert!(output.status.success());

    assert!(stderr_text(&output).contains("Command execution failed for 'ImportFile'."));
    let stdout = stdout_text(&output);
    assert!(!stdout.contains("Data imported successfully."));
    assert!(stdout.contains("Exiting the program. Goodbye!"));
}

#[test]
fn save_writes_rows_in_roster_order() {
    let dir = make_temp_dir("persist-save");
    write_valid_config(&dir);

    let script = "1\nAmy\nP1\n10\n9\n8\n1\nBen\nP2\n5\n5\n5\n8\nout.txt\n0\n";
    let output = run_with_input(&dir, script);
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Data saved successfully."));

    let contents = fs::read_to_string(dir.join("out.txt")).unwrap();
    assert_eq!(contents, "Amy P1 10 9 8\nBen P2 5 5 5\n");
}

#[test]
fn save_on_empty_roster_never_asks_for_a_filename() {
    let dir = make_temp_dir("persist-save-empty");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "8\n0\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("No student data available to save."));
    assert!(!stdout.contains("Enter the filename to save data to:"));
}

#[test]
fn saved_file_imports_back_through_the_menu() {
    let dir = make_temp_dir("persist-roundtrip");
    write_valid_config(&dir);

    let save = run_with_input(&dir, "1\nAmy\nP1\n10\n9\n8\n8\nround.txt\n0\n");
    assert!(save.status.success());

    let load = run_with_input(&dir, "2\nround.txt\n3\n0\n");
    assert!(load.status.success());

    let stdout = stdout_text(&load);
    assert!(stdout.contains("Name: Amy"));
    assert!(stdout.contains("CGPA: 9"));
}
