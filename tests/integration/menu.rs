use crate::common::{make_temp_dir, run_with_input, stdout_text, write_valid_config};

#[test]
fn add_then_report_shows_the_record_and_class_average() {
    let dir = make_temp_dir("menu-add");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "1\nAlice\nPRN001\n10\n9\n8\n3\n0\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Student data added successfully."));
    assert!(stdout.contains("Name: Alice"));
    assert!(stdout.contains("PRN: PRN001"));
    assert!(stdout.contains("CGPA: 9"));
    assert!(stdout.contains("Class Average CGPA: 9"));
}

#[test]
fn invalid_choice_notices_and_keeps_looping() {
    let dir = make_temp_dir("menu-invalid");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "42\n0\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Invalid choice. Please try again."));
    assert!(stdout.contains("Exiting the program. Goodbye!"));
}

#[test]
fn exit_selection_terminates_with_success() {
    let dir = make_temp_dir("menu-exit");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "0\n");
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Exiting the program. Goodbye!"));
}

#[test]
fn end_of_input_terminates_with_success() {
    let dir = make_temp_dir("menu-eof");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "");
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Student Grading System Menu"));
}

#[test]
fn empty_roster_reports_emit_the_no_data_notice() {
    let dir = make_temp_dir("menu-empty");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "3\n4\n5\n7\n0\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert_eq!(stdout.matches("No student data available.").count(), 4);
}

#[test]
fn highest_and_lowest_pick_first_inserted_extremes() {
    let dir = make_temp_dir("menu-extremes");
    write_valid_config(&dir);

    let script = "1\nAmy\nP1\n10\n10\n10\n\
                  1\nBen\nP2\n0\n0\n0\n\
                  1\nCal\nP3\n5\n5\n5\n\
                  4\n5\n0\n";
    let output = run_with_input(&dir, script);
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Highest Scorer:\nName: Amy\n"));
    assert!(stdout.contains("Lowest Scorer:\nName: Ben\n"));
}

#[test]
fn sort_reorders_the_report_by_descending_cgpa() {
    let dir = make_temp_dir("menu-sort");
    write_valid_config(&dir);

    let script = "1\nAmy\nP1\n10\n10\n10\n\
                  1\nBen\nP2\n0\n0\n0\n\
                  1\nCal\nP3\n5\n5\n5\n\
                  7\n3\n0\n";
    let output = run_with_input(&dir, script);
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Students sorted by CGPA."));
    let amy = stdout.find("Name: Amy").unwrap();
    let cal = stdout.find("Name: Cal").unwrap();
    let ben = stdout.find("Name: Ben").unwrap();
    assert!(amy < cal && cal < ben);
}

#[test]
fn find_by_name_is_case_sensitive_end_to_end() {
    let dir = make_temp_dir("menu-find");
    write_valid_config(&dir);

    let script = "1\nAlex\nP1\n6\n6\n6\n6\nalex\n6\nAlex\n0\n";
    let output = run_with_input(&dir, script);
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Student with name 'alex' not found."));
    assert!(stdout.contains("Name: Alex"));
}
