use crate::common::{build_context, make_temp_dir, write_valid_config};
use gradebook::command::commands::{
    AddStudentCommand, Command, FindByNameCommand, ImportFileCommand, SaveFileCommand,
    ShowReportCardCommand, SortByCgpaCommand,
};
use gradebook::core::models::Student;

#[test]
fn add_command_appends_and_derives_the_cgpa() {
    let dir = make_temp_dir("cmd-add");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);

    AddStudentCommand::new("Amy", "P1", [10.0, 9.0, 8.0])
        .perform(&mut ctx)
        .unwrap();

    assert_eq!(ctx.roster.len(), 1);
    assert_eq!(ctx.roster.records()[0].cgpa(), 9.0);
}

#[test]
fn sort_command_orders_the_roster_descending() {
    let dir = make_temp_dir("cmd-sort");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    ctx.roster.add(Student::new("Ben", "P1", [1.0, 1.0, 1.0]));
    ctx.roster.add(Student::new("Amy", "P2", [9.0, 9.0, 9.0]));

    SortByCgpaCommand.perform(&mut ctx).unwrap();

    let names: Vec<&str> = ctx.roster.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Amy", "Ben"]);
}

#[test]
fn empty_roster_operations_still_succeed() {
    let dir = make_temp_dir("cmd-empty");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);

    assert!(ShowReportCardCommand.perform(&mut ctx).is_ok());
    assert!(SortByCgpaCommand.perform(&mut ctx).is_ok());
    assert!(FindByNameCommand::new("Amy").perform(&mut ctx).is_ok());
    assert!(SaveFileCommand::new("out.txt").perform(&mut ctx).is_ok());
    assert!(!dir.join("out.txt").exists());
}

#[test]
fn save_then_import_round_trips_through_commands() {
    let dir = make_temp_dir("cmd-roundtrip");
    write_valid_config(&dir);

    let mut ctx = build_context(&dir);
    ctx.roster.add(Student::new("Amy", "P1", [10.0, 9.0, 8.0]));
    ctx.roster.add(Student::new("Ben", "P2", [7.5, 6.0, 5.0]));
    SaveFileCommand::new("round.txt").perform(&mut ctx).unwrap();

    let mut fresh = build_context(&dir);
    ImportFileCommand::new("round.txt")
        .perform(&mut fresh)
        .unwrap();

    assert_eq!(fresh.roster.records(), ctx.roster.records());
}

#[test]
fn import_command_fails_on_a_missing_file() {
    let dir = make_temp_dir("cmd-missing");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);

    let result = ImportFileCommand::new("nowhere.txt").perform(&mut ctx);
    assert!(result.is_err());
    assert!(ctx.roster.is_empty());
}
