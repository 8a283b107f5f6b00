use crate::core::context::AppContext;
use crate::core::models::Student;
use crate::core::persist::{export_file, import_file, resolve_data_path};
use crate::core::stats::average_cgpa;
use crate::core::types::MenuAction;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::ui::reporter::Reporter;

/// Notice for report/search/sort operations on an empty roster.
pub const NO_DATA_NOTICE: &str = "No student data available.";
/// Notice for a save request on an empty roster.
pub const NOTHING_TO_SAVE_NOTICE: &str = "No student data available to save.";

pub trait Command {
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;
}

pub type CommandDyn = Box<dyn Command>;

/// Actions that run straight off the menu, with no further prompting.
/// Prompt-driven actions (add, import, search, save) are built by the menu
/// flow once their inputs are gathered.
pub fn immediate_command(action: MenuAction) -> Option<CommandDyn> {
    match action {
        MenuAction::ShowReportCard => Some(Box::new(ShowReportCardCommand)),
        MenuAction::FindHighest => Some(Box::new(FindHighestCommand)),
        MenuAction::FindLowest => Some(Box::new(FindLowestCommand)),
        MenuAction::SortByCgpa => Some(Box::new(SortByCgpaCommand)),
        _ => None,
    }
}

pub struct AddStudentCommand {
    name: String,
    prn: String,
    marks: [f64; 3],
}

impl AddStudentCommand {
    pub fn new(name: impl Into<String>, prn: impl Into<String>, marks: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            prn: prn.into(),
            marks,
        }
    }
}

impl Command for AddStudentCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let stored = ctx
            .roster
            .add(Student::new(&self.name, &self.prn, self.marks));
        ctx.logger
            .info(format!("Added record: {stored}"), LogTarget::FileOnly);
        ctx.logger
            .info("Student data added successfully.", LogTarget::ConsoleOnly);
        Ok(())
    }
}

pub struct ImportFileCommand {
    filename: String,
}

impl ImportFileCommand {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

impl Command for ImportFileCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let path = resolve_data_path(&ctx.data_dir, &self.filename);
        let batch = import_file(&path)?;
        let count = batch.len();
        ctx.roster.extend(batch);
        ctx.logger.info(
            format!("Imported {count} record(s) from '{}'.", path.display()),
            LogTarget::FileOnly,
        );
        ctx.logger
            .info("Data imported successfully.", LogTarget::ConsoleOnly);
        Ok(())
    }
}

pub struct ShowReportCardCommand;

impl Command for ShowReportCardCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.roster.is_empty() {
            ctx.logger.info(NO_DATA_NOTICE, LogTarget::ConsoleOnly);
            return Ok(());
        }
        Reporter::new().display_report_card(ctx.roster.records());
        let average = average_cgpa(ctx.roster.records());
        ctx.logger.info(
            format!("Class Average CGPA: {average}"),
            LogTarget::ConsoleOnly,
        );
        Ok(())
    }
}

pub struct FindHighestCommand;

impl Command for FindHighestCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match ctx.roster.highest() {
            Some(student) => Reporter::new().display_labeled("Highest Scorer:", student),
            None => ctx.logger.info(NO_DATA_NOTICE, LogTarget::ConsoleOnly),
        }
        Ok(())
    }
}

pub struct FindLowestCommand;

impl Command for FindLowestCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match ctx.roster.lowest() {
            Some(student) => Reporter::new().display_labeled("Lowest Scorer:", student),
            None => ctx.logger.info(NO_DATA_NOTICE, LogTarget::ConsoleOnly),
        }
        Ok(())
    }
}

pub struct FindByNameCommand {
    name: String,
}

impl FindByNameCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command for FindByNameCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.roster.is_empty() {
            ctx.logger.info(NO_DATA_NOTICE, LogTarget::ConsoleOnly);
            return Ok(());
        }
        match ctx.roster.find_by_name(&self.name) {
            Some(student) => Reporter::new().display_record(student),
            None => ctx.logger.info(
                format!("Student with name '{}' not found.", self.name),
                LogTarget::ConsoleOnly,
            ),
        }
        Ok(())
    }
}

pub struct SortByCgpaCommand;

impl Command for SortByCgpaCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.roster.is_empty() {
            ctx.logger.info(NO_DATA_NOTICE, LogTarget::ConsoleOnly);
            return Ok(());
        }
        ctx.roster.sort_by_cgpa_descending();
        ctx.logger
            .info("Students sorted by CGPA.", LogTarget::ConsoleAndFile);
        Ok(())
    }
}

pub struct SaveFileCommand {
    filename: String,
}

impl SaveFileCommand {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

impl Command for SaveFileCommand {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.roster.is_empty() {
            ctx.logger
                .info(NOTHING_TO_SAVE_NOTICE, LogTarget::ConsoleOnly);
            return Ok(());
        }
        let path = resolve_data_path(&ctx.data_dir, &self.filename);
        let written = export_file(&ctx.roster, &path)?;
        ctx.logger.info(
            format!(
                "Saved {} record(s) to '{}'.",
                ctx.roster.len(),
                written.display()
            ),
            LogTarget::FileOnly,
        );
        ctx.logger
            .info("Data saved successfully.", LogTarget::ConsoleOnly);
        Ok(())
    }
}
