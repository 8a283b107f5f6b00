use crate::command::command_parser::CommandParser;
use crate::command::commands::{
    AddStudentCommand, Command, FindByNameCommand, ImportFileCommand, NOTHING_TO_SAVE_NOTICE,
    SaveFileCommand, immediate_command,
};
use crate::core::context::AppContext;
use crate::core::types::MenuAction;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl, MenuState};
use crate::ui::chrome::UiChrome;
use strum::IntoEnumIterator;

const SUBJECT_COUNT: usize = 3;

/// Field values gathered across the add-student prompt states.
#[derive(Debug, Default)]
struct StudentDraft {
    name: String,
    prn: String,
    marks: Vec<f64>,
}

impl StudentDraft {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn marks_array(&self) -> [f64; 3] {
        [self.marks[0], self.marks[1], self.marks[2]]
    }
}

pub struct MenuFlow<'a> {
    ctx: &'a mut AppContext,
    parser: CommandParser,
    chrome: UiChrome,
    logger: Logger,
    state: MenuState,
    draft: StudentDraft,
}

impl<'a> MenuFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            parser: CommandParser::new(),
            chrome: UiChrome::new(),
            logger,
            state: MenuState::Menu,
            draft: StudentDraft::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> MenuState {
        self.state.clone()
    }
}

impl<'a> Flow for MenuFlow<'a> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            MenuState::Menu => {
                self.print_startup();
                self.print_menu();
                self.chrome.print_prompt("Enter your choice: ");
            }
            MenuState::AddName => self.chrome.print_prompt("Enter Student Name: "),
            MenuState::AddPrn => self.chrome.print_prompt("Enter PRN: "),
            MenuState::AddMark(idx) => self
                .chrome
                .print_prompt(&format!("Enter Subject {} Marks: ", idx + 1)),
            MenuState::ImportPath => self
                .chrome
                .print_prompt("Enter the filename to import data from: "),
            MenuState::SearchName => self.chrome.print_prompt("Enter the name to search: "),
            MenuState::ExportPath => self
                .chrome
                .print_prompt("Enter the filename to save data to: "),
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        match self.state {
            MenuState::Menu => self.handle_menu_selection(input),
            MenuState::AddName => Ok(self.handle_add_name(input)),
            MenuState::AddPrn => Ok(self.handle_add_prn(input)),
            MenuState::AddMark(idx) => Ok(self.handle_add_mark(idx, input)),
            MenuState::ImportPath => Ok(self.handle_import_path(input)),
            MenuState::SearchName => Ok(self.handle_search_name(input)),
            MenuState::ExportPath => Ok(self.handle_export_path(input)),
        }
    }
}

impl<'a> MenuFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Data path: {}", self.ctx.data_dir.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.ctx.startup_displayed = true;
    }

    fn print_menu(&self) {
        println!("====== Student Grading System Menu ======");
        for action in MenuAction::iter() {
            println!("{}. {}", action.selection(), action.label());
        }
    }

    fn handle_menu_selection(&mut self, input: &str) -> Result<FlowCtrl> {
        if input.is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        let action = match self.parser.parse(input) {
            Ok(action) => action,
            Err(_) => {
                self.logger
                    .info("Invalid choice. Please try again.", LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {action}"), LogTarget::FileOnly);

        if let Some(cmd) = immediate_command(action) {
            self.dispatch(action, cmd.as_ref());
            return Ok(FlowCtrl::Continue);
        }

        match action {
            MenuAction::AddStudent => {
                self.draft.reset();
                self.state = MenuState::AddName;
            }
            MenuAction::ImportFile => self.state = MenuState::ImportPath,
            MenuAction::FindByName => self.state = MenuState::SearchName,
            MenuAction::SaveFile => {
                // An empty roster is refused before the filename prompt.
                if self.ctx.roster.is_empty() {
                    self.logger
                        .info(NOTHING_TO_SAVE_NOTICE, LogTarget::ConsoleOnly);
                } else {
                    self.state = MenuState::ExportPath;
                }
            }
            MenuAction::Exit => {
                self.logger
                    .info("Exiting the program. Goodbye!", LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Finish);
            }
            _ => {}
        }
        Ok(FlowCtrl::Continue)
    }

    fn handle_add_name(&mut self, input: &str) -> FlowCtrl {
        if !input.is_empty() {
            self.draft.name = input.to_string();
            self.state = MenuState::AddPrn;
        }
        FlowCtrl::Continue
    }

    fn handle_add_prn(&mut self, input: &str) -> FlowCtrl {
        if !input.is_empty() {
            self.draft.prn = input.to_string();
            self.state = MenuState::AddMark(0);
        }
        FlowCtrl::Continue
    }

    fn handle_add_mark(&mut self, idx: usize, input: &str) -> FlowCtrl {
        let mark = match input.parse::<f64>() {
            Ok(mark) => mark,
            Err(_) => {
                self.logger
                    .warn("Please enter a numeric mark.", LogTarget::ConsoleOnly);
                return FlowCtrl::Continue;
            }
        };

        self.draft.marks.push(mark);
        if idx + 1 < SUBJECT_COUNT {
            self.state = MenuState::AddMark(idx + 1);
            return FlowCtrl::Continue;
        }

        let cmd = AddStudentCommand::new(
            self.draft.name.clone(),
            self.draft.prn.clone(),
            self.draft.marks_array(),
        );
        self.dispatch(MenuAction::AddStudent, &cmd);
        self.draft.reset();
        self.state = MenuState::Menu;
        FlowCtrl::Continue
    }

    fn handle_import_path(&mut self, input: &str) -> FlowCtrl {
        if input.is_empty() {
            return FlowCtrl::Continue;
        }
        let cmd = ImportFileCommand::new(input);
        self.dispatch(MenuAction::ImportFile, &cmd);
        self.state = MenuState::Menu;
        FlowCtrl::Continue
    }

    fn handle_search_name(&mut self, input: &str) -> FlowCtrl {
        if input.is_empty() {
            return FlowCtrl::Continue;
        }
        let cmd = FindByNameCommand::new(input);
        self.dispatch(MenuAction::FindByName, &cmd);
        self.state = MenuState::Menu;
        FlowCtrl::Continue
    }

    fn handle_export_path(&mut self, input: &str) -> FlowCtrl {
        if input.is_empty() {
            return FlowCtrl::Continue;
        }
        let cmd = SaveFileCommand::new(input);
        self.dispatch(MenuAction::SaveFile, &cmd);
        self.state = MenuState::Menu;
        FlowCtrl::Continue
    }

    fn dispatch(&mut self, action: MenuAction, cmd: &dyn Command) {
        if let Err(err) = cmd.perform(self.ctx) {
            self.logger.error(
                format!("Command execution failed for '{action}'. {err}"),
                LogTarget::ConsoleAndFile,
            );
        }
    }
}
