use crate::ui::ansi::{
    CLEAR_LINE_REST, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Screen-level helpers (banner, styled prompts).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    /// Startup banner, centered to the terminal.
    pub fn print_banner(&self) {
        const INNER_WIDTH: usize = 44;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}G R A D E B O O K{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Student records, graded{STYLE_RESET}");
        let pad = " ".repeat(self.util.center_pad(INNER_WIDTH + 2));
        println!("{pad}╭{}╮", "─".repeat(INNER_WIDTH));
        println!("{pad}│{}│", " ".repeat(INNER_WIDTH));
        println!("{pad}│{}│", self.center_in_box(&title, INNER_WIDTH));
        println!("{pad}│{}│", self.center_in_box(&subtitle, INNER_WIDTH));
        println!("{pad}│{}│", " ".repeat(INNER_WIDTH));
        println!("{pad}╰{}╯", "─".repeat(INNER_WIDTH));
    }

    /// Styled inline prompt; leaves the cursor on the same line.
    pub fn print_prompt(&self, prompt: &str) {
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET} ");
        let _ = io::stdout().flush();
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
