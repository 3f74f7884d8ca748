use std::io::{self, BufRead, Write};

use story_core::ContainerView;
use story_page::Surface;

/// Stdout-backed surface: prints each render pass, prompts on stdin.
pub struct TerminalSurface {
    loading: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self { loading: true }
    }
}

impl Surface for TerminalSurface {
    fn remove_loading_indicator(&mut self) {
        if self.loading {
            self.loading = false;
            log::debug!("loading indicator removed");
        }
    }

    fn replace_container(&mut self, view: &ContainerView) {
        println!("{}", view.to_html());
    }

    fn remove_story_item(&mut self, story_id: &str) {
        // No retained DOM here; the next render pass drops the row.
        log::debug!("remove_story_item: {story_id}");
    }

    fn hide_submit_form(&mut self) {}

    fn confirm_delete(&mut self, story_id: &str) -> bool {
        print!("Delete story {story_id}? [y/N] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}
