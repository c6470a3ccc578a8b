//! Line-oriented calculator session.

use dye_core::{FabricType, LoadStatus, RecipeStore, Session};

/// Command summary printed at startup and on `help`.
pub const HELP: &str = "\
Commands:
  color <id>        set the color identifier
  fabric <name>     choose the fabric (clears the width)
  width <label>     choose a width offered for the fabric
  liters <n>        set the bath volume
  percent [n]       set the percent adjustment (blank for none)
  calc              calculate
  reset             clear the form
  history           show the calculations of this session
  clear             clear the history
  fabrics | widths  list fabrics / widths for the current fabric
  status            show the form and data source
  quit";

/// What to print after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Silent,
    Quit,
}

/// Session bound to a loaded store.
pub struct Shell<'a> {
    store: &'a RecipeStore,
    session: Session,
}

impl<'a> Shell<'a> {
    pub fn new(store: &'a RecipeStore) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    /// Execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => Reply::Silent,
            "help" | "?" => Reply::Text(HELP.to_string()),
            "quit" | "exit" => Reply::Quit,
            "color" => {
                self.session.set_color(rest);
                Reply::Silent
            }
            "liters" => {
                self.session.set_liters(rest);
                Reply::Silent
            }
            "percent" => {
                self.session.set_percent(rest);
                Reply::Silent
            }
            "fabric" => match FabricType::from_name(rest) {
                Some(fabric) => {
                    let widths = self.session.select_fabric(Some(fabric));
                    Reply::Text(format!("{}: {}", fabric, list_widths(widths)))
                }
                None => Reply::Text(format!("Unknown fabric '{}'", rest)),
            },
            "width" => {
                if self.session.select_width(rest) {
                    Reply::Silent
                } else {
                    Reply::Text(format!(
                        "Width '{}' is not offered for {} ({})",
                        rest,
                        self.session.fabric_label(),
                        list_widths(self.session.width_options())
                    ))
                }
            }
            "calc" => {
                let _ = self.session.calculate(self.store);
                Reply::Text(self.session.result_text().to_string())
            }
            "reset" => {
                self.session.reset();
                Reply::Text(self.session.result_text().to_string())
            }
            "history" => Reply::Text(self.session.show_history()),
            "clear" => {
                self.session.clear_history();
                Reply::Silent
            }
            "fabrics" => Reply::Text(
                FabricType::ALL
                    .iter()
                    .map(FabricType::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            "widths" => Reply::Text(list_widths(self.session.width_options())),
            "status" => Reply::Text(self.status()),
            other => Reply::Text(format!("Unknown command '{}', type help", other)),
        }
    }

    fn status(&self) -> String {
        let source = match self.store.status() {
            LoadStatus::Loaded { source, recipes } => format!("{} recipe(s) from {}", recipes, source),
            LoadStatus::Unavailable { reason } => format!("offline ({})", reason),
        };
        format!(
            "{} | {} | {} | history: {} | data: {}",
            self.session.fabric_label(),
            self.session.width_label(),
            self.session.result_text().lines().next().unwrap_or_default(),
            self.session.history().len(),
            source
        )
    }
}

fn list_widths(widths: &[&str]) -> String {
    if widths.is_empty() {
        "no widths".to_string()
    } else {
        widths.join(", ")
    }
}
