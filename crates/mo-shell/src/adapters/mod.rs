mod terminal;
mod ui;

pub use terminal::{StdTerminal, Terminal};
pub use ui::TerminalUi;
