//! fitstart main entrypoint.

use fitstart::run;
use fitstart::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
