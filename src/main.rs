//! Browser entry point: sets up logging and mounts the app.

use sketch_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
