//! CSR entry point mounted by Trunk.

use career_roadmap::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
