#![allow(unused_crate_dependencies)]
//! Binary entrypoint for the picker demo.

fn main() -> iced::Result {
	sigil_picker_iced::demo::run()
}
