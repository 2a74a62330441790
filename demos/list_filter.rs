//! Runs the list filter full screen. Logs go to `list-filter.log`.
//!
//! `enter` or a click on the "Selected" line opens the dialog, typing
//! filters, `enter` or a click chooses, `esc` closes, `ctrl+c` quits.

use bubbletea_listfilter::prelude::*;
use bubbletea_rs::{Cmd, Model, MouseMotion, Msg, Program};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

const TITLES: [&str; 12] = [
    "A Tale of Two Cities",
    "Anna Karenina",
    "Brave New World",
    "Crime and Punishment",
    "Don Quixote",
    "Dune",
    "Emma",
    "Frankenstein",
    "Great Expectations",
    "Moby-Dick",
    "The Brothers Karamazov",
    "Ulysses",
];

struct App {
    picker: ListFilter,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = ListFilterConfig::default()
            .with_header("Library")
            .with_item_noun("book", "books")
            .with_mirror_prompt("Reading: ", "press enter to pick a book");
        let picker = ListFilter::with_config(TITLES, Layout::default(), config);
        (Self { picker }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let dispatch = self.picker.dispatch(&msg);
        if dispatch.default_prevented {
            log::debug!("drag on the header swallowed");
        }
        dispatch.cmd
    }

    fn view(&self) -> String {
        self.picker.view()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("list-filter.log")?,
    )?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .build()?;
    program.run().await?;
    Ok(())
}
