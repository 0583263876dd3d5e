use std::path::PathBuf;

use clap::Parser;
use data_escape::DisplayModes;
use stream_io::{CopyOptions, Numbering};

#[derive(Parser, Debug)]
#[clap(name = "bytecat")]
#[clap(
    about = "Concatenate byte streams with visible non-printing characters",
    long_about = None
)]
pub struct Cli {
    #[clap(short = 'n', long = "number", help = "Number all output lines")]
    pub number: bool,

    #[clap(
        short = 'b',
        long = "number-nonblank",
        help = "Number non-blank output lines, overrides -n"
    )]
    pub number_nonblank: bool,

    #[clap(
        short = 's',
        long = "squeeze-blank",
        help = "Collapse runs of blank lines into one"
    )]
    pub squeeze_blank: bool,

    #[clap(
        short = 'v',
        long = "show-nonprinting",
        help = "Render control and meta bytes visibly"
    )]
    pub show_nonprinting: bool,

    #[clap(
        short = 'e',
        long = "show-ends",
        help = "Mark line ends with $, implies -v"
    )]
    pub show_ends: bool,

    #[clap(
        short = 't',
        long = "show-tabs",
        help = "Render tabs as ^I, implies -v"
    )]
    pub show_tabs: bool,

    #[clap(
        short = 'x',
        long = "show-hex",
        help = "Render escapable bytes as <xx>, implies -v"
    )]
    pub show_hex: bool,

    #[clap(short = 'A', long = "show-all", help = "Same as -vet")]
    pub show_all: bool,

    #[clap(help = "Files to concatenate, - for standard input")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    pub fn copy_options(&self) -> CopyOptions {
        let mut modes = DisplayModes::none();
        if self.show_nonprinting || self.show_all {
            modes = modes.with_nonprinting();
        }
        if self.show_ends || self.show_all {
            modes = modes.with_end_of_line();
        }
        if self.show_tabs || self.show_all {
            modes = modes.with_tabs();
        }
        if self.show_hex {
            modes = modes.with_hex();
        }

        let numbering = if self.number_nonblank {
            Numbering::NonBlank
        } else if self.number {
            Numbering::All
        } else {
            Numbering::None
        };

        CopyOptions {
            numbering,
            modes,
            squeeze_blank: self.squeeze_blank,
            ..CopyOptions::default()
        }
    }

    pub fn paths_or_stdin(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.paths.clone()
        }
    }
}
