use std::{fs::File, io::BufReader};

use anyhow::{ensure, Context, Result};
use rand::{rngs::StdRng, SeedableRng};

mod basis;
mod bitmap;
mod canvas;
mod gui;
mod search;
mod stepper;

use crate::{
    basis::{Dim, RunContext},
    stepper::Stepper,
};

/// ウィンドウの大きさ. 目標画像はこれと同じ大きさでなければならない.
const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;

const TARGET_PATH: &str = "starry_night.bmp";

fn main() -> Result<()> {
    let file = File::open(TARGET_PATH)
        .with_context(|| format!("failed to open target image {}", TARGET_PATH))?;
    let target = bitmap::read_bmp(BufReader::new(file))?;

    let dim = Dim {
        w: WINDOW_WIDTH,
        h: WINDOW_HEIGHT,
    };
    ensure!(
        target.dim() == dim,
        "target image must be {}x{}, but was {}x{}",
        dim.w,
        dim.h,
        target.dim().w,
        target.dim().h,
    );

    let stepper = Stepper::new(RunContext { dim, target }, StdRng::from_entropy());
    gui::begin(stepper);

    Ok(())
}
