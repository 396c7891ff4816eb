//! Runs the toy machine's bottom sheet through a scripted session: open it,
//! tap through the detents, flick it, drag it slowly, then press the close
//! button. Prints where the sheet is after every step.

mod script;

use anyhow::Context;
use toybox_sheet::{BottomSheet, FixedViewport, SheetConfig, SheetEvent};

use crate::script::{Script, Step};

const FRAME: f32 = 1.0 / 90.0;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Toybox Bottom Sheet Demo ===");
    println!("Set RUST_LOG=debug to see gesture classification.");
    println!();

    let config = SheetConfig::default().with_reference_height(1920.0);
    let mut sheet = BottomSheet::new(config, FixedViewport::new(1080.0, 2400.0))
        .context("building the bottom sheet")?;

    sheet.add_listener(|event| match event {
        SheetEvent::Opened => println!("  -> sheet fully opened"),
        SheetEvent::Closed => println!("  -> sheet closed"),
        SheetEvent::Dismissed => println!("  -> sheet dismissed"),
    });

    let script = Script::new(FRAME)
        .then(Step::Open)
        .then(Step::Tap)
        .then(Step::Flick { distance: -700.0 })
        .then(Step::Drag {
            distance: 300.0,
            frames: 90,
        })
        .then(Step::Tap)
        .then(Step::Close)
        .then(Step::RequestClose);

    script.run(&mut sheet, |label, sheet| {
        println!(
            "{:<22} detent {} ratio {:.3} open {}",
            label,
            sheet.current_detent(),
            sheet.current_ratio(),
            sheet.is_open()
        );
    });

    anyhow::ensure!(sheet.is_dismissed(), "close button did not dismiss the sheet");
    Ok(())
}
