use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use clap::Parser;
use flagtile_core::{DEFAULT_FRAME_HEIGHT, Widget, WidgetConfig};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

mod bridge;
mod tile;

use bridge::StreamlitHost;
use tile::TileSurface;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Pixel height to request for the widget's frame
    #[arg(long, default_value_t = DEFAULT_FRAME_HEIGHT)]
    frame_height: u32,
}

impl Args {
    fn config(&self) -> WidgetConfig {
        WidgetConfig::new(self.frame_height)
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    if let Err(err) = boot() {
        gloo::console::error!(format!("flagtile failed to start: {:#}", err));
    }
}

fn boot() -> anyhow::Result<()> {
    use gloo::utils::{document, window};

    let location_hash = window().location().hash().unwrap_or_default();
    let args = Args::try_parse_from(location_hash.split(['#', '&']))
        .context("Could not parse args")?;
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).context("Error initializing logger")?;
    }

    let root = document()
        .get_element_by_id("root")
        .context("Could not find id=\"root\" element")?;
    let events = StreamlitHost::events().map_err(|err| anyhow!("{:?}", err))?;

    let host = StreamlitHost;
    let surface = TileSurface::mount(root, host);
    let widget = Rc::new(RefCell::new(Widget::new(host, surface, args.config())));

    let listener = {
        let widget = widget.clone();
        EventListener::new(&events, bridge::RENDER_EVENT, move |event| {
            let result = bridge::render_args(event).and_then(|args| widget.borrow_mut().render(args));
            if let Err(err) = result {
                log::error!("dropping render event: {}", err);
            }
        })
    };
    // lives as long as the frame does
    listener.forget();

    widget.borrow_mut().start()?;
    log::debug!("tile widget started");
    Ok(())
}
