use crate::*;

/// The host side of the messaging bridge.
///
/// Every call is fire-and-forget: the widget neither retries nor waits for an
/// acknowledgement, delivery belongs to the host.
pub trait HostChannel {
    fn signal_ready(&self);
    fn report_height(&self, pixels: u32);
    fn send_action(&self, payload: &ActionPayload);
}

/// Where the tile gets drawn. A draw replaces whatever the previous one left,
/// including the gesture handlers attached to it.
pub trait Surface {
    fn draw(&mut self, tile: RenderedTile);
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Uninitialized,
    Ready,
    Rendered,
}

impl WidgetState {
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Ready | Self::Rendered)
    }
}

/// Snapshot of a single render. Gestures are decided against the args
/// captured here, never against anything older.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedTile {
    pub generation: u64,
    pub args: RenderArgs,
    pub face: TileFace,
}

impl RenderedTile {
    fn new(generation: u64, args: RenderArgs) -> Self {
        Self {
            generation,
            face: TileFace::from_args(&args),
            args,
        }
    }

    /// Translates `gesture` and sends the resulting action to the host.
    pub fn dispatch<H: HostChannel + ?Sized>(&self, host: &H, gesture: Gesture) -> TileAction {
        let action = translate(gesture, &self.args);
        log::trace!(
            "{:?} on {:?} (render {}): {}",
            gesture,
            self.args.position(),
            self.generation,
            action
        );
        host.send_action(&action.into());
        action
    }
}

#[derive(Debug)]
pub struct Widget<H, S> {
    host: H,
    surface: S,
    config: WidgetConfig,
    state: WidgetState,
    generation: u64,
}

impl<H: HostChannel, S: Surface> Widget<H, S> {
    pub fn new(host: H, surface: S, config: WidgetConfig) -> Self {
        Self {
            host,
            surface,
            config,
            state: Default::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tells the host the widget can receive render events and how tall its
    /// frame should be. Must happen exactly once, before any render.
    pub fn start(&mut self) -> Result<()> {
        if self.state.is_started() {
            return Err(WidgetError::AlreadyStarted);
        }

        self.host.signal_ready();
        self.host.report_height(self.config.frame_height);
        self.state = WidgetState::Ready;
        log::debug!("ready, frame height: {}", self.config.frame_height);
        Ok(())
    }

    /// Redraws the tile from scratch for `args`.
    pub fn render(&mut self, args: RenderArgs) -> Result<()> {
        if !self.state.is_started() {
            return Err(WidgetError::NotStarted);
        }

        self.generation = self.generation.wrapping_add(1);
        log::debug!("render {}: {:?}", self.generation, args);
        self.surface.draw(RenderedTile::new(self.generation, args));
        self.state = WidgetState::Rendered;
        Ok(())
    }
}
