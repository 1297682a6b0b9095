use flagtile_core::{Gesture, HostChannel, RenderedTile, Surface};
use web_sys::Element;
use yew::AppHandle;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
struct TileProps<H: PartialEq> {
    tile: RenderedTile,
    host: H,
}

#[function_component]
fn TileView<H>(props: &TileProps<H>) -> Html
where
    H: HostChannel + Clone + PartialEq + 'static,
{
    let TileProps { tile, host } = props.clone();

    let class: Classes = tile.face.classes().iter().copied().collect();
    let title = tile.face.title().map(str::to_owned);
    let glyph = tile.face.glyph();

    let on_gesture = move |gesture: Gesture| {
        let tile = tile.clone();
        let host = host.clone();
        Callback::from(move |e: MouseEvent| {
            if gesture.suppresses_default() {
                e.prevent_default();
            }
            tile.dispatch(&host, gesture);
        })
    };
    let onclick = on_gesture(Gesture::Primary);
    let oncontextmenu = on_gesture(Gesture::Context);

    html! {
        <div {class} {title} {onclick} {oncontextmenu}>{glyph}</div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct TileRootProps<H: PartialEq> {
    #[prop_or_default]
    tile: Option<RenderedTile>,
    host: H,
}

/// Container for the single tile. Empty until the first render.
#[function_component]
pub(crate) fn TileRoot<H>(props: &TileRootProps<H>) -> Html
where
    H: HostChannel + Clone + PartialEq + 'static,
{
    let Some(tile) = props.tile.clone() else {
        return html! {};
    };

    // a new key per render discards the old element along with its listeners
    let key = tile.generation.to_string();
    html! {
        <TileView<H> key={key} {tile} host={props.host.clone()}/>
    }
}

/// Draws into the `#root` container through a mounted yew app.
pub(crate) struct TileSurface<H>
where
    H: HostChannel + Clone + PartialEq + 'static,
{
    handle: AppHandle<TileRoot<H>>,
    host: H,
}

impl<H> TileSurface<H>
where
    H: HostChannel + Clone + PartialEq + 'static,
{
    pub(crate) fn mount(root: Element, host: H) -> Self {
        let props = TileRootProps {
            tile: None,
            host: host.clone(),
        };
        let handle = yew::Renderer::<TileRoot<H>>::with_root_and_props(root, props).render();
        Self { handle, host }
    }
}

impl<H> Surface for TileSurface<H>
where
    H: HostChannel + Clone + PartialEq + 'static,
{
    fn draw(&mut self, tile: RenderedTile) {
        log::trace!("draw {}: {}", tile.generation, tile.face.glyph());
        self.handle.update(TileRootProps {
            tile: Some(tile),
            host: self.host.clone(),
        });
    }
}
