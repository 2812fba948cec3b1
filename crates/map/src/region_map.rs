use catalog::{Area, CardSets, Neighborhood, RegionIndex};
use formats::{RawRegionFeature, RegionFileError};
use interact::{Cursor, InteractionController, InteractionState, PanelContent, resolve_panel};
use layers::{
    CameraOverride, FillPalette, FitCommand, FitOptions, LabelFeature, LabelLayer, RegionLayer,
    RegionLayerSnapshot, Rgba, ViewMode, compute_bounds, paint_expression,
};
use runtime::{AssetLoader, CommandBus, LoadTicket};

const REGION_LAYER_ID: u64 = 1;
const LABEL_LAYER_ID: u64 = 2;

/// Host-supplied inputs. The map treats all of it as read-only reference
/// data; replacing any of it goes through [`RegionMap::set_reference_data`]
/// or [`RegionMap::set_view_mode`], which recompute rather than mutate.
#[derive(Debug, Clone)]
pub struct MapProps {
    pub mode: ViewMode,
    pub areas: Vec<Area>,
    pub neighborhoods: Vec<Neighborhood>,
    /// Explicit camera; when present, auto-fit is disabled entirely.
    pub camera: Option<CameraOverride>,
    pub cards: CardSets,
    pub fit: FitOptions,
    pub palette: FillPalette,
}

impl MapProps {
    pub fn new(mode: ViewMode, areas: Vec<Area>, neighborhoods: Vec<Neighborhood>) -> Self {
        Self {
            mode,
            areas,
            neighborhoods,
            camera: None,
            cards: CardSets::default(),
            fit: FitOptions::default(),
            palette: FillPalette::default(),
        }
    }
}

/// Fire-once notification to the host page, emitted after the state
/// transition that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    AreaClicked(String),
    NeighborhoodClicked(String),
}

/// Outbound effect for the renderer or the host, polled via
/// [`RegionMap::drain_commands`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FitViewport(FitCommand),
    SetCursor(Cursor),
    Notify(Notification),
}

/// The mounted map.
///
/// All derived state (index, region snapshot, labels) is recomputed
/// wholesale when an input changes; interaction state is reset in the same
/// step so a region that disappeared cannot remain selected. Pointer events
/// arrive serialized from the host event loop; nothing here is shared or
/// locked.
#[derive(Debug)]
pub struct RegionMap {
    props: MapProps,
    index: RegionIndex,
    loader: AssetLoader<Vec<RawRegionFeature>, RegionFileError>,
    region_layer: RegionLayer,
    label_layer: LabelLayer,
    regions: RegionLayerSnapshot,
    labels: Vec<LabelFeature>,
    controller: InteractionController,
    commands: CommandBus<Command>,
    cursor: Cursor,
}

impl RegionMap {
    pub fn new(props: MapProps) -> Self {
        let index = RegionIndex::build(&props.areas, &props.neighborhoods);
        let mut map = Self {
            props,
            index,
            loader: AssetLoader::new(),
            region_layer: RegionLayer::new(REGION_LAYER_ID),
            label_layer: LabelLayer::new(LABEL_LAYER_ID),
            regions: RegionLayerSnapshot::default(),
            labels: Vec::new(),
            controller: InteractionController::new(),
            commands: CommandBus::new(),
            cursor: Cursor::Default,
        };
        map.recompute();
        map
    }

    // --- load lifecycle ---------------------------------------------------

    /// Starts the one-time polygon fetch. The host performs the I/O and
    /// reports back through [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loader.begin()
    }

    /// Applies a fetch result. Stale tickets (unmounted or superseded) are
    /// ignored, so a late completion after unmount is a defined no-op.
    /// A failure leaves the map empty and not loading; the host may log it.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RawRegionFeature>, RegionFileError>,
    ) -> bool {
        let applied = self.loader.complete(ticket, result);
        if applied {
            self.recompute();
        }
        applied
    }

    /// Unmount: abandon an in-flight fetch.
    pub fn cancel_load(&mut self) {
        self.loader.cancel();
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn load_error(&self) -> Option<&RegionFileError> {
        self.loader.error()
    }

    // --- input changes ----------------------------------------------------

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.props.mode == mode {
            return;
        }
        self.props.mode = mode;
        self.recompute();
    }

    pub fn set_reference_data(&mut self, areas: Vec<Area>, neighborhoods: Vec<Neighborhood>) {
        self.props.areas = areas;
        self.props.neighborhoods = neighborhoods;
        self.index = RegionIndex::build(&self.props.areas, &self.props.neighborhoods);
        self.recompute();
    }

    // --- pointer events ---------------------------------------------------

    /// Pointer moved; `hit` is the region key under the pointer, resolved
    /// by the renderer.
    pub fn on_pointer_move(&mut self, hit: Option<&str>) {
        let cursor = self.controller.on_pointer_move(hit);
        if cursor != self.cursor {
            self.cursor = cursor;
            self.commands.emit(Command::SetCursor(cursor));
        }
    }

    /// Click. Region clicks select, open the panel, and notify the host
    /// once with the mode-appropriate notification; background clicks clear
    /// an active selection.
    pub fn on_click(&mut self, hit: Option<&str>) {
        let Some(key) = self.controller.on_click(hit) else {
            return;
        };
        let notification = match &self.props.mode {
            ViewMode::Areas => Notification::AreaClicked(key),
            ViewMode::Neighborhoods { .. } | ViewMode::Single { .. } => {
                Notification::NeighborhoodClicked(key)
            }
        };
        self.commands.emit(Command::Notify(notification));
    }

    /// The panel's own close control.
    pub fn close_panel(&mut self) {
        self.controller.close();
    }

    // --- derived views ----------------------------------------------------

    pub fn regions(&self) -> &RegionLayerSnapshot {
        &self.regions
    }

    pub fn labels(&self) -> &[LabelFeature] {
        &self.labels
    }

    pub fn interaction(&self) -> &InteractionState {
        self.controller.state()
    }

    /// Per-region fill colors for the current interaction state.
    pub fn paint(&self) -> Vec<(String, Rgba)> {
        paint_expression(&self.regions, self.controller.state(), &self.props.palette)
    }

    /// Resolved panel content, or `None` when nothing is selected or the
    /// selected key has no card. The panel flag and card availability are
    /// deliberately independent.
    pub fn panel(&self) -> Option<PanelContent> {
        if !self.controller.state().panel_open() {
            return None;
        }
        resolve_panel(self.controller.state().selected(), &self.props.cards)
    }

    pub fn drain_commands(&mut self) -> Vec<Command> {
        self.commands.drain()
    }

    // --- recomputation ----------------------------------------------------

    /// Rebuilds the rendered collections from the current inputs, resets
    /// interaction, and queues the one-shot viewport fit (unless the host
    /// pinned the camera).
    fn recompute(&mut self) {
        let raw: &[RawRegionFeature] = self.loader.asset().map(Vec::as_slice).unwrap_or(&[]);
        self.regions = self.region_layer.extract(raw, &self.index, &self.props.mode);
        self.labels = self
            .label_layer
            .extract(&self.regions, &self.props.mode, &self.index);

        self.controller.reset();
        self.cursor = Cursor::Default;

        if self.props.camera.is_none()
            && let Some(bounds) = compute_bounds(&self.regions.features)
        {
            self.commands.emit(Command::FitViewport(FitCommand {
                bounds,
                options: self.props.fit,
            }));
        }
    }
}
