// File: crates/chart-core/src/renderer/state.rs
// Summary: Per-draw renderer state: the shared series path plus per-renderer scratch buffers.

use std::collections::HashMap;

use crate::dataset::XyDataset;
use crate::entity::EntityCollection;
use crate::geometry::Point;
use crate::path::Path;

/// State created by `initialise` and threaded through every `draw_item` call of one draw.
#[derive(Clone, Debug)]
pub struct RendererState {
    /// Path accumulated across the items of the current series pass.
    pub series_path: Path,
    pub last_point_good: bool,
    first_item_index: usize,
    last_item_index: usize,
    entities: Option<EntityCollection>,
    pub(crate) scratch: Scratch,
}

#[derive(Clone, Debug)]
pub(crate) enum Scratch {
    Plain,
    Area(AreaScratch),
    Bezier(BezierScratch),
    Sampling(SamplingScratch),
    Deviation(DeviationScratch),
    Candlestick(CandlestickScratch),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct AreaScratch {
    pub area: Path,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct BezierScratch {
    pub points: Vec<Point>,
    pub fill_area: Path,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SamplingScratch {
    pub interval_path: Path,
    pub dx: f64,
    pub last_x: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub close_y: f64,
    /// Last point folded into the current run without being emitted.
    pub pending: Option<Point>,
}

impl SamplingScratch {
    pub fn reset(&mut self) {
        self.interval_path.reset();
        self.last_x = 0.0;
        self.high_y = 0.0;
        self.low_y = 0.0;
        self.close_y = 0.0;
        self.pending = None;
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct DeviationScratch {
    pub lower: Vec<Point>,
    pub upper: Vec<Point>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct CandlestickScratch {
    pub max_candle_width: f64,
    pub max_volume: f64,
    /// Smallest adjacent device-x spacing, computed once per series.
    pub smallest_spacing: HashMap<usize, f64>,
}

macro_rules! scratch_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        /// # Panics
        /// When the state was created by a different renderer kind.
        pub(crate) fn $name(&mut self) -> &mut $ty {
            match &mut self.scratch {
                Scratch::$variant(s) => s,
                _ => panic!(concat!("renderer state has no ", stringify!($variant), " scratch")),
            }
        }
    };
}

impl RendererState {
    pub fn new(collect_entities: bool) -> Self {
        Self::with_scratch(collect_entities, Scratch::Plain)
    }

    pub(crate) fn with_scratch(collect_entities: bool, scratch: Scratch) -> Self {
        Self {
            series_path: Path::new(),
            last_point_good: false,
            first_item_index: 0,
            last_item_index: 0,
            entities: collect_entities.then(EntityCollection::new),
            scratch,
        }
    }

    scratch_accessor!(area_mut, Area, AreaScratch);
    scratch_accessor!(bezier_mut, Bezier, BezierScratch);
    scratch_accessor!(deviation_mut, Deviation, DeviationScratch);
    scratch_accessor!(candlestick_mut, Candlestick, CandlestickScratch);

    /// Series path together with the sampling scratch.
    ///
    /// # Panics
    /// When the state was created by a different renderer kind.
    pub(crate) fn sampling_parts(&mut self) -> (&mut Path, &mut SamplingScratch) {
        match &mut self.scratch {
            Scratch::Sampling(s) => (&mut self.series_path, s),
            _ => panic!("renderer state has no Sampling scratch"),
        }
    }

    pub fn first_item_index(&self) -> usize {
        self.first_item_index
    }

    pub fn last_item_index(&self) -> usize {
        self.last_item_index
    }

    pub fn entities(&self) -> Option<&EntityCollection> {
        self.entities.as_ref()
    }

    pub fn entities_mut(&mut self) -> Option<&mut EntityCollection> {
        self.entities.as_mut()
    }

    pub fn take_entities(&mut self) -> Option<EntityCollection> {
        self.entities.take()
    }

    /// Reset per-series buffers before the items of `series` are drawn in `pass`.
    pub fn start_series_pass(
        &mut self,
        dataset: &dyn XyDataset,
        series: usize,
        first_item: usize,
        last_item: usize,
        pass: usize,
        pass_count: usize,
    ) {
        tracing::trace!(series, pass, pass_count, items = dataset.item_count(series), "start series pass");
        self.series_path.reset();
        self.last_point_good = false;
        self.first_item_index = first_item;
        self.last_item_index = last_item;
        match &mut self.scratch {
            Scratch::Area(s) => s.area.reset(),
            Scratch::Bezier(s) => {
                s.points.clear();
                s.fill_area.reset();
            }
            Scratch::Sampling(s) => s.reset(),
            Scratch::Deviation(s) => {
                s.lower.clear();
                s.upper.clear();
            }
            Scratch::Candlestick(_) | Scratch::Plain => {}
        }
    }

    pub fn end_series_pass(&mut self, series: usize, pass: usize) {
        tracing::trace!(series, pass, "end series pass");
    }
}
