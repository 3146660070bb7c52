//! Ordered color-stop management.
//!
//! The store owns the editable stop list and enforces the one structural
//! invariant the rest of the system relies on: a gradient always has at
//! least [`MIN_STOPS`] stops.

use log::debug;
use rand::Rng;

use gradient_studio_types::{Color, ColorStop, GradientConfig, GradientType};

/// A gradient must keep at least this many stops.
pub const MIN_STOPS: usize = 2;

/// Default position for a newly added stop.
const DEFAULT_POSITION: u8 = 50;

/// Uniformly random 24-bit color.
pub fn random_color() -> Color {
    Color::from_rgb24(rand::thread_rng().gen_range(0..=0xffffff_u32))
}

/// Editable, ordered set of color stops.
///
/// Stops are kept in insertion order internally; [`StopStore::sorted`]
/// produces the position-ordered view the renderer consumes. Removal that
/// would leave fewer than [`MIN_STOPS`] stops is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct StopStore {
    stops: Vec<ColorStop>,
}

impl StopStore {
    /// Store holding exactly the given stops.
    ///
    /// Callers are expected to pass at least [`MIN_STOPS`] stops; a shorter
    /// list is topped up from the seed stops so the invariant holds from
    /// the start.
    pub fn new(stops: Vec<ColorStop>) -> Self {
        let mut stops = stops;
        let have = stops.len();
        if have < MIN_STOPS {
            let seed = GradientConfig::seed_stops();
            stops.extend(seed.into_iter().skip(have));
        }
        Self { stops }
    }

    /// Append a stop. Color defaults to a random 24-bit value, position
    /// to 50%. There is no upper bound on the stop count.
    pub fn add(&mut self, color: Option<Color>, position: Option<u8>) -> &ColorStop {
        let stop = ColorStop::new(
            color.unwrap_or_else(random_color),
            position.unwrap_or(DEFAULT_POSITION),
        );
        self.stops.push(stop);
        self.stops.last().unwrap()
    }

    /// Remove the stop at `index`. Returns `false` (and leaves the store
    /// untouched) when the index is out of range or removal would drop the
    /// count below [`MIN_STOPS`].
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.stops.len() || self.stops.len() <= MIN_STOPS {
            debug!("rejected stop removal at index {index} (len {})", self.stops.len());
            return false;
        }
        self.stops.remove(index);
        true
    }

    /// Mutate the stop at `index` in place. `None` fields are left as-is.
    pub fn update(&mut self, index: usize, color: Option<Color>, position: Option<u8>) -> bool {
        let Some(stop) = self.stops.get_mut(index) else {
            return false;
        };
        if let Some(color) = color {
            stop.color = color;
        }
        if let Some(position) = position {
            stop.position = position.min(100);
        }
        true
    }

    /// Stops in insertion order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Stops sorted ascending by position; ties keep insertion order.
    pub fn sorted(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.sort_by_key(|s| s.position);
        stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Give every stop a fresh random color; the first stop moves to 0%,
    /// all others to 100%.
    pub fn randomize(&mut self) {
        for (i, stop) in self.stops.iter_mut().enumerate() {
            stop.color = random_color();
            stop.position = if i == 0 { 0 } else { 100 };
        }
    }

    /// Snapshot this store into a full gradient configuration.
    pub fn to_config(&self, gradient_type: GradientType, angle: f64) -> GradientConfig {
        GradientConfig::new(gradient_type, angle, self.sorted())
    }
}

impl Default for StopStore {
    /// The editor's initial two stops: `#3b82f6 0%`, `#10b981 100%`.
    fn default() -> Self {
        Self {
            stops: GradientConfig::seed_stops(),
        }
    }
}

/// Fully random gradient: random stop colors (first at 0%, rest at 100%)
/// and a random whole-degree angle in `[0,360]`.
pub fn random_gradient(gradient_type: GradientType) -> GradientConfig {
    let mut store = StopStore::default();
    store.randomize();
    let angle = rand::thread_rng().gen_range(0..=360) as f64;
    store.to_config(gradient_type, angle)
}
