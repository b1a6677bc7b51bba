pub mod aggregate;
pub mod record;
pub mod scale;
pub mod selection;
pub mod types;

pub use aggregate::{CategoryCount, aggregate, max_count};
pub use record::{CarRecord, RecordId, RecordStore};
pub use scale::{BandScale, LinearScale, Ticks, format_tick};
pub use selection::SelectionRegion;
pub use types::{Margin, PlotArea, Viewport};
