pub mod pie;
pub mod slider;
pub mod tabs_state;

pub use pie::{PieChart, GROUP_COLORS};
pub use slider::{Slider, SliderTrack};
pub use tabs_state::{TabSpec, TabsState};
