pub use self::canvas::{Canvas, Cell, Viewport};
pub use self::figure::{Figure, Summary};
pub use self::histogram::{Bucket, Histogram};
pub use self::panel::Panel;
pub use self::series::{Bars, ErrorBars, Line, Marker, Series};
pub use self::ticks::Ticks;

mod canvas;
mod figure;
mod histogram;
mod panel;
mod series;
mod ticks;
