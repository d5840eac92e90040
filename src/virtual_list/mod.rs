//! Virtual list engine - windowing over large, variably sized collections
//!
//! Maps a logical collection of `len` items onto the small slice the host
//! actually renders, plus the spacer sizes that stand in for everything else.
//!
//! # Module Structure
//!
//! - `size_table`: SizeTable - per-item sizes and lazily refreshed cumulative offsets
//! - `viewport`: Viewport - scroll offset / container extent snapshot
//! - `window`: RenderWindow - result of window computation
//! - `scroll`: ScrollAlign - alignment for index-based scrolling
//! - `item`: Item - host payload paired with index and measured size
//! - `engine`: VirtualList - the engine itself
//! - `shared`: SharedVirtualList - mutex-guarded handle for multi-threaded hosts
//!
//! # Host contract
//!
//! 1. Construct with the item count and an estimated item size.
//! 2. On scroll or resize, call `compute_window` and render `start..=end`
//!    between spacers of `padding_before` / `padding_after`.
//! 3. After layout, feed real sizes back with `report_measured_size`.
//! 4. When the collection length changes, call `set_item_count`.

pub mod engine;
pub mod item;
pub mod scroll;
pub mod shared;
pub mod size_table;
pub mod viewport;
pub mod window;

pub use engine::VirtualList;
pub use item::Item;
pub use scroll::ScrollAlign;
pub use shared::SharedVirtualList;
pub use size_table::{SizeTable, MAX_ITEM_SIZE};
pub use viewport::Viewport;
pub use window::RenderWindow;
