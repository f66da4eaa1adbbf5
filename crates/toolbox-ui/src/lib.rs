//! Toolbox widget core: compiles a toolbox definition into group panels and
//! action buttons, tracks group expand/collapse state in a preference
//! store, and exposes the shortcut table and drag payloads.
//!
//! Widgets are plain data. A host backend renders [`Section`]s and
//! [`ActionButton`]s and forwards user events to [`Toolbox`].

pub mod builder;
pub mod button;
pub mod drag;
pub mod group;
pub mod shortcuts;
pub mod signal;
pub mod toolbox;
pub mod toplevel;
pub mod wrap;

pub use builder::{Compiled, Section, ToolboxBuilder};
pub use button::{ActionButton, ButtonContent, ButtonId, Relief};
pub use drag::{DragAction, DragPayload, DragSource, DragTarget, PointerButton};
pub use group::{GroupPanel, GroupState};
pub use shortcuts::ShortcutTable;
pub use signal::{ListenerId, Listeners};
pub use toolbox::{Toolbox, ToolboxView};
pub use toplevel::{ToplevelWindow, UiManager, WindowContent, WindowSpec};
pub use wrap::{WrapBox, WrapLayout};
