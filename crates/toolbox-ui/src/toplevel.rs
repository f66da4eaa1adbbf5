//! Toplevel window assembly: title, size, icons, accelerators and the
//! menubar / toolbar / main content stack.

use toolbox_common::Size;
use tracing::debug;

// =============================================================================
// WINDOW DESCRIPTION
// =============================================================================

/// Static description of a toplevel window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub size: Size,
    pub resizable: bool,
    pub icons: Vec<String>,
    /// Empty when the window has no menubar.
    pub menubar_path: String,
    /// Empty when the window has no toolbar.
    pub toolbar_path: String,
}

impl WindowSpec {
    /// Whether the window stacks a menubar and/or toolbar above the content.
    pub fn is_stacked(&self) -> bool {
        !self.menubar_path.is_empty() || !self.toolbar_path.is_empty()
    }
}

/// Source of shared menubar/toolbar widgets and the accelerator group.
pub trait UiManager {
    type Widget;
    type AccelGroup;

    /// Widget registered at `path`, if any.
    fn widget(&self, path: &str) -> Option<Self::Widget>;

    fn accel_group(&self) -> Self::AccelGroup;
}

// =============================================================================
// ASSEMBLED WINDOW
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum WindowContent<W> {
    /// The main component fills the window.
    Simple(W),
    /// Vertical stack: menubar, toolbar, then the main component.
    Stacked {
        menubar: Option<W>,
        toolbar: Option<W>,
        main: W,
        /// The main component takes the extra space when the window is
        /// resizable.
        expand_main: bool,
    },
}

impl<W> WindowContent<W> {
    pub fn main(&self) -> &W {
        match self {
            WindowContent::Simple(main) => main,
            WindowContent::Stacked { main, .. } => main,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToplevelWindow<W, A> {
    pub title: String,
    pub size_request: Size,
    pub resizable: bool,
    pub icons: Vec<String>,
    pub accel_group: A,
    pub content: WindowContent<W>,
}

impl<W, A> ToplevelWindow<W, A> {
    /// Assemble a window around `main`.
    ///
    /// Paths that the UI manager does not know are left out of the stack.
    pub fn construct<U>(spec: &WindowSpec, ui: &U, main: W) -> Self
    where
        U: UiManager<Widget = W, AccelGroup = A>,
    {
        let content = if spec.is_stacked() {
            let lookup = |path: &str| {
                if path.is_empty() {
                    None
                } else {
                    ui.widget(path)
                }
            };
            WindowContent::Stacked {
                menubar: lookup(&spec.menubar_path),
                toolbar: lookup(&spec.toolbar_path),
                main,
                expand_main: spec.resizable,
            }
        } else {
            WindowContent::Simple(main)
        };

        debug!(title = %spec.title, stacked = spec.is_stacked(), "toplevel window constructed");

        Self {
            title: spec.title.clone(),
            size_request: spec.size,
            resizable: spec.resizable,
            icons: spec.icons.clone(),
            accel_group: ui.accel_group(),
            content,
        }
    }
}
