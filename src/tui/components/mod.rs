//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: Page title, subtitle, status and data source
//! - `ExperienceCard`: One interview experience, collapsed or expanded
//! - `ErrorBanner`: Inline fetch error notice
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `FilterBar`: Option chips for one filter group (remembers hit boxes)
//! - `ExperienceList`: Scrollable card stack with cursor and height cache
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (function parameters), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── header.rs           (Title + status)
//! ├── filter_bar.rs       (Company / Result chips)
//! ├── error_banner.rs     (Inline error)
//! ├── experience_card.rs  (Single card renderer)
//! └── experience_list.rs  (Scrollable card container)
//! ```

pub mod error_banner;
pub mod experience_card;
pub mod experience_list;
pub mod filter_bar;
pub mod header;

pub use error_banner::ErrorBanner;
pub use experience_card::ExperienceCard;
pub use experience_list::{ExperienceList, ExperienceListState, ListEvent};
pub use filter_bar::{FilterBar, FilterBarState};
pub use header::Header;
