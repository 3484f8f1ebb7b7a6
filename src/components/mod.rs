pub mod provider_board;
pub mod provider_table;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use provider_board::{FETCH_LABEL, LOADING_LABEL, ProviderBoard, ProviderBoardProps};
pub use provider_table::{ProviderTable, ProviderTableProps};
