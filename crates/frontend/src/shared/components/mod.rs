pub mod badges;
pub mod data_grid;
pub mod filter_toggle;
pub mod pagination_controls;
pub mod search_input;
