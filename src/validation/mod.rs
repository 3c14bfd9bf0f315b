/// Author: Renier Barnard
pub mod board_validation;
pub mod distance_error;
pub mod distance_table;
pub mod min_moves;
pub mod pieces;
pub mod square;
