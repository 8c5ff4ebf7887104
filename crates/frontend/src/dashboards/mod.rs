pub mod d100_store_layout;
